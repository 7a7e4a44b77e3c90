//! Passthrough attributes.
//!
//! Widgets forward caller-supplied `(name, value)` pairs verbatim to their
//! root output node, applied after the widget's own attributes so the caller
//! wins on collision. This is how identifiers, ARIA attributes, `data-*`
//! hooks, and `hx-*` behavior reach a widget without it knowing about them.

use leptos::attr::any_attribute::{AnyAttribute, IntoAnyAttribute};
use leptos::attr::custom::custom_attribute;

/// Extra attributes forwarded verbatim to a widget's root element.
pub type Attrs = Vec<AnyAttribute>;

/// Build an attribute list from `(name, value)` pairs.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge attrs=attrs(&[("id", "status"), ("aria-live", "polite")])>
///         "Active"
///     </Badge>
/// }
/// ```
pub fn attrs(pairs: &[(&'static str, &str)]) -> Attrs {
    pairs
        .iter()
        .map(|&(name, value)| custom_attribute(name, value.to_string()).into_any_attr())
        .collect()
}
