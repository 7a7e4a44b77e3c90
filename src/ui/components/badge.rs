//! Badge component for status indicators and tags.

use leptos::prelude::*;

use super::attrs::Attrs;
use crate::ui::style::merge;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Neutral badge style.
    #[default]
    Default,
    /// Success/positive badge.
    Success,
    /// Warning badge.
    Warning,
    /// Error badge.
    Error,
    /// Informational badge.
    Info,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-gray-100 text-gray-700",
            Self::Success => "bg-green-100 text-green-700",
            Self::Warning => "bg-yellow-100 text-yellow-700",
            Self::Error => "bg-red-100 text-red-600",
            Self::Info => "bg-blue-100 text-blue-700",
        }
    }

    /// Fill color for the leading indicator dot, saturated per variant.
    #[must_use]
    pub fn dot_classes(self) -> &'static str {
        match self {
            Self::Default => "bg-gray-500",
            Self::Success => "bg-green-500",
            Self::Warning => "bg-yellow-500",
            Self::Error => "bg-red-500",
            Self::Info => "bg-blue-500",
        }
    }
}

/// Badge size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeSize {
    /// Medium badge (default).
    #[default]
    Md,
    /// Compact badge with 11px text.
    Sm,
}

impl BadgeSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "px-2.5 py-1 text-xs",
            Self::Sm => "px-2 py-0.5 text-[11px]",
        }
    }

    /// Dimensions of the indicator dot at this size.
    #[must_use]
    pub fn dot_classes(self) -> &'static str {
        match self {
            Self::Md => "w-1.5 h-1.5",
            Self::Sm => "w-1 h-1",
        }
    }
}

/// Compact status label.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Success dot=true>"Active"</Badge>
///     <Badge variant=BadgeVariant::Warning size=BadgeSize::Sm>"Pending"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Badge size.
    #[prop(default = BadgeSize::Md)]
    size: BadgeSize,
    /// Show a leading indicator dot.
    #[prop(default = false)]
    dot: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Passthrough attributes applied to the root node.
    #[prop(optional)]
    attrs: Attrs,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = merge([
        "inline-flex items-center gap-1.5 rounded-full font-semibold leading-none",
        size.classes(),
        variant.classes(),
        class,
    ]);

    let dot_classes = format!(
        "rounded-full shrink-0 {} {}",
        variant.dot_classes(),
        size.dot_classes()
    );

    view! {
        <span class={classes} {..attrs}>
            {dot.then(|| view! { <span class=dot_classes></span> })}
            {children()}
        </span>
    }
}
