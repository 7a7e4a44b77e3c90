//! Navigable text-link component.

use leptos::prelude::*;

use super::attrs::Attrs;
use crate::ui::style::merge;

/// Link visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkVariant {
    /// Primary link.
    #[default]
    Primary,
    /// Secondary link.
    Secondary,
    /// Tertiary link.
    Tertiary,
}

/// Secondary variant axis selecting a background-context-specific preset.
///
/// `Alternative` is only meaningful combined with [`LinkVariant::Primary`],
/// where it selects a preset for placement over a dark background. With the
/// other variants it falls through to the same preset as `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkOption {
    /// Standard preset.
    #[default]
    Default,
    /// Dark-background preset (primary only).
    Alternative,
}

/// Link size, affecting vertical padding only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkSize {
    /// Large link.
    Lg,
    /// Medium link (default).
    #[default]
    Md,
}

impl LinkSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Lg => "py-[9px]",
            Self::Md => "py-[8px]",
        }
    }
}

/// Color preset for a variant/option/size combination.
///
/// The underline appears only for (primary, default, md).
fn variant_classes(variant: LinkVariant, option: LinkOption, size: LinkSize) -> &'static str {
    match (variant, option) {
        (LinkVariant::Primary, LinkOption::Alternative) => {
            "text-link-primary-alt aria-disabled:text-link-primary-alt-disabled \
             aria-disabled:cursor-not-allowed aria-disabled:pointer-events-none"
        }
        (LinkVariant::Primary, LinkOption::Default) => match size {
            LinkSize::Md => {
                "text-black underline aria-disabled:text-black \
                 aria-disabled:cursor-not-allowed aria-disabled:pointer-events-none"
            }
            LinkSize::Lg => {
                "text-black aria-disabled:text-black aria-disabled:cursor-not-allowed \
                 aria-disabled:pointer-events-none"
            }
        },
        (LinkVariant::Secondary, _) => {
            "text-link-secondary aria-disabled:text-link-secondary-disabled \
             aria-disabled:cursor-not-allowed aria-disabled:pointer-events-none"
        }
        (LinkVariant::Tertiary, _) => {
            "text-link-tertiary aria-disabled:text-link-tertiary-disabled \
             aria-disabled:cursor-not-allowed aria-disabled:pointer-events-none"
        }
    }
}

/// Navigable text link.
///
/// The disabled state is presentational: it sets `aria-disabled="true"` and
/// the matching styling, but an anchor has no native disabled attribute and
/// navigation is not blocked here. Callers guard `href` themselves for a
/// truly non-interactive link.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <LinkWeb href="/docs">"Read the docs"</LinkWeb>
///     <LinkWeb variant=LinkVariant::Primary option=LinkOption::Alternative href="/hero">
///         "Over a dark background"
///     </LinkWeb>
/// }
/// ```
#[component]
pub fn LinkWeb(
    /// Link variant.
    #[prop(default = LinkVariant::Primary)]
    variant: LinkVariant,
    /// Background-context preset (primary only).
    #[prop(default = LinkOption::Default)]
    option: LinkOption,
    /// Link size.
    #[prop(default = LinkSize::Md)]
    size: LinkSize,
    /// Navigation target.
    #[prop(default = "#")]
    href: &'static str,
    /// Presentational disabled state (`aria-disabled` only).
    #[prop(default = false)]
    disabled: bool,
    /// Optional leading icon.
    #[prop(optional_no_strip)]
    icon_left: Option<AnyView>,
    /// Optional trailing icon.
    #[prop(optional_no_strip)]
    icon_right: Option<AnyView>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Passthrough attributes applied to the root node.
    #[prop(optional)]
    attrs: Attrs,
    /// Link content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let classes = merge([
        "inline-flex items-center justify-center gap-2 rounded-sm font-semibold text-base \
         leading-[22px] transition-colors cursor-pointer",
        size.classes(),
        variant_classes(variant, option, size),
        class,
    ]);

    view! {
        <a href=href class=classes aria-disabled={disabled.then_some("true")} {..attrs}>
            {icon_left.map(|icon| view! { <span class="inline-flex shrink-0">{icon}</span> })}
            {children.map(|children| view! { <span>{children()}</span> })}
            {icon_right.map(|icon| view! { <span class="inline-flex shrink-0">{icon}</span> })}
        </a>
    }
}
