//! Button component with variants, sizes, and loading state.

use leptos::prelude::*;

use super::attrs::Attrs;
use super::icons::SpinnerIcon;
use crate::ui::style::merge;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Outlined tertiary button.
    Tertiary,
}

impl ButtonVariant {
    /// Get CSS classes for this variant, covering base, hover, active, and
    /// disabled states.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-primary text-primary-text hover:bg-primary/80 active:bg-primary/70 \
                 disabled:bg-primary/50 disabled:cursor-not-allowed disabled:hover:bg-primary/50"
            }
            Self::Secondary => {
                "bg-secondary text-secondary-text hover:bg-secondary/80 active:bg-secondary/70 \
                 disabled:opacity-50 disabled:cursor-not-allowed disabled:hover:bg-secondary"
            }
            Self::Tertiary => {
                "bg-tertiary text-tertiary-text border border-tertiary-border hover:bg-gray-100 \
                 active:bg-gray-200 disabled:border-disabled disabled:text-disabled \
                 disabled:bg-tertiary disabled:cursor-not-allowed disabled:hover:bg-tertiary"
            }
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Large button.
    Lg,
    /// Medium button (default).
    #[default]
    Md,
    /// Small button.
    Sm,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Lg => "h-12 px-8 py-3 text-base leading-[22px]",
            Self::Md => "h-10 px-6 py-2 text-base leading-[22px]",
            Self::Sm => "h-9 px-[18px] py-1.5 text-base leading-[22px]",
        }
    }
}

/// Clickable action trigger.
///
/// Click handling is pure passthrough (e.g. an `hx-post` or `onclick`
/// attribute via `attrs`); the widget never handles events itself.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary size=ButtonSize::Lg>
///         "Submit"
///     </Button>
///     <Button loading=true>"Never shown while loading"</Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Stretch to full available width.
    #[prop(default = false)]
    block: bool,
    /// Replace all content with a spinner and suppress interaction.
    #[prop(default = false)]
    loading: bool,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Optional leading icon.
    #[prop(optional_no_strip)]
    icon_left: Option<AnyView>,
    /// Optional trailing icon.
    #[prop(optional_no_strip)]
    icon_right: Option<AnyView>,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Passthrough attributes applied to the root node.
    #[prop(optional)]
    attrs: Attrs,
    /// Button content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    // Loading forces non-interactivity even when `disabled` was not passed.
    let is_disabled = disabled || loading;

    let classes = merge([
        "inline-flex items-center justify-center gap-2 rounded-full font-semibold \
         transition-colors cursor-pointer",
        size.classes(),
        variant.classes(),
        if block { "w-full" } else { "" },
        class,
    ]);

    let content = if loading {
        view! { <SpinnerIcon/> }.into_any()
    } else {
        view! {
            {icon_left.map(|icon| view! { <span class="inline-flex shrink-0">{icon}</span> })}
            {children.map(|children| view! { <span>{children()}</span> })}
            {icon_right.map(|icon| view! { <span class="inline-flex shrink-0">{icon}</span> })}
        }
        .into_any()
    };

    view! {
        <button type=button_type class=classes disabled={is_disabled} {..attrs}>
            {content}
        </button>
    }
}
