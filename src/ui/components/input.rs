//! Labeled text-field component.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use super::attrs::Attrs;
use crate::ui::style::merge;

/// Source for auto-generated field identifiers. Sampled once per component
/// instance, so the label association is stable for the lifetime of one
/// logical field. Not unique across process restarts.
static FIELD_ID: AtomicU64 = AtomicU64::new(0);

fn next_field_id() -> String {
    format!("plinng-field-{}", FIELD_ID.fetch_add(1, Ordering::Relaxed))
}

/// Input size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputSize {
    /// Large field.
    Lg,
    /// Medium field (default).
    #[default]
    Md,
    /// Small field.
    Sm,
}

impl InputSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Lg => "h-12 px-4 text-base",
            Self::Md => "h-10 px-4 text-base",
            Self::Sm => "h-9 px-3 text-sm",
        }
    }
}

/// Labeled text field with optional hint/error line and icon overlays.
///
/// Validation is the caller's responsibility; the widget never inspects the
/// field's value. A non-empty `error` suppresses `hint` and switches the
/// field and message to error styling; an empty `error` behaves as absent.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input label="Email" placeholder="you@example.com" hint="Work address preferred"/>
///     <Input label="Password" input_type="password" error="Required"/>
/// }
/// ```
#[component]
pub fn Input(
    /// Field size.
    #[prop(default = InputSize::Md)]
    size: InputSize,
    /// Visible label, associated with the field by id. Empty means none.
    #[prop(default = "")]
    label: &'static str,
    /// Neutral helper text below the field. Empty means none.
    #[prop(default = "")]
    hint: &'static str,
    /// Error text below the field; non-empty suppresses `hint`.
    #[prop(default = "")]
    error: &'static str,
    /// Optional leading icon overlay.
    #[prop(optional_no_strip)]
    icon_left: Option<AnyView>,
    /// Optional trailing icon overlay.
    #[prop(optional_no_strip)]
    icon_right: Option<AnyView>,
    /// Stretch to full available width.
    #[prop(default = false)]
    block: bool,
    /// Whether the field is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Default value.
    #[prop(default = "")]
    value: &'static str,
    /// Explicit id; empty auto-generates one for the label association.
    #[prop(default = "")]
    id: &'static str,
    /// Additional CSS classes for the field itself.
    #[prop(default = "")]
    class: &'static str,
    /// Passthrough attributes applied to the field.
    #[prop(optional)]
    attrs: Attrs,
) -> impl IntoView {
    let field_id = if id.is_empty() {
        next_field_id()
    } else {
        id.to_string()
    };
    let has_error = !error.is_empty();

    let has_icon_left = icon_left.is_some();
    let has_icon_right = icon_right.is_some();

    let field_classes = merge([
        "rounded-lg border font-sans bg-white text-primary placeholder:text-disabled \
         outline-none transition-colors",
        "focus:ring-2 focus:ring-primary/20 focus:border-primary",
        size.classes(),
        if block { "w-full" } else { "w-auto" },
        // Icon overlays inset the field padding on their side.
        if has_icon_left { "pl-10" } else { "" },
        if has_icon_right { "pr-10" } else { "" },
        if has_error {
            "border-red-500 focus:ring-red-500/20 focus:border-red-500"
        } else {
            "border-tertiary-border"
        },
        if disabled {
            "border-disabled text-disabled bg-gray-50 cursor-not-allowed \
             placeholder:text-disabled"
        } else {
            ""
        },
        class,
    ]);

    let label_classes = merge([
        "text-sm font-semibold leading-none",
        if disabled { "text-disabled" } else { "text-primary" },
    ]);

    let wrapper_classes = format!(
        "flex flex-col gap-1.5 {}",
        if block { "w-full" } else { "w-fit" }
    );

    // Non-empty error always wins over hint.
    let message = if has_error { error } else { hint };
    let message_classes = format!(
        "text-xs leading-none {}",
        if has_error { "text-red-500" } else { "text-disabled" }
    );

    view! {
        <div class=wrapper_classes>
            {(!label.is_empty()).then(|| view! {
                <label for=field_id.clone() class=label_classes>{label}</label>
            })}

            <div class="relative flex items-center">
                {icon_left.map(|icon| view! {
                    <span class="pointer-events-none absolute left-3 inline-flex shrink-0 text-disabled">
                        {icon}
                    </span>
                })}

                <input
                    id=field_id
                    type=input_type
                    class=field_classes
                    placeholder=placeholder
                    name=name
                    value=value
                    disabled={disabled}
                    {..attrs}
                />

                {icon_right.map(|icon| view! {
                    <span class="pointer-events-none absolute right-3 inline-flex shrink-0 text-disabled">
                        {icon}
                    </span>
                })}
            </div>

            {(!message.is_empty()).then(|| view! {
                <p class=message_classes>{message}</p>
            })}
        </div>
    }
}
