//! Text component with typographic variants.

use leptos::prelude::*;

use super::attrs::Attrs;
use crate::ui::style::merge;

/// Typographic variant.
///
/// Each variant carries a fixed font-size/weight/line-height/letter-spacing
/// preset and a default output tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextVariant {
    /// Hero-scale display text.
    Display,
    /// Top-level heading.
    Heading1,
    /// Second-level heading.
    Heading2,
    /// Third-level heading.
    Heading3,
    /// Fourth-level heading.
    Heading4,
    /// Large body copy.
    BodyLg,
    /// Standard body copy (default).
    #[default]
    BodyMd,
    /// Small body copy.
    BodySm,
    /// Form-label text.
    Label,
    /// Caption text.
    Caption,
    /// Uppercase overline text.
    Overline,
}

impl TextVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Display => "text-5xl font-bold leading-tight tracking-tight",
            Self::Heading1 => "text-4xl font-bold leading-tight tracking-tight",
            Self::Heading2 => "text-3xl font-bold leading-snug",
            Self::Heading3 => "text-2xl font-semibold leading-snug",
            Self::Heading4 => "text-xl font-semibold leading-normal",
            Self::BodyLg => "text-lg font-normal leading-relaxed",
            Self::BodyMd => "text-base font-normal leading-relaxed",
            Self::BodySm => "text-sm font-normal leading-normal",
            Self::Label => "text-sm font-semibold leading-none",
            Self::Caption => "text-xs font-normal leading-snug",
            Self::Overline => "text-[11px] font-semibold leading-none uppercase tracking-widest",
        }
    }

    /// The semantic tag this variant renders as when no override is given.
    #[must_use]
    pub fn default_tag(self) -> TextTag {
        match self {
            Self::Display | Self::Heading1 => TextTag::H1,
            Self::Heading2 => TextTag::H2,
            Self::Heading3 => TextTag::H3,
            Self::Heading4 => TextTag::H4,
            Self::BodyLg | Self::BodyMd | Self::BodySm => TextTag::P,
            Self::Label | Self::Caption | Self::Overline => TextTag::Span,
        }
    }
}

/// Output element for [`Text`].
///
/// Overriding the tag decouples semantic markup from visual style, e.g. a
/// `Heading2` preset rendered as a `span` inside a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTag {
    H1,
    H2,
    H3,
    H4,
    P,
    Span,
    Div,
    Label,
}

/// Typography component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Text variant=TextVariant::Heading1>"Welcome"</Text>
///     <Text variant=TextVariant::Caption as_tag=TextTag::Div>"fine print"</Text>
/// }
/// ```
#[component]
pub fn Text(
    /// Typographic variant.
    #[prop(default = TextVariant::BodyMd)]
    variant: TextVariant,
    /// Overrides the default output tag while keeping the variant's preset.
    #[prop(into, optional)]
    as_tag: Option<TextTag>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Passthrough attributes applied to the root node.
    #[prop(optional)]
    attrs: Attrs,
    /// Text content.
    children: Children,
) -> impl IntoView {
    let tag = as_tag.unwrap_or_else(|| variant.default_tag());
    let classes = merge(["font-sans text-primary", variant.classes(), class]);

    match tag {
        TextTag::H1 => view! { <h1 class={classes} {..attrs}>{children()}</h1> }.into_any(),
        TextTag::H2 => view! { <h2 class={classes} {..attrs}>{children()}</h2> }.into_any(),
        TextTag::H3 => view! { <h3 class={classes} {..attrs}>{children()}</h3> }.into_any(),
        TextTag::H4 => view! { <h4 class={classes} {..attrs}>{children()}</h4> }.into_any(),
        TextTag::P => view! { <p class={classes} {..attrs}>{children()}</p> }.into_any(),
        TextTag::Span => view! { <span class={classes} {..attrs}>{children()}</span> }.into_any(),
        TextTag::Div => view! { <div class={classes} {..attrs}>{children()}</div> }.into_any(),
        TextTag::Label => view! { <label class={classes} {..attrs}>{children()}</label> }.into_any(),
    }
}
