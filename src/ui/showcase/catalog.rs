//! Declarative usage catalogs.
//!
//! One `(label, option-set)` list per widget, consumed only by the showcase
//! page to drive the visual gallery. The widgets themselves never read these.

use crate::ui::components::{
    BadgeSize, BadgeVariant, ButtonSize, ButtonVariant, InputSize, LinkOption, LinkSize,
    LinkVariant, TextVariant,
};

/// One Button gallery entry.
#[derive(Debug, Clone, Copy)]
pub struct ButtonExample {
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub block: bool,
    pub loading: bool,
    pub disabled: bool,
    pub with_icons: bool,
    pub text: &'static str,
}

impl Default for ButtonExample {
    fn default() -> Self {
        Self {
            label: "",
            variant: ButtonVariant::Primary,
            size: ButtonSize::Md,
            block: false,
            loading: false,
            disabled: false,
            with_icons: false,
            text: "Button",
        }
    }
}

/// Button gallery: variants, sizes, disabled/loading per variant, icons, block.
pub fn button_examples() -> Vec<ButtonExample> {
    vec![
        ButtonExample { label: "Primary", ..Default::default() },
        ButtonExample { label: "Secondary", variant: ButtonVariant::Secondary, ..Default::default() },
        ButtonExample { label: "Tertiary", variant: ButtonVariant::Tertiary, ..Default::default() },
        ButtonExample { label: "Size / Large", size: ButtonSize::Lg, ..Default::default() },
        ButtonExample { label: "Size / Medium", size: ButtonSize::Md, ..Default::default() },
        ButtonExample { label: "Size / Small", size: ButtonSize::Sm, ..Default::default() },
        ButtonExample { label: "Disabled", disabled: true, ..Default::default() },
        ButtonExample { label: "Disabled / Secondary", variant: ButtonVariant::Secondary, disabled: true, ..Default::default() },
        ButtonExample { label: "Disabled / Tertiary", variant: ButtonVariant::Tertiary, disabled: true, ..Default::default() },
        ButtonExample { label: "Loading", loading: true, ..Default::default() },
        ButtonExample { label: "Loading / Secondary", variant: ButtonVariant::Secondary, loading: true, ..Default::default() },
        ButtonExample { label: "Loading / Tertiary", variant: ButtonVariant::Tertiary, loading: true, ..Default::default() },
        ButtonExample { label: "Icon / Both", with_icons: true, ..Default::default() },
        ButtonExample { label: "Block", block: true, ..Default::default() },
    ]
}

/// One Badge gallery entry.
#[derive(Debug, Clone, Copy)]
pub struct BadgeExample {
    pub label: &'static str,
    pub variant: BadgeVariant,
    pub size: BadgeSize,
    pub dot: bool,
    pub text: &'static str,
}

impl Default for BadgeExample {
    fn default() -> Self {
        Self {
            label: "",
            variant: BadgeVariant::Default,
            size: BadgeSize::Md,
            dot: false,
            text: "Badge",
        }
    }
}

/// Badge gallery: all variants, both sizes, with and without the dot.
pub fn badge_examples() -> Vec<BadgeExample> {
    vec![
        BadgeExample { label: "Default", ..Default::default() },
        BadgeExample { label: "Success", variant: BadgeVariant::Success, text: "Success", ..Default::default() },
        BadgeExample { label: "Warning", variant: BadgeVariant::Warning, text: "Warning", ..Default::default() },
        BadgeExample { label: "Error", variant: BadgeVariant::Error, text: "Error", ..Default::default() },
        BadgeExample { label: "Info", variant: BadgeVariant::Info, text: "Info", ..Default::default() },
        BadgeExample { label: "Size / Medium", size: BadgeSize::Md, ..Default::default() },
        BadgeExample { label: "Size / Small", size: BadgeSize::Sm, ..Default::default() },
        BadgeExample { label: "Dot", variant: BadgeVariant::Success, dot: true, text: "Active", ..Default::default() },
        BadgeExample { label: "Dot / Small", variant: BadgeVariant::Success, dot: true, size: BadgeSize::Sm, text: "Active", ..Default::default() },
    ]
}

/// One Input gallery entry.
#[derive(Debug, Clone, Copy)]
pub struct InputExample {
    pub label: &'static str,
    pub size: InputSize,
    pub field_label: &'static str,
    pub hint: &'static str,
    pub error: &'static str,
    pub placeholder: &'static str,
    pub disabled: bool,
    pub block: bool,
    pub with_icon_left: bool,
    pub with_icon_right: bool,
}

impl Default for InputExample {
    fn default() -> Self {
        Self {
            label: "",
            size: InputSize::Md,
            field_label: "",
            hint: "",
            error: "",
            placeholder: "Placeholder",
            disabled: false,
            block: false,
            with_icon_left: false,
            with_icon_right: false,
        }
    }
}

/// Input gallery: label, hint, error, sizes, disabled, icons, block.
pub fn input_examples() -> Vec<InputExample> {
    vec![
        InputExample { label: "Default", ..Default::default() },
        InputExample { label: "Label", field_label: "Email", placeholder: "you@example.com", ..Default::default() },
        InputExample { label: "Hint", field_label: "Email", hint: "Work address preferred", placeholder: "you@example.com", ..Default::default() },
        InputExample { label: "Error", field_label: "Email", error: "This field is required", placeholder: "you@example.com", ..Default::default() },
        InputExample { label: "Size / Large", size: InputSize::Lg, ..Default::default() },
        InputExample { label: "Size / Medium", size: InputSize::Md, ..Default::default() },
        InputExample { label: "Size / Small", size: InputSize::Sm, ..Default::default() },
        InputExample { label: "Disabled", field_label: "Email", disabled: true, placeholder: "you@example.com", ..Default::default() },
        InputExample { label: "Icon / Left", with_icon_left: true, placeholder: "Search...", ..Default::default() },
        InputExample { label: "Icon / Right", with_icon_right: true, ..Default::default() },
        InputExample { label: "Icon / Both", with_icon_left: true, with_icon_right: true, ..Default::default() },
        InputExample { label: "Block", field_label: "Full width", block: true, ..Default::default() },
    ]
}

/// One LinkWeb gallery entry.
#[derive(Debug, Clone, Copy)]
pub struct LinkExample {
    pub label: &'static str,
    pub variant: LinkVariant,
    pub option: LinkOption,
    pub size: LinkSize,
    pub disabled: bool,
    pub with_icons: bool,
    pub text: &'static str,
    /// Alternative-option entries display over a dark backdrop.
    pub dark_backdrop: bool,
}

impl Default for LinkExample {
    fn default() -> Self {
        Self {
            label: "",
            variant: LinkVariant::Primary,
            option: LinkOption::Default,
            size: LinkSize::Md,
            disabled: false,
            with_icons: false,
            text: "Link",
            dark_backdrop: false,
        }
    }
}

/// LinkWeb gallery: variants, the alternative option, sizes, disabled, icons.
pub fn link_examples() -> Vec<LinkExample> {
    vec![
        LinkExample { label: "Primary", ..Default::default() },
        LinkExample { label: "Secondary", variant: LinkVariant::Secondary, ..Default::default() },
        LinkExample { label: "Tertiary", variant: LinkVariant::Tertiary, ..Default::default() },
        LinkExample { label: "Primary / Alternative", option: LinkOption::Alternative, dark_backdrop: true, ..Default::default() },
        LinkExample { label: "Size / Large", size: LinkSize::Lg, ..Default::default() },
        LinkExample { label: "Size / Medium", size: LinkSize::Md, ..Default::default() },
        LinkExample { label: "Disabled", disabled: true, ..Default::default() },
        LinkExample { label: "Disabled / Secondary", variant: LinkVariant::Secondary, disabled: true, ..Default::default() },
        LinkExample { label: "Disabled / Tertiary", variant: LinkVariant::Tertiary, disabled: true, ..Default::default() },
        LinkExample { label: "Disabled / Primary Alternative", option: LinkOption::Alternative, disabled: true, dark_backdrop: true, ..Default::default() },
        LinkExample { label: "Icon / Both", with_icons: true, ..Default::default() },
    ]
}

/// One Text gallery entry.
#[derive(Debug, Clone, Copy)]
pub struct TextExample {
    pub label: &'static str,
    pub variant: TextVariant,
    pub text: &'static str,
}

/// Text gallery: every typographic variant.
pub fn text_examples() -> Vec<TextExample> {
    vec![
        TextExample { label: "display", variant: TextVariant::Display, text: "Display" },
        TextExample { label: "heading-1", variant: TextVariant::Heading1, text: "Heading 1" },
        TextExample { label: "heading-2", variant: TextVariant::Heading2, text: "Heading 2" },
        TextExample { label: "heading-3", variant: TextVariant::Heading3, text: "Heading 3" },
        TextExample { label: "heading-4", variant: TextVariant::Heading4, text: "Heading 4" },
        TextExample { label: "body-lg", variant: TextVariant::BodyLg, text: "Large body copy" },
        TextExample { label: "body-md", variant: TextVariant::BodyMd, text: "Standard body copy" },
        TextExample { label: "body-sm", variant: TextVariant::BodySm, text: "Small body copy" },
        TextExample { label: "label", variant: TextVariant::Label, text: "Form label" },
        TextExample { label: "caption", variant: TextVariant::Caption, text: "Caption text" },
        TextExample { label: "overline", variant: TextVariant::Overline, text: "Overline" },
    ]
}
