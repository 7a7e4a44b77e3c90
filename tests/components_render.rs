//! Table-driven render assertions for every widget's option matrix.

use leptos::prelude::*;

use plinng_ui::ui::components::{
    Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, Input, InputSize,
    LinkOption, LinkSize, LinkVariant, LinkWeb, MailIcon, SearchIcon, Text, TextTag, TextVariant,
    attrs,
};

/// Pull a quoted attribute value out of rendered HTML.
fn extract_attr(html: &str, attr: &str) -> String {
    let needle = format!("{attr}=\"");
    let start = html
        .find(&needle)
        .unwrap_or_else(|| panic!("attribute {attr} not found in {html}"))
        + needle.len();
    let end = html[start..].find('"').expect("unterminated attribute") + start;
    html[start..end].to_string()
}

/// Whether the rendered element carries the native `disabled` attribute
/// (distinct from `disabled:` class tokens, which follow a letter, not a quote).
fn has_disabled_attr(html: &str) -> bool {
    html.contains("\" disabled")
}

// ─────────────────────────────────────────────────────────────────────────────
// Button
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn button_renders_every_variant_size_combination() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Tertiary,
    ];
    let sizes = [ButtonSize::Lg, ButtonSize::Md, ButtonSize::Sm];

    for variant in variants {
        for size in sizes {
            let html = view! {
                <Button variant=variant size=size>"Go"</Button>
            }
            .to_html();

            assert!(html.starts_with("<button"), "not a button: {html}");
            assert!(
                html.contains(variant.classes()),
                "{variant:?} tokens missing for {variant:?}/{size:?}"
            );
            assert!(
                html.contains(size.classes()),
                "{size:?} tokens missing for {variant:?}/{size:?}"
            );
        }
    }
}

#[test]
fn button_effective_disability_is_disabled_or_loading() {
    for disabled in [false, true] {
        for loading in [false, true] {
            let html = view! {
                <Button disabled=disabled loading=loading>"Go"</Button>
            }
            .to_html();

            assert_eq!(
                has_disabled_attr(&html),
                disabled || loading,
                "disabled={disabled} loading={loading}: {html}"
            );
        }
    }
}

#[test]
fn button_loading_replaces_content_and_icons_with_spinner() {
    let html = view! {
        <Button
            loading=true
            icon_left=Some(view! { <MailIcon/> }.into_any())
            icon_right=Some(view! { <MailIcon/> }.into_any())
        >
            "Submit"
        </Button>
    }
    .to_html();

    assert!(!html.contains("Submit"));
    assert!(html.contains("animate-spin"));
    // The mail rect never renders while loading.
    assert!(!html.contains("<rect"));
}

#[test]
fn button_loading_secondary_end_to_end() {
    let html = view! {
        <Button loading=true variant=ButtonVariant::Secondary>"Submit"</Button>
    }
    .to_html();

    assert!(has_disabled_attr(&html));
    assert!(!html.contains("Submit"));
    assert!(html.contains("animate-spin"));
    assert!(html.contains("bg-secondary"));
}

#[test]
fn button_block_stretches_full_width() {
    let block = view! { <Button block=true>"Go"</Button> }.to_html();
    let inline = view! { <Button>"Go"</Button> }.to_html();

    assert!(extract_attr(&block, "class").contains("w-full"));
    assert!(!extract_attr(&inline, "class").contains("w-full"));
}

#[test]
fn button_icons_and_content_are_independently_omittable() {
    let icon_only = view! {
        <Button icon_left=Some(view! { <SearchIcon/> }.into_any())/>
    }
    .to_html();
    assert!(icon_only.contains("<svg"));

    let text_only = view! { <Button>"Go"</Button> }.to_html();
    assert!(text_only.contains("Go"));
    assert!(!text_only.contains("<svg"));
}

#[test]
fn button_caller_class_overrides_background() {
    let html = view! { <Button class="bg-red-500">"Go"</Button> }.to_html();
    let class = extract_attr(&html, "class");

    assert!(class.contains("bg-red-500"));
    assert!(!class.contains(" bg-primary "));
    assert!(!class.starts_with("bg-primary "));
    // State-variant tokens are untouched by the unprefixed override.
    assert!(class.contains("hover:bg-primary/80"));
}

#[test]
fn button_passthrough_attributes_reach_the_root() {
    let html = view! {
        <Button attrs=attrs(&[("id", "cta"), ("hx-post", "/api/submit")])>"Go"</Button>
    }
    .to_html();

    assert_eq!(extract_attr(&html, "id"), "cta");
    assert_eq!(extract_attr(&html, "hx-post"), "/api/submit");
}

// ─────────────────────────────────────────────────────────────────────────────
// Badge
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn badge_renders_every_variant_size_combination() {
    let variants = [
        BadgeVariant::Default,
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Error,
        BadgeVariant::Info,
    ];

    for variant in variants {
        for size in [BadgeSize::Md, BadgeSize::Sm] {
            let html = view! {
                <Badge variant=variant size=size>"S"</Badge>
            }
            .to_html();

            assert!(html.starts_with("<span"));
            assert!(html.contains(variant.classes()));
            assert!(html.contains(size.classes()));
            assert!(html.contains("rounded-full"));
        }
    }
}

#[test]
fn badge_dot_is_colored_and_sized_per_options() {
    let html = view! {
        <Badge variant=BadgeVariant::Success size=BadgeSize::Sm dot=true>"Active"</Badge>
    }
    .to_html();

    // Compact green badge with a small saturated-green leading dot.
    assert!(html.contains("bg-green-100 text-green-700"));
    assert!(html.contains("text-[11px]"));
    assert!(html.contains("bg-green-500"));
    assert!(html.contains("w-1 h-1"));
    assert!(html.contains("Active"));
}

#[test]
fn badge_without_dot_renders_no_indicator() {
    let html = view! { <Badge variant=BadgeVariant::Success>"Active"</Badge> }.to_html();
    assert!(!html.contains("bg-green-500"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn text_variants_map_to_their_default_tags() {
    let cases = [
        (TextVariant::Display, "<h1"),
        (TextVariant::Heading1, "<h1"),
        (TextVariant::Heading2, "<h2"),
        (TextVariant::Heading3, "<h3"),
        (TextVariant::Heading4, "<h4"),
        (TextVariant::BodyLg, "<p"),
        (TextVariant::BodyMd, "<p"),
        (TextVariant::BodySm, "<p"),
        (TextVariant::Label, "<span"),
        (TextVariant::Caption, "<span"),
        (TextVariant::Overline, "<span"),
    ];

    for (variant, tag) in cases {
        let html = view! { <Text variant=variant>"x"</Text> }.to_html();
        assert!(html.starts_with(tag), "{variant:?} rendered {html}");
        assert!(html.contains(variant.classes()), "{variant:?} tokens missing");
    }
}

#[test]
fn text_as_tag_overrides_element_but_keeps_preset() {
    let html = view! {
        <Text variant=TextVariant::Heading2 as_tag=TextTag::Span>"x"</Text>
    }
    .to_html();

    assert!(html.starts_with("<span"));
    assert!(html.contains(TextVariant::Heading2.classes()));
}

#[test]
fn text_passthrough_attributes_apply() {
    let html = view! {
        <Text attrs=attrs(&[("id", "intro"), ("aria-label", "Introduction")])>"x"</Text>
    }
    .to_html();

    assert_eq!(extract_attr(&html, "id"), "intro");
    assert_eq!(extract_attr(&html, "aria-label"), "Introduction");
}

// ─────────────────────────────────────────────────────────────────────────────
// Input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn input_renders_every_size() {
    for size in [InputSize::Lg, InputSize::Md, InputSize::Sm] {
        let html = view! { <Input size=size/> }.to_html();
        assert!(html.contains(size.classes()), "{size:?} tokens missing");
    }
}

#[test]
fn input_error_suppresses_hint() {
    let html = view! {
        <Input label="Email" hint="We never share it" error="Required"/>
    }
    .to_html();

    assert!(html.contains("Required"));
    assert!(!html.contains("We never share it"));
    assert!(html.contains("text-red-500"));
    assert!(html.contains("border-red-500"));
}

#[test]
fn input_empty_error_behaves_as_absent() {
    let html = view! {
        <Input label="Email" hint="We never share it" error=""/>
    }
    .to_html();

    assert!(html.contains("We never share it"));
    assert!(!html.contains("text-red-500"));
    assert!(html.contains("border-tertiary-border"));
}

#[test]
fn input_passthrough_attributes_reach_the_field() {
    let html = view! {
        <Input disabled=true attrs=attrs(&[("autocomplete", "email"), ("hx-trigger", "changed")])/>
    }
    .to_html();

    // Both the built-in disabled attribute and the extra ones land on the
    // same <input> element.
    assert!(has_disabled_attr(&html));
    assert_eq!(extract_attr(&html, "autocomplete"), "email");
    assert_eq!(extract_attr(&html, "hx-trigger"), "changed");
}

#[test]
fn input_explicit_id_links_label_to_field() {
    let html = view! { <Input label="Email" id="email-field"/> }.to_html();

    assert_eq!(extract_attr(&html, "for"), "email-field");
    assert_eq!(extract_attr(&html, "id"), "email-field");
}

#[test]
fn input_auto_ids_match_within_an_instance_and_differ_between_instances() {
    let first = view! { <Input label="Email"/> }.to_html();
    let second = view! { <Input label="Email"/> }.to_html();

    assert_eq!(extract_attr(&first, "for"), extract_attr(&first, "id"));
    assert_eq!(extract_attr(&second, "for"), extract_attr(&second, "id"));
    assert_ne!(extract_attr(&first, "id"), extract_attr(&second, "id"));
}

#[test]
fn input_icon_overlays_inset_field_padding() {
    let with_left = view! {
        <Input icon_left=Some(view! { <SearchIcon/> }.into_any())/>
    }
    .to_html();
    assert!(with_left.contains("pl-10"));
    assert!(!with_left.contains("pr-10"));
    assert!(with_left.contains("pointer-events-none"));

    let bare = view! { <Input/> }.to_html();
    assert!(!bare.contains("pl-10"));
    assert!(!bare.contains("pr-10"));
}

#[test]
fn input_disabled_styles_label_and_field() {
    let html = view! { <Input label="Email" disabled=true/> }.to_html();

    assert!(has_disabled_attr(&html));
    assert!(html.contains("cursor-not-allowed"));
    // Label swaps to the disabled color.
    let label_start = html.find("<label").unwrap();
    let label_end = html[label_start..].find('>').unwrap() + label_start;
    assert!(html[label_start..label_end].contains("text-disabled"));
}

// ─────────────────────────────────────────────────────────────────────────────
// LinkWeb
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn link_alternative_option_only_affects_primary() {
    let primary_default = view! {
        <LinkWeb variant=LinkVariant::Primary option=LinkOption::Default>"x"</LinkWeb>
    }
    .to_html();
    let primary_alt = view! {
        <LinkWeb variant=LinkVariant::Primary option=LinkOption::Alternative>"x"</LinkWeb>
    }
    .to_html();
    assert_ne!(primary_default, primary_alt);
    assert!(primary_alt.contains("text-link-primary-alt"));

    for variant in [LinkVariant::Secondary, LinkVariant::Tertiary] {
        let default = view! {
            <LinkWeb variant=variant option=LinkOption::Default>"x"</LinkWeb>
        }
        .to_html();
        let alternative = view! {
            <LinkWeb variant=variant option=LinkOption::Alternative>"x"</LinkWeb>
        }
        .to_html();
        assert_eq!(default, alternative, "{variant:?} must ignore option");
    }
}

#[test]
fn link_underline_appears_only_for_primary_default_md() {
    for variant in [
        LinkVariant::Primary,
        LinkVariant::Secondary,
        LinkVariant::Tertiary,
    ] {
        for option in [LinkOption::Default, LinkOption::Alternative] {
            for size in [LinkSize::Lg, LinkSize::Md] {
                let html = view! {
                    <LinkWeb variant=variant option=option size=size>"x"</LinkWeb>
                }
                .to_html();
                let expected = variant == LinkVariant::Primary
                    && option == LinkOption::Default
                    && size == LinkSize::Md;
                assert_eq!(
                    extract_attr(&html, "class").split_whitespace().any(|t| t == "underline"),
                    expected,
                    "{variant:?}/{option:?}/{size:?}"
                );
            }
        }
    }
}

#[test]
fn link_disabled_is_aria_only_and_keeps_href() {
    let html = view! {
        <LinkWeb href="/pricing" disabled=true>"Pricing"</LinkWeb>
    }
    .to_html();

    assert_eq!(extract_attr(&html, "aria-disabled"), "true");
    assert_eq!(extract_attr(&html, "href"), "/pricing");
    // Never the native disabled attribute: anchors stay navigable.
    assert!(!has_disabled_attr(&html));

    let enabled = view! { <LinkWeb href="/pricing">"Pricing"</LinkWeb> }.to_html();
    assert!(!enabled.contains("aria-disabled=\""));
}

#[test]
fn link_sizes_differ_in_vertical_padding_only() {
    let lg = view! { <LinkWeb size=LinkSize::Lg>"x"</LinkWeb> }.to_html();
    let md = view! { <LinkWeb size=LinkSize::Md>"x"</LinkWeb> }.to_html();

    assert!(extract_attr(&lg, "class").contains("py-[9px]"));
    assert!(extract_attr(&md, "class").contains("py-[8px]"));
}
