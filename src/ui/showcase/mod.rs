//! Component showcase page.
//!
//! A single server-rendered page with one section per widget, driven by the
//! declarative catalogs in [`catalog`]. A sidebar nav links to each section;
//! the active link is tracked client-side by `static/showcase.js`.

pub mod catalog;

use leptos::prelude::*;

use crate::ui::components::{
    ArrowRightIcon, Badge, Button, Input, LinkWeb, MailIcon, SearchIcon, Text, TextVariant, attrs,
};

/// Section anchors, in page order. Shared with the scroll-spy nav.
pub const SECTIONS: &[(&str, &str)] = &[
    ("text", "Text"),
    ("badge", "Badge"),
    ("button", "Button"),
    ("input", "Input"),
    ("link-web", "LinkWeb"),
];

/// The showcase page: sidebar nav plus one gallery section per widget.
#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <div class="flex gap-10 items-start">
            <SideNav/>
            <div class="flex flex-col gap-16 flex-1 min-w-0">
                <TextSection/>
                <BadgeSection/>
                <ButtonSection/>
                <InputSection/>
                <LinkWebSection/>
            </div>
        </div>
    }
}

/// Anchor nav for the section list; `data-section` hooks the scroll-spy.
#[component]
fn SideNav() -> impl IntoView {
    view! {
        <nav id="section-nav" class="sticky top-20 self-start flex flex-col gap-1 w-44 shrink-0">
            {SECTIONS
                .iter()
                .map(|&(id, title)| {
                    view! {
                        <a
                            href=format!("#{id}")
                            data-section=id
                            class="px-3 py-2 rounded-lg text-sm text-gray-700 hover:bg-gray-100 transition-colors"
                        >
                            {title}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// One anchored gallery section.
#[component]
fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class="scroll-mt-20 flex flex-col gap-6">
            <Text variant=TextVariant::Heading2>{title}</Text>
            {children()}
        </section>
    }
}

/// A single example with its caption.
#[component]
fn Example(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <figure class="flex flex-col items-start gap-2">
            {children()}
            <figcaption class="text-xs text-gray-500">{label}</figcaption>
        </figure>
    }
}

#[component]
fn TextSection() -> impl IntoView {
    view! {
        <Section id="text" title="Text">
            <div class="flex flex-col gap-4">
                {catalog::text_examples()
                    .into_iter()
                    .map(|ex| {
                        view! {
                            <Example label=ex.label>
                                <Text variant=ex.variant>{ex.text}</Text>
                            </Example>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn BadgeSection() -> impl IntoView {
    view! {
        <Section id="badge" title="Badge">
            <div class="flex flex-wrap items-center gap-4">
                {catalog::badge_examples()
                    .into_iter()
                    .map(|ex| {
                        view! {
                            <Example label=ex.label>
                                <Badge variant=ex.variant size=ex.size dot=ex.dot>
                                    {ex.text}
                                </Badge>
                            </Example>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ButtonSection() -> impl IntoView {
    view! {
        <Section id="button" title="Button">
            <div class="flex flex-wrap items-end gap-4">
                {catalog::button_examples()
                    .into_iter()
                    .map(|ex| {
                        view! {
                            <Example label=ex.label>
                                <Button
                                    variant=ex.variant
                                    size=ex.size
                                    block=ex.block
                                    loading=ex.loading
                                    disabled=ex.disabled
                                    icon_left=ex.with_icons.then(|| view! { <MailIcon/> }.into_any())
                                    icon_right=ex.with_icons.then(|| view! { <ArrowRightIcon/> }.into_any())
                                    attrs=attrs(&[("data-example", ex.label)])
                                >
                                    {ex.text}
                                </Button>
                            </Example>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn InputSection() -> impl IntoView {
    view! {
        <Section id="input" title="Input">
            <div class="flex flex-wrap items-end gap-6">
                {catalog::input_examples()
                    .into_iter()
                    .map(|ex| {
                        view! {
                            <Example label=ex.label>
                                <Input
                                    size=ex.size
                                    label=ex.field_label
                                    hint=ex.hint
                                    error=ex.error
                                    placeholder=ex.placeholder
                                    disabled=ex.disabled
                                    block=ex.block
                                    icon_left=ex.with_icon_left.then(|| view! { <SearchIcon/> }.into_any())
                                    icon_right=ex.with_icon_right.then(|| view! { <MailIcon/> }.into_any())
                                />
                            </Example>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn LinkWebSection() -> impl IntoView {
    view! {
        <Section id="link-web" title="LinkWeb">
            <div class="flex flex-wrap items-center gap-4">
                {catalog::link_examples()
                    .into_iter()
                    .map(|ex| {
                        let backdrop = if ex.dark_backdrop {
                            "bg-gray-900 px-3 rounded-lg"
                        } else {
                            ""
                        };
                        view! {
                            <Example label=ex.label>
                                <div class=backdrop>
                                    <LinkWeb
                                        variant=ex.variant
                                        option=ex.option
                                        size=ex.size
                                        disabled=ex.disabled
                                        href="#link-web"
                                        icon_left=ex.with_icons.then(|| view! { <MailIcon/> }.into_any())
                                        icon_right=ex.with_icons.then(|| view! { <ArrowRightIcon/> }.into_any())
                                    >
                                        {ex.text}
                                    </LinkWeb>
                                </div>
                            </Example>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
