//! Plinng design-system widgets.
//!
//! Stateless presentation components rendered via Leptos SSR. Each widget is
//! a pure function from (options, children, passthrough attributes) to a
//! rendered node; no widget depends on another at runtime.
//!
//! # Components
//!
//! - [`Button`]: clickable action trigger with loading state
//! - [`Badge`]: compact status label with optional indicator dot
//! - [`Text`]: typographic variants with overridable output tag
//! - [`Input`]: labeled text field with hint/error line
//! - [`LinkWeb`]: navigable text link
//! - [`icons`]: inline SVG icon components

mod attrs;
mod badge;
mod button;
mod icons;
mod input;
mod link_web;
mod text;

pub use attrs::{Attrs, attrs};
pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::*;
pub use input::{Input, InputSize};
pub use link_web::{LinkOption, LinkSize, LinkVariant, LinkWeb};
pub use text::{Text, TextTag, TextVariant};
