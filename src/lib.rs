//! Plinng UI
//!
//! The Plinng design system as a small library of stateless presentation
//! widgets, rendered via Leptos SSR and served as a live showcase by an
//! Axum server.
//!
//! # Architecture
//!
//! - **Widgets**: pure `#[component]` functions mapping enumerated options
//!   to utility-class token sets and semantic output elements
//! - **Style composition**: a merge utility resolving conflicting utility
//!   tokens so callers can override any visual property
//! - **Showcase**: a server-rendered page displaying every widget's
//!   variant/size/state catalog
//!
//! # Modules
//!
//! - [`config`]: layered application configuration
//! - [`server`]: Axum router and SSR page handlers
//! - [`ui`]: widgets, style composer, and showcase page

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod server;
pub mod ui;
