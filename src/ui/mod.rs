//! UI modules.
//!
//! # Structure
//!
//! - [`components`]: the Plinng design-system widgets
//! - [`showcase`]: the demonstration page and usage catalogs
//! - [`style`]: utility-class composition shared by all widgets

pub mod components;
pub mod showcase;
pub mod style;
