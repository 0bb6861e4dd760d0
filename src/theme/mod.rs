//! Styles: token-keyed collections of entries with inheritance.
//!
//! This module provides:
//!
//! - [`Style`]: An immutable, optionally parent-linked style with layered lookup
//! - [`StyleBuilder`]: Mutable staging that validates and freezes into a `Style`
//! - [`AdaptiveStyle`]: Light/dark style pairs with OS detection
//! - [`ColorMode`]: Light or dark color mode enum
//!
//! A derived style is started from an existing one with [`Style::builder`]
//! and only needs to stage the entries it overrides.

mod adaptive;
mod builder;
mod style;

pub use adaptive::{
    reset_theme_detector, set_theme_detector, AdaptiveStyle, ColorMode, ColorModeDetector,
};
pub use builder::{StyleBuilder, StyleEntries};
pub use style::Style;
