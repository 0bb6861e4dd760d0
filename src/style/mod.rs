//! Style entries: the per-category style value and its descriptor grammar.
//!
//! This module provides the core styling primitives:
//!
//! - [`Trilean`]: A boolean attribute that may be left unspecified
//! - [`StyleEntry`]: Colours and attributes for one token category
//! - [`parse_style_entry`]: Parser for descriptors like `"bold #ff0000"`
//! - The error types raised across the crate
//!
//! Entries are merged by [`StyleEntry::inherit`], which fills unspecified
//! fields from a list of ancestors without overriding explicit choices.

mod entry;
mod error;
mod parse;
mod trilean;

pub use entry::StyleEntry;
pub use error::{BuildError, DecodeError, EncodeError, ParseError, StyleSheetError};
pub use parse::parse_style_entry;
pub use trilean::Trilean;
