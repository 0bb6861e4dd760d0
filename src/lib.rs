//! # tokenstyle - Inheritable syntax-highlighting styles
//!
//! `tokenstyle` resolves the visual style (colour, weight, slant, underline,
//! border) for every category of token a lexer produces. Styles are written
//! as compact Pygments-style descriptors, can extend a parent style, and fall
//! back through the token hierarchy when a sub-type has no rule of its own.
//!
//! ## Core Concepts
//!
//! - [`StyleEntry`]: Colours and attributes for one token category
//! - [`Style`]: An immutable map from [`TokenType`] to entries, optionally
//!   extending a parent style
//! - [`StyleBuilder`]: Stages raw descriptors and freezes them into a `Style`
//! - [`Trilean`]: Attribute flags that distinguish "unset" from "off"
//!
//! ## Resolution
//!
//! [`Style::get`] returns the entry to render a token with. The exact entry
//! is searched along the parent chain, then unspecified fields are filled,
//! nearest first, from the token's sub-category, its category,
//! [`TokenType::Text`] and finally [`TokenType::Background`]. An entry marked
//! `noinherit` stops that filling.
//!
//! ## Quick Start
//!
//! ```rust
//! use tokenstyle::{Colour, StyleBuilder, TokenType, Trilean};
//!
//! let base = StyleBuilder::new("base", "dark")
//!     .add(TokenType::Background, "bg:#1e1e1e #d4d4d4")
//!     .add(TokenType::Comment, "italic #6a9955")
//!     .add(TokenType::Keyword, "bold #569cd6")
//!     .build()
//!     .unwrap();
//!
//! let comment = base.get(TokenType::CommentSingle);
//! assert_eq!(comment.italic, Trilean::Yes);
//! assert_eq!(comment.background, Colour::new(0x1e, 0x1e, 0x1e));
//!
//! // A derived style only states what changes.
//! let variant = base
//!     .builder()
//!     .name("base-flat")
//!     .add(TokenType::Keyword, "nobold")
//!     .build()
//!     .unwrap();
//! assert_eq!(variant.get(TokenType::Keyword).bold, Trilean::No);
//! ```
//!
//! ## Persistence
//!
//! Parent-less styles encode to a small XML format with [`Style::to_xml`]
//! and decode with [`Style::from_xml`]; derived styles are
//! [flattened](Style::flatten) first. Styles can also be authored as YAML
//! [`StyleSheet`]s.

pub mod colour;
pub mod style;
pub mod stylesheet;
mod term;
pub mod theme;
pub mod token;
mod xml;

pub use colour::Colour;
pub use style::{
    parse_style_entry, BuildError, DecodeError, EncodeError, ParseError, StyleEntry,
    StyleSheetError, Trilean,
};
pub use stylesheet::StyleSheet;
pub use theme::{
    reset_theme_detector, set_theme_detector, AdaptiveStyle, ColorMode, ColorModeDetector, Style,
    StyleBuilder, StyleEntries,
};
pub use token::TokenType;
