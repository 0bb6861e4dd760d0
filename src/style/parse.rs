//! Parser for the compact style descriptor grammar.
//!
//! A descriptor is a whitespace-separated list of tokens applied left to
//! right, so later tokens win:
//!
//! | Token | Effect |
//! |-------|--------|
//! | `bold` / `nobold` | bold on / off |
//! | `italic` / `noitalic` | italic on / off |
//! | `underline` / `nounderline` | underline on / off |
//! | `inherit` / `noinherit` | clear / set the inheritance stop |
//! | `#rrggbb` | foreground colour |
//! | `bg:#rrggbb` | background colour |
//! | `bg:` | reset the background |
//! | `border:#rrggbb` | border colour |
//!
//! The grammar follows Pygments style rules.

use std::str::FromStr;

use super::entry::StyleEntry;
use super::error::ParseError;
use super::trilean::Trilean;
use crate::colour::Colour;

/// Parses a descriptor such as `"bold italic #ff0000 bg:#202020"`.
///
/// An empty descriptor yields the zero entry.
///
/// # Errors
///
/// Fails on the first unknown token or malformed colour literal, naming it.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{parse_style_entry, Trilean};
///
/// let entry = parse_style_entry("bold nobold").unwrap();
/// assert_eq!(entry.bold, Trilean::No);
/// assert!(parse_style_entry("blink").is_err());
/// ```
pub fn parse_style_entry(text: &str) -> Result<StyleEntry, ParseError> {
    let mut out = StyleEntry::default();
    for part in text.split_whitespace() {
        match part {
            "bold" => out.bold = Trilean::Yes,
            "nobold" => out.bold = Trilean::No,
            "italic" => out.italic = Trilean::Yes,
            "noitalic" => out.italic = Trilean::No,
            "underline" => out.underline = Trilean::Yes,
            "nounderline" => out.underline = Trilean::No,
            "inherit" => out.no_inherit = false,
            "noinherit" => out.no_inherit = true,
            "bg:" => out.background = Colour::UNSET,
            _ => {
                if let Some(value) = part.strip_prefix("bg:") {
                    if !value.starts_with('#') {
                        return Err(ParseError::UnknownElement(part.to_string()));
                    }
                    out.background = parse_literal(value, part, ParseError::InvalidBackground)?;
                } else if let Some(value) = part.strip_prefix("border:") {
                    if !value.starts_with('#') {
                        return Err(ParseError::UnknownElement(part.to_string()));
                    }
                    out.border = parse_literal(value, part, ParseError::InvalidBorder)?;
                } else if part.starts_with('#') {
                    out.colour = parse_literal(part, part, ParseError::InvalidColour)?;
                } else {
                    return Err(ParseError::UnknownElement(part.to_string()));
                }
            }
        }
    }
    Ok(out)
}

fn parse_literal(
    value: &str,
    part: &str,
    err: fn(String) -> ParseError,
) -> Result<Colour, ParseError> {
    Colour::parse(value).ok_or_else(|| err(part.to_string()))
}

impl FromStr for StyleEntry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_style_entry(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(hex: &str) -> Colour {
        Colour::parse(hex).unwrap()
    }

    #[test]
    fn test_parse_all_elements() {
        let entry =
            parse_style_entry("bold noitalic underline noinherit #010203 bg:#040506 border:#070809")
                .unwrap();
        assert_eq!(entry.bold, Trilean::Yes);
        assert_eq!(entry.italic, Trilean::No);
        assert_eq!(entry.underline, Trilean::Yes);
        assert!(entry.no_inherit);
        assert_eq!(entry.colour, rgb("#010203"));
        assert_eq!(entry.background, rgb("#040506"));
        assert_eq!(entry.border, rgb("#070809"));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert!(parse_style_entry("").unwrap().is_zero());
        assert!(parse_style_entry("  \t\n ").unwrap().is_zero());
    }

    #[test]
    fn test_later_tokens_win() {
        assert_eq!(parse_style_entry("bold nobold").unwrap().bold, Trilean::No);
        assert_eq!(parse_style_entry("nobold bold").unwrap().bold, Trilean::Yes);
        assert_eq!(
            parse_style_entry("#ff0000 #00ff00").unwrap().colour,
            rgb("#00ff00")
        );
    }

    #[test]
    fn test_inherit_resets_noinherit() {
        assert!(!parse_style_entry("noinherit inherit").unwrap().no_inherit);
        assert!(!parse_style_entry("inherit").unwrap().no_inherit);
        assert!(parse_style_entry("inherit noinherit").unwrap().no_inherit);
    }

    #[test]
    fn test_bg_reset_clears_earlier_background() {
        let entry = parse_style_entry("bg:#ffffff bg:").unwrap();
        assert_eq!(entry.background, Colour::UNSET);
    }

    // Known equivalence: an explicit `bg:` reset and never mentioning a
    // background produce the same entry.
    #[test]
    fn test_bg_reset_is_indistinguishable_from_absent() {
        assert_eq!(
            parse_style_entry("bold bg:").unwrap(),
            parse_style_entry("bold").unwrap()
        );
    }

    #[test]
    fn test_short_hex_colours() {
        let entry = parse_style_entry("#fff bg:#000").unwrap();
        assert_eq!(entry.colour, rgb("#ffffff"));
        assert_eq!(entry.background, rgb("#000000"));
    }

    #[test]
    fn test_unknown_element() {
        assert_eq!(
            parse_style_entry("bold blink"),
            Err(ParseError::UnknownElement("blink".to_string()))
        );
        assert_eq!(
            parse_style_entry("ff0000"),
            Err(ParseError::UnknownElement("ff0000".to_string()))
        );
    }

    #[test]
    fn test_invalid_colours_are_tagged() {
        assert_eq!(
            parse_style_entry("#xyz"),
            Err(ParseError::InvalidColour("#xyz".to_string()))
        );
        assert_eq!(
            parse_style_entry("bg:#12"),
            Err(ParseError::InvalidBackground("bg:#12".to_string()))
        );
        assert_eq!(
            parse_style_entry("border:#red"),
            Err(ParseError::InvalidBorder("border:#red".to_string()))
        );
    }

    #[test]
    fn test_prefixed_tokens_without_hash_are_unknown() {
        for token in ["bg:red", "bg:ff0000", "border:", "border:red"] {
            assert_eq!(
                parse_style_entry(token),
                Err(ParseError::UnknownElement(token.to_string())),
                "{}",
                token
            );
        }
        assert_eq!(
            parse_style_entry("bold bg:red #ffffff"),
            Err(ParseError::UnknownElement("bg:red".to_string()))
        );
    }

    #[test]
    fn test_from_str() {
        let entry: StyleEntry = "italic".parse().unwrap();
        assert_eq!(entry.italic, Trilean::Yes);
        assert!("nope".parse::<StyleEntry>().is_err());
    }
}
