//! The per-category style value.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::trilean::Trilean;
use crate::colour::Colour;

/// The visual attributes for one token category.
///
/// Every field has an "unspecified" state (unset colour, [`Trilean::Pass`]),
/// which is what lets [`inherit`](StyleEntry::inherit) fill gaps from
/// ancestors without overriding explicit choices.
///
/// An entry formats to, and parses from, the compact descriptor grammar:
///
/// ```rust
/// use tokenstyle::{Colour, StyleEntry, Trilean};
///
/// let entry: StyleEntry = "bold #ff0000 bg:#000000".parse().unwrap();
/// assert_eq!(entry.bold, Trilean::Yes);
/// assert_eq!(entry.colour, Colour::new(0xff, 0, 0));
/// assert_eq!(entry.to_string(), "bold #ff0000 bg:#000000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleEntry {
    /// Foreground colour.
    pub colour: Colour,
    /// Background colour.
    pub background: Colour,
    /// Border colour.
    pub border: Colour,
    /// Bold weight.
    pub bold: Trilean,
    /// Italic slant.
    pub italic: Trilean,
    /// Underline.
    pub underline: Trilean,
    /// Stops inheritance from ancestors at this entry.
    pub no_inherit: bool,
}

impl StyleEntry {
    /// Returns true if the entry carries no information at all.
    ///
    /// A zero entry is transparent to inheritance and lookup.
    pub fn is_zero(&self) -> bool {
        *self == StyleEntry::default()
    }

    /// Keeps only the fields of `self` that differ from `other`.
    ///
    /// Fields equal in both become unset or `Pass`. The inheritance stop is
    /// not part of the delta.
    pub fn sub(&self, other: &StyleEntry) -> StyleEntry {
        let mut out = StyleEntry::default();
        if self.colour != other.colour {
            out.colour = self.colour;
        }
        if self.background != other.background {
            out.background = self.background;
        }
        if self.border != other.border {
            out.border = self.border;
        }
        if self.bold != other.bold {
            out.bold = self.bold;
        }
        if self.italic != other.italic {
            out.italic = self.italic;
        }
        if self.underline != other.underline {
            out.underline = self.underline;
        }
        out
    }

    /// Fills unspecified fields from `ancestors`, given oldest first.
    ///
    /// Ancestors are consulted nearest first, so the last element has the
    /// highest priority. Fields already set are never overwritten. Resolution
    /// stops as soon as the value being resolved has `no_inherit` set, and
    /// `no_inherit` is never copied from an ancestor.
    pub fn inherit(&self, ancestors: &[StyleEntry]) -> StyleEntry {
        let mut out = *self;
        for ancestor in ancestors.iter().rev() {
            if out.no_inherit {
                return out;
            }
            if !out.colour.is_set() {
                out.colour = ancestor.colour;
            }
            if !out.background.is_set() {
                out.background = ancestor.background;
            }
            if !out.border.is_set() {
                out.border = ancestor.border;
            }
            if out.bold.is_pass() {
                out.bold = ancestor.bold;
            }
            if out.italic.is_pass() {
                out.italic = ancestor.italic;
            }
            if out.underline.is_pass() {
                out.underline = ancestor.underline;
            }
        }
        out
    }
}

impl std::fmt::Display for StyleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out: Vec<String> = Vec::new();
        for (value, base) in [
            (self.bold, "bold"),
            (self.italic, "italic"),
            (self.underline, "underline"),
        ] {
            if !value.is_pass() {
                out.push(value.prefix(base));
            }
        }
        if self.no_inherit {
            out.push("noinherit".to_string());
        }
        if self.colour.is_set() {
            out.push(self.colour.to_string());
        }
        if self.background.is_set() {
            out.push(format!("bg:{}", self.background));
        }
        if self.border.is_set() {
            out.push(format!("border:{}", self.border));
        }
        f.write_str(&out.join(" "))
    }
}

impl Serialize for StyleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StyleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
