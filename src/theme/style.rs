//! Immutable styles and layered resolution.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::builder::{StyleBuilder, StyleEntries};
use crate::style::{BuildError, StyleEntry};
use crate::token::TokenType;

/// A built, immutable mapping from token category to [`StyleEntry`].
///
/// A style may extend exactly one parent. Lookups consult the style's own
/// entries first, then walk the parent chain, and finally fall back through
/// the token hierarchy (see [`get`](Style::get)).
///
/// Styles are only handed out behind an [`Arc`], created by
/// [`StyleBuilder::build`] or by decoding. A derived style can therefore only
/// point at an already-built style, which keeps the chain acyclic.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{Colour, Style, StyleBuilder, TokenType, Trilean};
///
/// let base = StyleBuilder::new("base", "dark")
///     .add(TokenType::Text, "#cccccc")
///     .add(TokenType::Keyword, "bold #ff79c6")
///     .build()
///     .unwrap();
///
/// let derived = base
///     .builder()
///     .add(TokenType::Keyword, "#50fa7b")
///     .build()
///     .unwrap();
///
/// let keyword = derived.get(TokenType::KeywordType);
/// assert_eq!(keyword.colour, Colour::new(0x50, 0xfa, 0x7b));
/// assert_eq!(derived.get(TokenType::CommentSingle).colour, Colour::new(0xcc, 0xcc, 0xcc));
/// ```
#[derive(Debug)]
pub struct Style {
    pub(crate) name: String,
    pub(crate) theme: String,
    pub(crate) entries: HashMap<TokenType, StyleEntry>,
    pub(crate) parent: Option<Arc<Style>>,
}

impl Style {
    /// Builds a parent-less style from raw descriptors.
    ///
    /// # Errors
    ///
    /// Fails if any descriptor is invalid; no style is produced.
    pub fn new(
        name: impl Into<String>,
        theme: impl Into<String>,
        entries: StyleEntries,
    ) -> Result<Arc<Style>, BuildError> {
        StyleBuilder::new(name, theme).add_all(entries).build()
    }

    /// The style's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme identifier, conventionally `"light"` or `"dark"`.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The style this one extends, if any.
    pub fn parent(&self) -> Option<&Arc<Style>> {
        self.parent.as_ref()
    }

    /// Returns the fully resolved entry for `token`.
    ///
    /// The exact entry (searched along the parent chain) is merged with the
    /// fallbacks in this priority order, nearest first:
    ///
    /// 1. the token's sub-category
    /// 2. the token's category
    /// 3. [`TokenType::Text`]
    /// 4. [`TokenType::Background`]
    pub fn get(&self, token: TokenType) -> StyleEntry {
        self.lookup(token).inherit(&[
            self.lookup(TokenType::Background),
            self.lookup(TokenType::Text),
            self.lookup(token.category()),
            self.lookup(token.sub_category()),
        ])
    }

    /// Returns true if `token` has an explicit entry somewhere in the chain,
    /// or can be synthesised.
    pub fn has(&self, token: TokenType) -> bool {
        !self.lookup(token).is_zero() || is_synthesisable(token)
    }

    /// Every token type with an explicit entry in this style or an ancestor.
    pub fn types(&self) -> BTreeSet<TokenType> {
        let mut out: BTreeSet<TokenType> = self.entries.keys().copied().collect();
        if let Some(parent) = &self.parent {
            out.extend(parent.types());
        }
        out
    }

    /// Starts a derived style that overrides this one.
    ///
    /// The builder inherits the name and theme, stages no entries of its own
    /// and links back to this style. Nothing is copied.
    pub fn builder(self: &Arc<Self>) -> StyleBuilder {
        StyleBuilder::with_parent(Arc::clone(self))
    }

    /// Collapses the parent chain into a single parent-less style.
    ///
    /// Each category in [`types`](Style::types) gets the entry visible from
    /// this style, so [`get`](Style::get) resolves identically for them.
    /// Synthesised entries are derived afresh from the flattened background.
    pub fn flatten(&self) -> Arc<Style> {
        let entries = self
            .types()
            .into_iter()
            .map(|t| (t, self.lookup(t)))
            .filter(|(_, entry)| !entry.is_zero())
            .collect();
        Arc::new(Style {
            name: self.name.clone(),
            theme: self.theme.clone(),
            entries,
            parent: None,
        })
    }

    /// Own entries in token order.
    pub(crate) fn sorted_entries(&self) -> Vec<(TokenType, StyleEntry)> {
        let mut out: Vec<_> = self.entries.iter().map(|(t, e)| (*t, *e)).collect();
        out.sort_by_key(|(t, _)| *t);
        out
    }

    /// The exact entry for `token`, without category fallback.
    fn lookup(&self, token: TokenType) -> StyleEntry {
        let own = self.entries.get(&token).copied().unwrap_or_default();
        if !own.is_zero() {
            return own;
        }
        if let Some(parent) = &self.parent {
            return parent.lookup(token);
        }
        if is_synthesisable(token) {
            return self.synthesise(token);
        }
        own
    }

    fn synthesise(&self, token: TokenType) -> StyleEntry {
        let bg = self.lookup(TokenType::Background);
        let out = match token {
            TokenType::LineHighlight => StyleEntry {
                background: bg.background.brighten_or_darken(0.1),
                ..Default::default()
            },
            // Derived from the background entry's foreground slot.
            TokenType::LineNumbers | TokenType::LineNumbersTable => StyleEntry {
                colour: bg.colour.brighten_or_darken(0.5),
                ..Default::default()
            },
            _ => StyleEntry::default(),
        };
        tracing::trace!(style = %self.name, %token, entry = %out, "synthesised style entry");
        out
    }
}

fn is_synthesisable(token: TokenType) -> bool {
    matches!(
        token,
        TokenType::LineHighlight | TokenType::LineNumbers | TokenType::LineNumbersTable
    )
}
