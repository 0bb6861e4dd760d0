//! Mutable staging for styles.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use super::style::Style;
use crate::style::{parse_style_entry, BuildError, StyleEntry};
use crate::token::TokenType;

/// Raw descriptors keyed by token type, as authored.
///
/// Descriptors are validated only when the style is built.
pub type StyleEntries = BTreeMap<TokenType, String>;

/// Stages descriptors and freezes them into an immutable [`Style`].
///
/// Methods take the builder by value and return it for chaining. Building
/// does not consume the builder, so it can keep staging edits afterwards
/// without affecting styles already built.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{StyleBuilder, TokenType, Trilean};
///
/// let style = StyleBuilder::new("mono", "light")
///     .add(TokenType::Text, "#000000")
///     .add(TokenType::Keyword, "bold")
///     .build()
///     .unwrap();
///
/// assert_eq!(style.get(TokenType::KeywordConstant).bold, Trilean::Yes);
/// ```
#[derive(Debug, Clone)]
pub struct StyleBuilder {
    name: String,
    theme: String,
    entries: HashMap<TokenType, String>,
    parent: Option<Arc<Style>>,
}

impl StyleBuilder {
    /// Creates an empty builder for a parent-less style.
    pub fn new(name: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            theme: theme.into(),
            entries: HashMap::new(),
            parent: None,
        }
    }

    pub(crate) fn with_parent(parent: Arc<Style>) -> Self {
        Self {
            name: parent.name.clone(),
            theme: parent.theme.clone(),
            entries: HashMap::new(),
            parent: Some(parent),
        }
    }

    /// Renames the style being built.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Changes the theme identifier of the style being built.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Stages every descriptor in `entries`, replacing existing ones.
    pub fn add_all(mut self, entries: StyleEntries) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Stages a descriptor for `token`, e.g. `"bold #ff0000"`.
    pub fn add(mut self, token: TokenType, descriptor: impl Into<String>) -> Self {
        self.entries.insert(token, descriptor.into());
        self
    }

    /// Stages a structured entry for `token`.
    pub fn add_entry(self, token: TokenType, entry: StyleEntry) -> Self {
        self.add(token, entry.to_string())
    }

    /// Previews the entry for `token` as staged so far.
    ///
    /// An unparseable descriptor previews as the zero entry; validation
    /// happens in [`build`](StyleBuilder::build). With a parent, the staged
    /// entry is merged over the parent's fully resolved entry.
    pub fn get(&self, token: TokenType) -> StyleEntry {
        let entry = self
            .entries
            .get(&token)
            .and_then(|descriptor| parse_style_entry(descriptor).ok())
            .unwrap_or_default();
        match &self.parent {
            Some(parent) => entry.inherit(&[parent.get(token)]),
            None => entry,
        }
    }

    /// Rewrites every known entry through `transform`.
    ///
    /// Known entries are those staged here plus every type styled by the
    /// parent chain. Each is previewed with [`get`](StyleBuilder::get),
    /// passed to `transform` and staged back, e.g. to clamp a whole palette's
    /// brightness with [`Colour::clamp_brightness`](crate::Colour::clamp_brightness).
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(StyleEntry) -> StyleEntry,
    {
        let mut types: BTreeSet<TokenType> = self.entries.keys().copied().collect();
        if let Some(parent) = &self.parent {
            types.extend(parent.types());
        }
        for token in types {
            let entry = transform(self.get(token));
            self.entries.insert(token, entry.to_string());
        }
        self
    }

    /// Validates the staged descriptors and freezes them into a [`Style`].
    ///
    /// Only descriptors staged on this builder are parsed; inherited entries
    /// were validated when the parent was built.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid descriptor, in token order, naming its
    /// category. No style is produced.
    pub fn build(&self) -> Result<Arc<Style>, BuildError> {
        let mut staged: Vec<_> = self.entries.iter().collect();
        staged.sort_by_key(|(token, _)| **token);

        let mut entries = HashMap::with_capacity(staged.len());
        for (token, descriptor) in staged {
            let entry = parse_style_entry(descriptor).map_err(|source| BuildError {
                token: *token,
                source,
            })?;
            entries.insert(*token, entry);
        }

        tracing::debug!(
            style = %self.name,
            theme = %self.theme,
            entries = entries.len(),
            derived = self.parent.is_some(),
            "built style"
        );
        Ok(Arc::new(Style {
            name: self.name.clone(),
            theme: self.theme.clone(),
            entries,
            parent: self.parent.clone(),
        }))
    }
}
