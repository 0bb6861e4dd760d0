//! YAML stylesheets for authoring styles.
//!
//! A stylesheet names the style, its theme identifier and the raw
//! descriptors per token type:
//!
//! ```yaml
//! name: monokai
//! theme: dark
//! entries:
//!   Background: "bg:#272822 #f8f8f2"
//!   Keyword: "bold #66d9ef"
//!   CommentSingle: "italic #75715e"
//! ```
//!
//! Token names are validated while loading; descriptors are validated when
//! the style is built, exactly as with [`StyleBuilder`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::style::StyleSheetError;
use crate::theme::{Style, StyleBuilder, StyleEntries};

/// An authored style definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSheet {
    /// The style's name.
    pub name: String,
    /// The theme identifier, conventionally `"light"` or `"dark"`.
    pub theme: String,
    /// Raw descriptors keyed by token type name.
    #[serde(default)]
    pub entries: StyleEntries,
}

impl StyleSheet {
    /// Parses a stylesheet from YAML.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML, missing `name` or `theme`, unknown keys, or
    /// unknown token type names.
    pub fn from_yaml(yaml: &str) -> Result<StyleSheet, StyleSheetError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Renders this stylesheet as YAML.
    pub fn to_yaml(&self) -> Result<String, StyleSheetError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Stages this stylesheet on a fresh, parent-less builder.
    pub fn into_builder(self) -> StyleBuilder {
        StyleBuilder::new(self.name, self.theme).add_all(self.entries)
    }

    /// Stages this stylesheet as overrides on top of `parent`.
    ///
    /// The derived style takes this stylesheet's name and theme.
    pub fn extend(self, parent: &Arc<Style>) -> StyleBuilder {
        parent
            .builder()
            .name(self.name)
            .theme(self.theme)
            .add_all(self.entries)
    }

    /// Builds a parent-less style from this stylesheet.
    ///
    /// # Errors
    ///
    /// Fails if any descriptor is invalid.
    pub fn build(self) -> Result<Arc<Style>, StyleSheetError> {
        Ok(self.into_builder().build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::style::Trilean;
    use crate::token::TokenType;

    const MONOKAI: &str = r##"
name: monokai
theme: dark
entries:
  Background: "bg:#272822 #f8f8f2"
  Keyword: "bold #66d9ef"
  CommentSingle: "italic #75715e"
"##;

    #[test]
    fn test_from_yaml() {
        let sheet = StyleSheet::from_yaml(MONOKAI).unwrap();
        assert_eq!(sheet.name, "monokai");
        assert_eq!(sheet.theme, "dark");
        assert_eq!(sheet.entries.len(), 3);
        assert_eq!(
            sheet.entries.get(&TokenType::Keyword).map(String::as_str),
            Some("bold #66d9ef")
        );
    }

    #[test]
    fn test_build() {
        let style = StyleSheet::from_yaml(MONOKAI).unwrap().build().unwrap();
        let keyword = style.get(TokenType::KeywordNamespace);
        assert_eq!(keyword.bold, Trilean::Yes);
        assert_eq!(keyword.background, Colour::new(0x27, 0x28, 0x22));
    }

    #[test]
    fn test_entries_default_to_empty() {
        let sheet = StyleSheet::from_yaml("name: bare\ntheme: light\n").unwrap();
        assert!(sheet.entries.is_empty());
    }

    #[test]
    fn test_unknown_token_type_is_rejected() {
        let yaml = "name: x\ntheme: dark\nentries:\n  Comment.Single: bold\n";
        assert!(matches!(
            StyleSheet::from_yaml(yaml),
            Err(StyleSheetError::Yaml(_))
        ));
    }

    #[test]
    fn test_missing_theme_is_rejected() {
        assert!(StyleSheet::from_yaml("name: x\n").is_err());
    }

    #[test]
    fn test_invalid_descriptor_fails_build() {
        let yaml = "name: x\ntheme: dark\nentries:\n  Keyword: bold\n  Name: sparkly\n";
        let err = StyleSheet::from_yaml(yaml).unwrap().build().unwrap_err();
        match err {
            StyleSheetError::Build(err) => assert_eq!(err.token, TokenType::Name),
            other => panic!("expected build error, got {other:?}"),
        }
    }

    #[test]
    fn test_extend_overrides_parent() {
        let base = StyleSheet::from_yaml(MONOKAI).unwrap().build().unwrap();
        let sheet = StyleSheet::from_yaml(
            "name: monokai-warm\ntheme: dark\nentries:\n  Keyword: \"#fd971f\"\n",
        )
        .unwrap();
        let derived = sheet.extend(&base).build().unwrap();
        assert_eq!(derived.name(), "monokai-warm");
        assert_eq!(
            derived.get(TokenType::Keyword).colour,
            Colour::new(0xfd, 0x97, 0x1f)
        );
        assert_eq!(
            derived.get(TokenType::CommentSingle).italic,
            Trilean::Yes
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let sheet = StyleSheet::from_yaml(MONOKAI).unwrap();
        let again = StyleSheet::from_yaml(&sheet.to_yaml().unwrap()).unwrap();
        assert_eq!(again, sheet);
    }
}
