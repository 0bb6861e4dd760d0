//! Errors raised while parsing, building and (de)serialising styles.

use thiserror::Error;

use crate::token::TokenType;

/// A style descriptor could not be parsed.
///
/// Every variant carries the offending token verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token is not part of the descriptor grammar.
    #[error("unknown style element {0:?}")]
    UnknownElement(String),
    /// A foreground colour literal is malformed.
    #[error("invalid colour {0:?}")]
    InvalidColour(String),
    /// A `bg:` colour literal is malformed.
    #[error("invalid background colour {0:?}")]
    InvalidBackground(String),
    /// A `border:` colour literal is malformed.
    #[error("invalid border colour {0:?}")]
    InvalidBorder(String),
}

impl ParseError {
    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            ParseError::UnknownElement(t)
            | ParseError::InvalidColour(t)
            | ParseError::InvalidBackground(t)
            | ParseError::InvalidBorder(t) => t,
        }
    }
}

/// A staged descriptor failed to parse, aborting the whole build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid entry for {token}: {source}")]
pub struct BuildError {
    /// The category whose descriptor was rejected.
    pub token: TokenType,
    /// Why it was rejected.
    #[source]
    pub source: ParseError,
}

/// An XML style document violates the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The document is not well-formed XML.
    #[error("malformed style document: {0}")]
    Xml(String),
    /// The document has no root element.
    #[error("missing style element")]
    MissingRoot,
    /// An element other than `<style>` or `<entry>` was found.
    #[error("unexpected element {0}")]
    UnexpectedElement(String),
    /// An attribute not defined for its element was found.
    #[error("unexpected attribute {0}")]
    UnexpectedAttribute(String),
    /// A required attribute is absent or empty.
    #[error("missing {element} {attribute} attribute")]
    MissingAttribute {
        /// The element lacking the attribute.
        element: &'static str,
        /// The attribute's name.
        attribute: &'static str,
    },
    /// An entry names a token type that does not exist.
    #[error("unknown token type {0:?}")]
    UnknownTokenType(String),
    /// An entry's descriptor failed to parse.
    #[error("invalid entry for {token}: {source}")]
    InvalidEntry {
        /// The category the descriptor belongs to.
        token: TokenType,
        /// Why it was rejected.
        #[source]
        source: ParseError,
    },
    /// The document ended before the root element was closed.
    #[error("unexpected end of style document")]
    UnexpectedEof,
    /// The document could not be read.
    #[error("failed to read style document: {0}")]
    Read(String),
}

/// A style could not be serialised.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Only parent-less styles can be serialised; flatten first.
    #[error("cannot encode style {0:?} with a parent")]
    HasParent(String),
    /// The underlying writer failed.
    #[error("failed to write style document: {0}")]
    Write(String),
}

/// A YAML stylesheet could not be loaded.
#[derive(Debug, Error)]
pub enum StyleSheetError {
    /// The YAML is malformed or names an unknown token type.
    #[error("invalid stylesheet: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A descriptor in the stylesheet failed to parse.
    #[error(transparent)]
    Build(#[from] BuildError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_display_names_token() {
        let err = ParseError::UnknownElement("bogus".to_string());
        assert_eq!(err.to_string(), "unknown style element \"bogus\"");
        assert_eq!(err.token(), "bogus");

        let err = ParseError::InvalidBackground("bg:#zz".to_string());
        assert!(err.to_string().contains("background"));
        assert!(err.to_string().contains("bg:#zz"));
    }

    #[test]
    fn test_build_error_display_and_source() {
        let err = BuildError {
            token: TokenType::Keyword,
            source: ParseError::UnknownElement("bogus".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("Keyword"));
        assert!(msg.contains("bogus"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::MissingAttribute {
                element: "style",
                attribute: "name"
            }
            .to_string(),
            "missing style name attribute"
        );
        assert_eq!(
            DecodeError::UnexpectedElement("rule".to_string()).to_string(),
            "unexpected element rule"
        );
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::HasParent("derived".to_string());
        assert!(err.to_string().contains("parent"));
    }
}
