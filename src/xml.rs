//! XML encoding of parent-less styles.
//!
//! A style is persisted as a single `<style>` element with one `<entry>`
//! child per explicit category:
//!
//! ```xml
//! <style name="monokai" theme="dark">
//!   <entry type="Background" style="#f8f8f2 bg:#272822"/>
//!   <entry type="Keyword" style="bold #66d9ef"/>
//! </style>
//! ```
//!
//! Entries are written in token order, so equal styles encode to identical
//! documents. Only parent-less styles can be encoded; derived styles must be
//! [flattened](Style::flatten) first. Decoding is strict: unknown elements,
//! unknown attributes, unknown token names, invalid descriptors and elements
//! after the root are all errors, and nothing is returned unless the whole document is valid.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::Arc;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::style::{parse_style_entry, DecodeError, EncodeError, StyleEntry};
use crate::theme::Style;
use crate::token::TokenType;

const STYLE_TAG: &str = "style";
const ENTRY_TAG: &str = "entry";

impl Style {
    /// Encodes this style as an XML document.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::HasParent`] for derived styles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokenstyle::{Style, StyleBuilder, TokenType};
    ///
    /// let style = StyleBuilder::new("mono", "light")
    ///     .add(TokenType::Keyword, "bold #0000ff")
    ///     .build()
    ///     .unwrap();
    /// let xml = style.to_xml().unwrap();
    /// assert!(xml.contains(r##"<entry type="Keyword" style="bold #0000ff"/>"##));
    ///
    /// let decoded = Style::from_xml(&xml).unwrap();
    /// assert_eq!(decoded.get(TokenType::Keyword), style.get(TokenType::Keyword));
    /// ```
    pub fn to_xml(&self) -> Result<String, EncodeError> {
        let mut buf = Vec::new();
        self.write_xml(&mut buf)?;
        String::from_utf8(buf).map_err(|e| EncodeError::Write(e.to_string()))
    }

    /// Writes this style as an XML document to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::HasParent`] for derived styles, or
    /// [`EncodeError::Write`] if the writer fails.
    pub fn write_xml<W: Write>(&self, writer: W) -> Result<(), EncodeError> {
        if self.parent.is_some() {
            return Err(EncodeError::HasParent(self.name.clone()));
        }
        let mut writer = Writer::new_with_indent(writer, b' ', 2);

        let mut root = BytesStart::new(STYLE_TAG);
        root.push_attribute(("name", self.name.as_str()));
        root.push_attribute(("theme", self.theme.as_str()));
        write_event(&mut writer, Event::Start(root))?;

        for (token, entry) in self.sorted_entries() {
            let descriptor = entry.to_string();
            let mut el = BytesStart::new(ENTRY_TAG);
            el.push_attribute(("type", token.name()));
            el.push_attribute(("style", descriptor.as_str()));
            write_event(&mut writer, Event::Empty(el))?;
        }

        write_event(&mut writer, Event::End(BytesEnd::new(STYLE_TAG)))
    }

    /// Decodes a style from an XML document.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing the first violation found.
    pub fn from_xml(xml: &str) -> Result<Arc<Style>, DecodeError> {
        let mut reader = Reader::from_str(xml);

        let (root, self_closing) = loop {
            match reader.read_event().map_err(xml_error)? {
                Event::Start(e) => break (e.into_owned(), false),
                Event::Empty(e) => break (e.into_owned(), true),
                Event::Eof => return Err(DecodeError::MissingRoot),
                _ => {}
            }
        };
        let (name, theme) = decode_root(&root)?;

        let mut entries = HashMap::new();
        let mut in_entry = false;
        if !self_closing {
            loop {
                match reader.read_event().map_err(xml_error)? {
                    Event::Start(e) if !in_entry => {
                        let (token, entry) = decode_entry(&e)?;
                        entries.insert(token, entry);
                        in_entry = true;
                    }
                    Event::Empty(e) if !in_entry => {
                        let (token, entry) = decode_entry(&e)?;
                        entries.insert(token, entry);
                    }
                    Event::Start(e) | Event::Empty(e) => {
                        return Err(DecodeError::UnexpectedElement(tag_name(&e)));
                    }
                    Event::End(_) if in_entry => in_entry = false,
                    Event::End(_) => break,
                    Event::Eof => return Err(DecodeError::UnexpectedEof),
                    _ => {}
                }
            }
        }
        expect_document_end(&mut reader)?;

        tracing::debug!(style = %name, theme = %theme, entries = entries.len(), "decoded style");
        Ok(Arc::new(Style {
            name,
            theme,
            entries,
            parent: None,
        }))
    }

    /// Reads and decodes a style from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Read`] if reading fails, otherwise as
    /// [`from_xml`](Style::from_xml).
    pub fn read_xml<R: Read>(mut reader: R) -> Result<Arc<Style>, DecodeError> {
        let mut xml = String::new();
        reader
            .read_to_string(&mut xml)
            .map_err(|e| DecodeError::Read(e.to_string()))?;
        Self::from_xml(&xml)
    }
}

/// Only comments, whitespace and processing instructions may follow the root.
fn expect_document_end(reader: &mut Reader<&[u8]>) -> Result<(), DecodeError> {
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) | Event::Empty(e) => {
                return Err(DecodeError::UnexpectedElement(tag_name(&e)));
            }
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), EncodeError> {
    writer
        .write_event(event)
        .map_err(|e| EncodeError::Write(e.to_string()))
}

fn xml_error(err: impl std::fmt::Display) -> DecodeError {
    DecodeError::Xml(err.to_string())
}

fn tag_name(el: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(el.name().as_ref()).into_owned()
}

/// Collects an element's attributes as `(name, unescaped value)` pairs.
fn attributes(el: &BytesStart<'_>) -> Result<Vec<(String, String)>, DecodeError> {
    el.attributes()
        .map(|attr| {
            let attr = attr.map_err(xml_error)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(xml_error)?.into_owned();
            Ok((key, value))
        })
        .collect()
}

fn decode_root(el: &BytesStart<'_>) -> Result<(String, String), DecodeError> {
    if el.name().as_ref() != STYLE_TAG.as_bytes() {
        return Err(DecodeError::UnexpectedElement(tag_name(el)));
    }
    let mut name = String::new();
    let mut theme = String::new();
    for (key, value) in attributes(el)? {
        match key.as_str() {
            "name" => name = value,
            "theme" => theme = value,
            _ => return Err(DecodeError::UnexpectedAttribute(key)),
        }
    }
    if name.is_empty() {
        return Err(DecodeError::MissingAttribute {
            element: STYLE_TAG,
            attribute: "name",
        });
    }
    if theme.is_empty() {
        return Err(DecodeError::MissingAttribute {
            element: STYLE_TAG,
            attribute: "theme",
        });
    }
    Ok((name, theme))
}

fn decode_entry(el: &BytesStart<'_>) -> Result<(TokenType, StyleEntry), DecodeError> {
    if el.name().as_ref() != ENTRY_TAG.as_bytes() {
        return Err(DecodeError::UnexpectedElement(tag_name(el)));
    }
    let mut type_name = None;
    let mut descriptor = None;
    for (key, value) in attributes(el)? {
        match key.as_str() {
            "type" => type_name = Some(value),
            "style" => descriptor = Some(value),
            _ => return Err(DecodeError::UnexpectedAttribute(key)),
        }
    }
    let type_name = type_name.ok_or(DecodeError::MissingAttribute {
        element: ENTRY_TAG,
        attribute: "type",
    })?;
    let token =
        TokenType::from_name(&type_name).ok_or(DecodeError::UnknownTokenType(type_name))?;
    let descriptor = descriptor.ok_or(DecodeError::MissingAttribute {
        element: ENTRY_TAG,
        attribute: "style",
    })?;
    let entry = parse_style_entry(&descriptor)
        .map_err(|source| DecodeError::InvalidEntry { token, source })?;
    Ok((token, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::style::{ParseError, Trilean};
    use crate::theme::StyleBuilder;

    fn sample() -> Arc<Style> {
        StyleBuilder::new("sample", "dark")
            .add(TokenType::Text, "#ffffff")
            .add(TokenType::Keyword, "bold #0000ff")
            .add(TokenType::Background, "bg:#000000")
            .build()
            .unwrap()
    }

    #[test]
    fn test_encode_is_sorted_and_canonical() {
        let xml = sample().to_xml().unwrap();
        let expected = "<style name=\"sample\" theme=\"dark\">\n  \
                        <entry type=\"Background\" style=\"bg:#000000\"/>\n  \
                        <entry type=\"Keyword\" style=\"bold #0000ff\"/>\n  \
                        <entry type=\"Text\" style=\"#ffffff\"/>\n\
                        </style>";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(sample().to_xml().unwrap(), sample().to_xml().unwrap());
    }

    #[test]
    fn test_round_trip() {
        let style = sample();
        let decoded = Style::from_xml(&style.to_xml().unwrap()).unwrap();
        assert_eq!(decoded.name(), "sample");
        assert_eq!(decoded.theme(), "dark");
        for token in [TokenType::Text, TokenType::Keyword, TokenType::Background] {
            assert_eq!(decoded.get(token), style.get(token));
        }
        assert_eq!(decoded.types(), style.types());
    }

    #[test]
    fn test_encode_with_parent_fails() {
        let child = sample().builder().build().unwrap();
        assert!(matches!(child.to_xml(), Err(EncodeError::HasParent(_))));
        assert!(child.flatten().to_xml().is_ok());
    }

    #[test]
    fn test_encode_escapes_attributes() {
        let style = StyleBuilder::new("a \"quoted\" <name>", "dark")
            .build()
            .unwrap();
        let decoded = Style::from_xml(&style.to_xml().unwrap()).unwrap();
        assert_eq!(decoded.name(), "a \"quoted\" <name>");
    }

    #[test]
    fn test_decode_open_and_close_entries() {
        let xml = r##"<?xml version="1.0"?>
            <!-- comment -->
            <style name="x" theme="light">
              <entry type="CommentSingle" style="italic #888888"></entry>
              <entry style="bold" type="Keyword"/>
            </style>"##;
        let style = Style::from_xml(xml).unwrap();
        let comment = style.get(TokenType::CommentSingle);
        assert_eq!(comment.italic, Trilean::Yes);
        assert_eq!(comment.colour, Colour::new(0x88, 0x88, 0x88));
        assert_eq!(style.get(TokenType::Keyword).bold, Trilean::Yes);
    }

    #[test]
    fn test_decode_self_closing_root() {
        let style = Style::from_xml(r#"<style name="x" theme="dark"/>"#).unwrap();
        assert!(style.types().is_empty());
    }

    #[test]
    fn test_decode_missing_root_attributes() {
        assert_eq!(
            Style::from_xml(r#"<style theme="dark"></style>"#).unwrap_err(),
            DecodeError::MissingAttribute {
                element: "style",
                attribute: "name"
            }
        );
        assert_eq!(
            Style::from_xml(r#"<style name="x" theme=""></style>"#).unwrap_err(),
            DecodeError::MissingAttribute {
                element: "style",
                attribute: "theme"
            }
        );
    }

    #[test]
    fn test_decode_rejects_extra_root_attribute() {
        let err = Style::from_xml(r#"<style name="x" theme="dark" author="me"/>"#).unwrap_err();
        assert_eq!(err, DecodeError::UnexpectedAttribute("author".to_string()));
    }

    #[test]
    fn test_decode_rejects_wrong_root() {
        let err = Style::from_xml(r#"<theme name="x" theme="dark"/>"#).unwrap_err();
        assert_eq!(err, DecodeError::UnexpectedElement("theme".to_string()));
    }

    #[test]
    fn test_decode_rejects_unknown_child() {
        let xml = r#"<style name="x" theme="dark"><rule type="Text" style=""/></style>"#;
        assert_eq!(
            Style::from_xml(xml).unwrap_err(),
            DecodeError::UnexpectedElement("rule".to_string())
        );
    }

    #[test]
    fn test_decode_rejects_nested_child() {
        let xml = r#"<style name="x" theme="dark">
            <entry type="Text" style=""><entry type="Name" style=""/></entry>
        </style>"#;
        assert_eq!(
            Style::from_xml(xml).unwrap_err(),
            DecodeError::UnexpectedElement("entry".to_string())
        );
    }

    #[test]
    fn test_decode_rejects_extra_entry_attribute() {
        let xml = r#"<style name="x" theme="dark"><entry type="Text" style="" note="hi"/></style>"#;
        assert_eq!(
            Style::from_xml(xml).unwrap_err(),
            DecodeError::UnexpectedAttribute("note".to_string())
        );
    }

    #[test]
    fn test_decode_rejects_unknown_token_type() {
        let xml = r#"<style name="x" theme="dark"><entry type="Comment.Single" style="bold"/></style>"#;
        assert_eq!(
            Style::from_xml(xml).unwrap_err(),
            DecodeError::UnknownTokenType("Comment.Single".to_string())
        );
    }

    #[test]
    fn test_decode_rejects_invalid_descriptor() {
        let xml = r#"<style name="x" theme="dark"><entry type="Keyword" style="bold blink"/></style>"#;
        assert_eq!(
            Style::from_xml(xml).unwrap_err(),
            DecodeError::InvalidEntry {
                token: TokenType::Keyword,
                source: ParseError::UnknownElement("blink".to_string()),
            }
        );
    }

    #[test]
    fn test_decode_requires_entry_attributes() {
        let xml = r#"<style name="x" theme="dark"><entry style="bold"/></style>"#;
        assert!(matches!(
            Style::from_xml(xml),
            Err(DecodeError::MissingAttribute {
                attribute: "type",
                ..
            })
        ));
        let xml = r#"<style name="x" theme="dark"><entry type="Text"/></style>"#;
        assert!(matches!(
            Style::from_xml(xml),
            Err(DecodeError::MissingAttribute {
                attribute: "style",
                ..
            })
        ));
    }

    #[test]
    fn test_decode_rejects_content_after_root() {
        let xml = r#"<style name="x" theme="dark"></style><style name="y" theme="dark"/>"#;
        assert_eq!(
            Style::from_xml(xml).unwrap_err(),
            DecodeError::UnexpectedElement("style".to_string())
        );
        let xml = r#"<style name="x" theme="dark"/>
            <entry type="Text" style="bold"/>"#;
        assert_eq!(
            Style::from_xml(xml).unwrap_err(),
            DecodeError::UnexpectedElement("entry".to_string())
        );
    }

    #[test]
    fn test_decode_allows_trailing_comment() {
        let xml = "<style name=\"x\" theme=\"dark\"/>\n<!-- end -->\n";
        assert!(Style::from_xml(xml).is_ok());
    }

    #[test]
    fn test_decode_truncated_document() {
        assert_eq!(Style::from_xml("").unwrap_err(), DecodeError::MissingRoot);
        let err = Style::from_xml(r#"<style name="x" theme="dark"><entry type="Text" style=""/>"#)
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEof | DecodeError::Xml(_)));
    }

    #[test]
    fn test_decode_malformed_xml() {
        let err = Style::from_xml(r#"<style name="x" theme="dark"></entry>"#).unwrap_err();
        assert!(matches!(err, DecodeError::Xml(_)));
    }

    #[test]
    fn test_read_and_write_streams() {
        let style = sample();
        let mut buf = Vec::new();
        style.write_xml(&mut buf).unwrap();
        let decoded = Style::read_xml(buf.as_slice()).unwrap();
        assert_eq!(decoded.get(TokenType::Keyword), style.get(TokenType::Keyword));
    }
}
