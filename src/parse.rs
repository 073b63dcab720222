//! Markup → [`Document`] adapter over the `quick-xml` pull reader.
//!
//! Performs tree building only. Does NOT validate conformance.

use crate::error::{ParseError, ParseErrorKind};
use crate::types::{Document, Element, XmlDeclaration};
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::reader::Reader;

/// Parse a markup string into an unvalidated Document.
///
/// Element tags are local names (namespace prefixes stripped); attribute keys
/// keep their qualified names so declarations such as `xmlns:xsi` stay
/// visible. Text and CDATA directly inside an element are concatenated into
/// its `text`; comments and processing instructions are dropped.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::new(ParseErrorKind::Empty, "empty input"));
    }

    let mut reader = Reader::from_str(input);
    let mut declaration = None;
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| {
            ParseError::new(ParseErrorKind::Syntax, format!("malformed XML: {}", e)).at(position)
        })?;

        match event {
            Event::Decl(decl) => {
                declaration = Some(read_declaration(&decl).map_err(|e| e.at(position))?);
            }
            Event::Start(start) => {
                if root.is_some() {
                    return Err(trailing_content(position));
                }
                stack.push(read_element(&start).map_err(|e| e.at(position))?);
            }
            Event::Empty(start) => {
                if root.is_some() {
                    return Err(trailing_content(position));
                }
                let element = read_element(&start).map_err(|e| e.at(position))?;
                close(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                // The reader checks that end names match their start tags.
                if let Some(element) = stack.pop() {
                    close(element, &mut stack, &mut root);
                }
            }
            Event::Text(text) => {
                let value = text.unescape().map_err(|e| {
                    ParseError::new(ParseErrorKind::Syntax, format!("bad text content: {}", e))
                        .at(position)
                })?;
                match stack.last_mut() {
                    Some(current) => append_text(current, &value),
                    None if value.trim().is_empty() => {}
                    None => {
                        return Err(ParseError::new(
                            ParseErrorKind::Structure,
                            "text content outside the root element",
                        )
                        .at(position));
                    }
                }
            }
            Event::CData(data) => {
                let value = std::str::from_utf8(&data).map_err(|e| {
                    ParseError::new(ParseErrorKind::Syntax, format!("CDATA is not UTF-8: {}", e))
                        .at(position)
                })?;
                match stack.last_mut() {
                    Some(current) => append_text(current, value),
                    None => {
                        return Err(ParseError::new(
                            ParseErrorKind::Structure,
                            "CDATA outside the root element",
                        )
                        .at(position));
                    }
                }
            }
            Event::Eof => break,
            Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::new(
            ParseErrorKind::Structure,
            format!("unclosed element <{}>", open.tag),
        ));
    }

    let root = root.ok_or_else(|| ParseError::new(ParseErrorKind::Structure, "no root element"))?;
    Ok(Document { declaration, root })
}

fn trailing_content(position: u64) -> ParseError {
    ParseError::new(
        ParseErrorKind::Structure,
        "content after the root element is closed",
    )
    .at(position)
}

/// Attach a finished element to its parent, or make it the root.
fn close(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn append_text(element: &mut Element, value: &str) {
    if value.is_empty() {
        return;
    }
    element.text.get_or_insert_with(String::new).push_str(value);
}

fn read_element(start: &BytesStart<'_>) -> Result<Element, ParseError> {
    let tag = utf8(start.local_name().as_ref(), "element name")?;
    let mut element = Element::new(tag);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| {
            ParseError::new(
                ParseErrorKind::Syntax,
                format!("bad attribute on <{}>: {}", element.tag, e),
            )
        })?;
        let key = utf8(attr.key.as_ref(), "attribute name")?;
        let value = attr.unescape_value().map_err(|e| {
            ParseError::new(
                ParseErrorKind::Syntax,
                format!("bad value for attribute '{}' on <{}>: {}", key, element.tag, e),
            )
        })?;
        if element.attributes.insert(key.clone(), value.into_owned()).is_some() {
            return Err(ParseError::new(
                ParseErrorKind::Syntax,
                format!("duplicate attribute '{}' on <{}>", key, element.tag),
            ));
        }
    }

    Ok(element)
}

fn read_declaration(decl: &BytesDecl<'_>) -> Result<XmlDeclaration, ParseError> {
    let syntax = |e: quick_xml::Error| {
        ParseError::new(ParseErrorKind::Syntax, format!("bad XML declaration: {}", e))
    };
    let version = utf8(&decl.version().map_err(syntax)?, "XML version")?;
    let encoding = match decl.encoding() {
        Some(enc) => Some(utf8(&enc.map_err(syntax)?, "XML encoding")?),
        None => None,
    };
    Ok(XmlDeclaration { version, encoding })
}

fn utf8(bytes: &[u8], what: &str) -> Result<String, ParseError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| ParseError::new(ParseErrorKind::Syntax, format!("{} is not UTF-8: {}", what, e)))
}
