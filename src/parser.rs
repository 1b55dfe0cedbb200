//! Streaming parser for Qt Linguist `.ts` documents.
//!
//! The TS format is XML: a `<TS>` root declaring `language` and `version`,
//! `<context>` children each carrying a `<name>` and ordered `<message>`
//! elements, and per-message `<location>`, `<source>`, `<comment>` and
//! `<translation>` children (the latter holding `<numerusform>` entries for
//! numerus messages). Structural problems surface as
//! [`CatalogError::MalformedDocument`] with the offending line and column;
//! an unrecognized format version surfaces as
//! [`CatalogError::UnsupportedVersion`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, BytesText, Event};

use crate::catalog::{Catalog, Context, Location, Message, MessageStatus};
use crate::error::CatalogError;
use crate::plural;

const SUPPORTED_VERSIONS: &[&str] = &["2.0", "2.1"];

/// Parse a TS document into a [`Catalog`].
pub fn parse(bytes: &[u8]) -> Result<Catalog, CatalogError> {
    let text = std::str::from_utf8(bytes).map_err(|e| CatalogError::MalformedDocument {
        reason: format!("invalid UTF-8: {e}"),
        line: 1,
        col: 1,
    })?;
    Parser::new(text).parse()
}

/// Build an index of line start byte offsets for O(log n) position lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Map a byte offset to a 1-based (line, column) pair using binary search.
fn offset_to_position(line_index: &[usize], offset: usize) -> (usize, usize) {
    let line = match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    };
    let col = offset - line_index[line - 1] + 1;
    (line, col)
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

struct Parser<'a> {
    reader: Reader<&'a [u8]>,
    line_index: Vec<usize>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            reader: Reader::from_str(text),
            line_index: build_line_index(text),
        }
    }

    fn position(&self) -> (usize, usize) {
        offset_to_position(&self.line_index, self.reader.buffer_position() as usize)
    }

    fn line(&self) -> usize {
        self.position().0
    }

    fn malformed(&self, reason: impl Into<String>) -> CatalogError {
        let (line, col) = self.position();
        CatalogError::MalformedDocument {
            reason: reason.into(),
            line,
            col,
        }
    }

    fn next(&mut self) -> Result<Event<'a>, CatalogError> {
        self.reader
            .read_event()
            .map_err(|e| self.malformed(e.to_string()))
    }

    fn attr(&self, e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, CatalogError> {
        match e
            .try_get_attribute(name)
            .map_err(|err| self.malformed(err.to_string()))?
        {
            Some(attr) => attr
                .unescape_value()
                .map(|v| Some(v.into_owned()))
                .map_err(|err| self.malformed(err.to_string())),
            None => Ok(None),
        }
    }

    fn unescape_text(&self, t: &BytesText<'_>) -> Result<String, CatalogError> {
        t.unescape()
            .map(|c| c.into_owned())
            .map_err(|e| self.malformed(e.to_string()))
    }

    fn expect_whitespace(&self, t: &BytesText<'_>) -> Result<(), CatalogError> {
        if t.as_ref().iter().all(u8::is_ascii_whitespace) {
            Ok(())
        } else {
            Err(self.malformed("unexpected text between elements"))
        }
    }

    fn parse(mut self) -> Result<Catalog, CatalogError> {
        let (language, source_language, version) = self.parse_prolog()?;

        if !SUPPORTED_VERSIONS.contains(&version.as_str()) {
            return Err(CatalogError::UnsupportedVersion(version));
        }
        if !plural::is_valid_tag(&language) {
            return Err(self.malformed(format!("invalid locale tag \"{language}\"")));
        }

        let mut default_codec = None;
        let mut contexts = Vec::new();
        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"context" => contexts.push(self.parse_context()?),
                    b"defaultcodec" => default_codec = Some(self.read_text(b"defaultcodec")?),
                    other => {
                        return Err(self.malformed(format!(
                            "unexpected element <{}> in <TS>",
                            element_name(other)
                        )));
                    }
                },
                Event::Empty(e) => {
                    return Err(self.malformed(format!(
                        "unexpected element <{}> in <TS>",
                        element_name(e.name().as_ref())
                    )));
                }
                Event::End(e) if e.name().as_ref() == b"TS" => break,
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Comment(_) => {}
                Event::Eof => return Err(self.malformed("unexpected end of document inside <TS>")),
                _ => return Err(self.malformed("unexpected markup in <TS>")),
            }
        }

        // Only whitespace and comments may follow the root element.
        loop {
            match self.next()? {
                Event::Eof => break,
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Comment(_) => {}
                _ => return Err(self.malformed("content after </TS>")),
            }
        }

        Ok(Catalog::from_parts(
            language,
            source_language,
            version,
            default_codec,
            contexts,
        ))
    }

    /// Skip the XML declaration and doctype, then read the `<TS>` root tag
    /// and its attributes.
    fn parse_prolog(&mut self) -> Result<(String, Option<String>, String), CatalogError> {
        loop {
            match self.next()? {
                Event::Decl(_) | Event::DocType(_) | Event::PI(_) | Event::Comment(_) => {}
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Start(e) if e.name().as_ref() == b"TS" => {
                    let version = self
                        .attr(&e, b"version")?
                        .ok_or_else(|| self.malformed("missing version attribute on <TS>"))?;
                    let language = self
                        .attr(&e, b"language")?
                        .ok_or_else(|| self.malformed("missing language attribute on <TS>"))?;
                    let source_language = self.attr(&e, b"sourcelanguage")?;
                    return Ok((language, source_language, version));
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(self.malformed(format!(
                        "expected <TS> root element, found <{}>",
                        element_name(e.name().as_ref())
                    )));
                }
                Event::Eof => return Err(self.malformed("missing <TS> root element")),
                _ => return Err(self.malformed("unexpected markup before <TS>")),
            }
        }
    }

    fn parse_context(&mut self) -> Result<Context, CatalogError> {
        let mut name: Option<String> = None;
        let mut messages = Vec::new();
        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => name = Some(self.read_text(b"name")?),
                    b"message" => {
                        let numerus = matches!(self.attr(&e, b"numerus")?.as_deref(), Some("yes"));
                        messages.push(self.parse_message(numerus)?);
                    }
                    other => {
                        return Err(self.malformed(format!(
                            "unexpected element <{}> in <context>",
                            element_name(other)
                        )));
                    }
                },
                Event::Empty(e) => {
                    return Err(self.malformed(format!(
                        "unexpected element <{}> in <context>",
                        element_name(e.name().as_ref())
                    )));
                }
                Event::End(e) if e.name().as_ref() == b"context" => break,
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Comment(_) => {}
                Event::Eof => return Err(self.malformed("unclosed <context>")),
                _ => return Err(self.malformed("unexpected markup in <context>")),
            }
        }
        let name = name.ok_or_else(|| self.malformed("missing <name> in <context>"))?;
        Ok(Context { name, messages })
    }

    fn parse_message(&mut self, numerus: bool) -> Result<Message, CatalogError> {
        let doc_line = self.line();
        let mut source: Option<String> = None;
        let mut comment: Option<String> = None;
        let mut locations = Vec::new();
        let mut translations = Vec::new();
        let mut status = MessageStatus::Finished;
        let mut saw_translation = false;

        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"source" => source = Some(self.read_text(b"source")?),
                    b"comment" => comment = Some(self.read_text(b"comment")?),
                    b"location" => {
                        locations.push(self.parse_location(&e)?);
                        self.read_end(b"location")?;
                    }
                    b"translation" => {
                        let (translation_status, forms) = self.parse_translation(&e, numerus)?;
                        status = translation_status;
                        translations = forms;
                        saw_translation = true;
                    }
                    other => {
                        return Err(self.malformed(format!(
                            "unexpected element <{}> in <message>",
                            element_name(other)
                        )));
                    }
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"location" => locations.push(self.parse_location(&e)?),
                    b"translation" => {
                        status = self.translation_status(&e)?;
                        translations = Vec::new();
                        saw_translation = true;
                    }
                    other => {
                        return Err(self.malformed(format!(
                            "unexpected element <{}> in <message>",
                            element_name(other)
                        )));
                    }
                },
                Event::End(e) if e.name().as_ref() == b"message" => break,
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Comment(_) => {}
                Event::Eof => return Err(self.malformed("unclosed <message>")),
                _ => return Err(self.malformed("unexpected markup in <message>")),
            }
        }

        let source = source.ok_or_else(|| self.malformed("missing <source> in <message>"))?;
        if !saw_translation {
            // Freshly extracted messages may carry no <translation> yet.
            status = MessageStatus::Unfinished;
        }
        if !numerus && translations.is_empty() {
            translations.push(String::new());
        }

        Ok(Message {
            source,
            comment,
            translations,
            status,
            locations,
            numerus,
            doc_line,
        })
    }

    fn parse_translation(
        &mut self,
        e: &BytesStart<'_>,
        numerus: bool,
    ) -> Result<(MessageStatus, Vec<String>), CatalogError> {
        let status = self.translation_status(e)?;
        let mut forms = Vec::new();
        let mut text = String::new();

        loop {
            match self.next()? {
                Event::Text(t) => text.push_str(&self.unescape_text(&t)?),
                Event::CData(t) => {
                    let raw = std::str::from_utf8(t.as_ref())
                        .map_err(|err| self.malformed(err.to_string()))?;
                    text.push_str(raw);
                }
                Event::Start(ne) if ne.name().as_ref() == b"numerusform" => {
                    if !numerus {
                        return Err(self.malformed("<numerusform> in non-numerus message"));
                    }
                    forms.push(self.read_text(b"numerusform")?);
                }
                Event::Empty(ne) if ne.name().as_ref() == b"numerusform" => {
                    if !numerus {
                        return Err(self.malformed("<numerusform> in non-numerus message"));
                    }
                    forms.push(String::new());
                }
                Event::Start(ne) | Event::Empty(ne) => {
                    return Err(self.malformed(format!(
                        "unexpected element <{}> in <translation>",
                        element_name(ne.name().as_ref())
                    )));
                }
                Event::End(ne) if ne.name().as_ref() == b"translation" => break,
                Event::Comment(_) => {}
                Event::Eof => return Err(self.malformed("unclosed <translation>")),
                _ => return Err(self.malformed("unexpected markup in <translation>")),
            }
        }

        if numerus {
            if !text.trim().is_empty() {
                return Err(self.malformed("stray text in numerus <translation>"));
            }
            Ok((status, forms))
        } else {
            Ok((status, vec![text]))
        }
    }

    fn translation_status(&self, e: &BytesStart<'_>) -> Result<MessageStatus, CatalogError> {
        match self.attr(e, b"type")?.as_deref() {
            None => Ok(MessageStatus::Finished),
            Some("unfinished") => Ok(MessageStatus::Unfinished),
            Some("obsolete") => Ok(MessageStatus::Obsolete),
            Some(other) => Err(self.malformed(format!("unknown translation type \"{other}\""))),
        }
    }

    fn parse_location(&self, e: &BytesStart<'_>) -> Result<Location, CatalogError> {
        let filename = self.attr(e, b"filename")?;
        let line_delta = match self.attr(e, b"line")? {
            Some(raw) => raw
                .strip_prefix('+')
                .unwrap_or(&raw)
                .parse::<i64>()
                .map_err(|_| {
                    self.malformed(format!("invalid line attribute \"{raw}\" on <location>"))
                })?,
            None => 0,
        };
        Ok(Location {
            filename,
            line_delta,
        })
    }

    /// Accumulate character data until the matching end tag.
    fn read_text(&mut self, tag: &[u8]) -> Result<String, CatalogError> {
        let mut out = String::new();
        loop {
            match self.next()? {
                Event::Text(t) => out.push_str(&self.unescape_text(&t)?),
                Event::CData(t) => {
                    let raw = std::str::from_utf8(t.as_ref())
                        .map_err(|err| self.malformed(err.to_string()))?;
                    out.push_str(raw);
                }
                Event::End(e) if e.name().as_ref() == tag => break,
                Event::Comment(_) => {}
                Event::Start(e) | Event::Empty(e) => {
                    return Err(self.malformed(format!(
                        "unexpected element <{}> inside <{}>",
                        element_name(e.name().as_ref()),
                        element_name(tag)
                    )));
                }
                Event::Eof => {
                    return Err(self.malformed(format!("unclosed <{}>", element_name(tag))));
                }
                _ => return Err(self.malformed("unexpected markup")),
            }
        }
        Ok(out)
    }

    /// Consume the end tag of an element whose content must be empty.
    fn read_end(&mut self, tag: &[u8]) -> Result<(), CatalogError> {
        loop {
            match self.next()? {
                Event::End(e) if e.name().as_ref() == tag => return Ok(()),
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Comment(_) => {}
                _ => {
                    return Err(self.malformed(format!(
                        "unexpected content in <{}>",
                        element_name(tag)
                    )));
                }
            }
        }
    }
}
