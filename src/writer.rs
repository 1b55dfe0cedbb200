//! Canonical serializer for TS catalogs.
//!
//! Output layout matches what Qt's translation tooling emits for these
//! files: a one-line prolog, unindented `<context>` elements, four-space
//! indentation for context children and eight for message children, with
//! numerusforms inline inside their `<translation>`. Contexts and messages
//! are written in insertion/document order, so the output of
//! `serialize(parse(doc))` is byte-identical to `doc` for any document
//! already in this canonical form, and diffs stay minimal for everything
//! else.

use crate::catalog::{Catalog, Message, MessageStatus};

/// Serialize a catalog into canonical TS bytes.
pub fn serialize(catalog: &Catalog) -> Vec<u8> {
    serialize_to_string(catalog).into_bytes()
}

/// Serialize a catalog into a canonical TS document string.
pub fn serialize_to_string(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" ?><!DOCTYPE TS><TS language=\"");
    escape_into(&mut out, &catalog.language);
    out.push('"');
    if let Some(source_language) = &catalog.source_language {
        out.push_str(" sourcelanguage=\"");
        escape_into(&mut out, source_language);
        out.push('"');
    }
    out.push_str(" version=\"");
    escape_into(&mut out, &catalog.version);
    out.push_str("\">\n");

    if let Some(codec) = &catalog.default_codec {
        out.push_str("<defaultcodec>");
        escape_into(&mut out, codec);
        out.push_str("</defaultcodec>\n");
    }

    for context in catalog.contexts() {
        out.push_str("<context>\n    <name>");
        escape_into(&mut out, &context.name);
        out.push_str("</name>\n");
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, message: &Message) {
    if message.numerus {
        out.push_str("    <message numerus=\"yes\">\n");
    } else {
        out.push_str("    <message>\n");
    }

    for location in &message.locations {
        out.push_str("        <location");
        if let Some(filename) = &location.filename {
            out.push_str(" filename=\"");
            escape_into(out, filename);
            out.push('"');
        }
        out.push_str(" line=\"");
        if location.line_delta >= 0 {
            out.push('+');
        }
        out.push_str(&location.line_delta.to_string());
        out.push_str("\"/>\n");
    }

    out.push_str("        <source>");
    escape_into(out, &message.source);
    out.push_str("</source>\n");

    if let Some(comment) = &message.comment {
        out.push_str("        <comment>");
        escape_into(out, comment);
        out.push_str("</comment>\n");
    }

    out.push_str("        <translation");
    match message.status {
        MessageStatus::Finished => {}
        MessageStatus::Unfinished => out.push_str(" type=\"unfinished\""),
        MessageStatus::Obsolete => out.push_str(" type=\"obsolete\""),
    }

    if message.numerus {
        if message.translations.is_empty() {
            out.push_str("/>\n");
        } else {
            out.push('>');
            for form in &message.translations {
                out.push_str("<numerusform>");
                escape_into(out, form);
                out.push_str("</numerusform>");
            }
            out.push_str("</translation>\n");
        }
    } else {
        let text = message.translations.first().map(String::as_str).unwrap_or("");
        if text.is_empty() {
            out.push_str("/>\n");
        } else {
            out.push('>');
            escape_into(out, text);
            out.push_str("</translation>\n");
        }
    }

    out.push_str("    </message>\n");
}

/// XML escaping for both character data and attribute values. Qt's tooling
/// writes all five predefined entities, apostrophes and quotes included,
/// so the same table applies everywhere.
fn escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}
