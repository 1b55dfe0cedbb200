use thiserror::Error;

/// Errors produced by catalog parsing, lookup, and plural resolution.
///
/// `NotFound` is an expected, recoverable condition: callers are meant to
/// handle it explicitly (typically by falling back to the source text).
/// The other variants abort the operation that produced them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("malformed document: {reason} (line {line}, column {col})")]
    MalformedDocument {
        reason: String,
        line: usize,
        col: usize,
    },

    #[error("unsupported TS format version \"{0}\"")]
    UnsupportedVersion(String),

    // The field holds the message's source string, not an error source,
    // so it must not be named `source` or the derive treats it as one.
    #[error("no message \"{source_text}\" in context \"{context}\"")]
    NotFound {
        context: String,
        source_text: String,
    },

    #[error("no plural rule registered for locale \"{0}\"")]
    UnsupportedLocale(String),
}
