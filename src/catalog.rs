//! In-memory model of a Qt Linguist translation catalog.
//!
//! A [`Catalog`] owns an ordered sequence of [`Context`]s, each owning an
//! ordered sequence of [`Message`]s. Order is preserved exactly as parsed so
//! that re-serialization produces minimal diffs under version control. On top
//! of the ordered data sits a lookup index keyed by
//! (context, source, disambiguation comment), kept consistent by every
//! mutating operation.

use std::collections::HashMap;

use crate::error::CatalogError;

/// Completion status of a message, encoded in the TS format as the
/// `type` attribute of `<translation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// Translation is missing or draft (`type="unfinished"`).
    Unfinished,
    /// Translation is done (no `type` attribute).
    Finished,
    /// The application no longer references the source string
    /// (`type="obsolete"`). Kept in the file until a cleanup pass runs.
    Obsolete,
}

/// Where a translatable string originates in the application source.
/// Provenance metadata only; never semantically load-bearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Source file path. Omitted when the previous location already named it.
    pub filename: Option<String>,
    /// Signed line delta relative to the previous location in the file.
    pub line_delta: i64,
}

/// One translatable unit: a source string, its translation form(s), and
/// bookkeeping metadata.
#[derive(Debug, Clone)]
pub struct Message {
    /// Canonical untranslated text; part of the lookup key.
    pub source: String,
    /// Disambiguation comment, distinguishing identical sources within one
    /// context.
    pub comment: Option<String>,
    /// Plural forms. Exactly one entry for non-numerus messages; for numerus
    /// messages the target locale's rule family dictates the count.
    pub translations: Vec<String>,
    pub status: MessageStatus,
    pub locations: Vec<Location>,
    /// True when the message needs plural-form handling (`numerus="yes"`).
    pub numerus: bool,
    /// Line in the catalog document this message was parsed from.
    /// Diagnostic provenance; zero for messages built in code.
    pub doc_line: usize,
}

// doc_line is diagnostic provenance, so two messages with equal content
// compare equal regardless of where they were parsed from.
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.comment == other.comment
            && self.translations == other.translations
            && self.status == other.status
            && self.locations == other.locations
            && self.numerus == other.numerus
    }
}

impl Eq for Message {}

impl Message {
    /// A finished, non-numerus message with a single translation.
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            comment: None,
            translations: vec![translation.into()],
            status: MessageStatus::Finished,
            locations: Vec::new(),
            numerus: false,
            doc_line: 0,
        }
    }

    /// A finished numerus message carrying the given plural forms.
    pub fn new_numerus(source: impl Into<String>, forms: Vec<String>) -> Self {
        Self {
            source: source.into(),
            comment: None,
            translations: forms,
            status: MessageStatus::Finished,
            locations: Vec::new(),
            numerus: true,
            doc_line: 0,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_status(mut self, status: MessageStatus) -> Self {
        self.status = status;
        self
    }
}

/// A named grouping of messages, typically one UI component
/// (e.g. `AddressBookPage`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

/// Outcome of [`Catalog::insert_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was new; the message was appended to its context.
    Added,
    /// The key already existed; the previous message was overwritten in
    /// place, keeping its position in the sequence.
    Replaced,
}

/// Completion statistics for a catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MessageKey {
    context: String,
    source: String,
    comment: Option<String>,
}

impl MessageKey {
    fn new(context: &str, source: &str, comment: Option<&str>) -> Self {
        Self {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.map(str::to_string),
        }
    }
}

/// The full set of localized messages for one target language.
///
/// Immutable after load in the common case; single-writer mutation is
/// supported through the methods below, which keep the lookup index in sync
/// with the ordered sequences.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Target locale tag (e.g. `"tr"`, `"pt_PT"`).
    pub language: String,
    /// Language the source strings are written in, when declared.
    pub source_language: Option<String>,
    /// TS format version (e.g. `"2.0"`).
    pub version: String,
    /// Legacy `<defaultcodec>` declaration, preserved for round trips.
    pub default_codec: Option<String>,
    contexts: Vec<Context>,
    context_index: HashMap<String, usize>,
    message_index: HashMap<MessageKey, (usize, usize)>,
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        // Indexes are derived state.
        self.language == other.language
            && self.source_language == other.source_language
            && self.version == other.version
            && self.default_codec == other.default_codec
            && self.contexts == other.contexts
    }
}

impl Eq for Catalog {}

impl Catalog {
    /// An empty catalog for the given target locale, format version 2.0.
    pub fn new(language: impl Into<String>) -> Self {
        Self::from_parts(language.into(), None, "2.0".to_string(), None, Vec::new())
    }

    /// Assemble a catalog from parsed parts and build the lookup index.
    ///
    /// Duplicate context names or message keys are tolerated here: the index
    /// resolves to the first occurrence and `lincat check` flags the
    /// duplicates, mirroring how translation tools treat dirty input.
    pub fn from_parts(
        language: String,
        source_language: Option<String>,
        version: String,
        default_codec: Option<String>,
        contexts: Vec<Context>,
    ) -> Self {
        let mut catalog = Self {
            language,
            source_language,
            version,
            default_codec,
            contexts,
            context_index: HashMap::new(),
            message_index: HashMap::new(),
        };
        catalog.rebuild_index();
        catalog
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.context_index.get(name).map(|&ci| &self.contexts[ci])
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for message in self.contexts.iter().flat_map(|c| &c.messages) {
            stats.total += 1;
            match message.status {
                MessageStatus::Finished => stats.finished += 1,
                MessageStatus::Unfinished => stats.unfinished += 1,
                MessageStatus::Obsolete => stats.obsolete += 1,
            }
        }
        stats
    }

    /// Find the message for (context, source, disambiguation comment).
    ///
    /// `NotFound` is the expected miss condition; callers typically fall
    /// back to the source text.
    pub fn lookup(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
    ) -> Result<&Message, CatalogError> {
        let key = MessageKey::new(context, source, comment);
        self.message_index
            .get(&key)
            .map(|&(ci, mi)| &self.contexts[ci].messages[mi])
            .ok_or_else(|| CatalogError::NotFound {
                context: context.to_string(),
                source_text: source.to_string(),
            })
    }

    /// Insert a message under `context`, creating the context if needed.
    ///
    /// Inserting a key that already exists deterministically overwrites the
    /// existing message in place (it keeps its position in the ordered
    /// sequence); the returned outcome tells the caller which happened.
    pub fn insert_message(&mut self, context: &str, message: Message) -> InsertOutcome {
        let ci = match self.context_index.get(context) {
            Some(&ci) => ci,
            None => {
                self.contexts.push(Context {
                    name: context.to_string(),
                    messages: Vec::new(),
                });
                let ci = self.contexts.len() - 1;
                self.context_index.insert(context.to_string(), ci);
                ci
            }
        };
        let key = MessageKey::new(context, &message.source, message.comment.as_deref());
        match self.message_index.get(&key) {
            Some(&(eci, mi)) => {
                self.contexts[eci].messages[mi] = message;
                InsertOutcome::Replaced
            }
            None => {
                self.contexts[ci].messages.push(message);
                self.message_index
                    .insert(key, (ci, self.contexts[ci].messages.len() - 1));
                InsertOutcome::Added
            }
        }
    }

    /// Mark a message obsolete. The message stays in the catalog until
    /// [`purge_obsolete`](Self::purge_obsolete) runs.
    pub fn mark_obsolete(
        &mut self,
        context: &str,
        source: &str,
        comment: Option<&str>,
    ) -> Result<(), CatalogError> {
        let key = MessageKey::new(context, source, comment);
        let &(ci, mi) = self
            .message_index
            .get(&key)
            .ok_or_else(|| CatalogError::NotFound {
                context: context.to_string(),
                source_text: source.to_string(),
            })?;
        self.contexts[ci].messages[mi].status = MessageStatus::Obsolete;
        Ok(())
    }

    /// Physically remove obsolete messages (the catalog-cleanup pass).
    ///
    /// Contexts left without messages are dropped. Returns how many
    /// messages were removed.
    pub fn purge_obsolete(&mut self) -> usize {
        let before = self.message_count();
        for context in &mut self.contexts {
            context
                .messages
                .retain(|m| m.status != MessageStatus::Obsolete);
        }
        self.contexts.retain(|c| !c.messages.is_empty());
        self.rebuild_index();
        before - self.message_count()
    }

    fn rebuild_index(&mut self) {
        self.context_index.clear();
        self.message_index.clear();
        for (ci, context) in self.contexts.iter().enumerate() {
            self.context_index.entry(context.name.clone()).or_insert(ci);
            for (mi, message) in context.messages.iter().enumerate() {
                let key = MessageKey::new(&context.name, &message.source, message.comment.as_deref());
                self.message_index.entry(key).or_insert((ci, mi));
            }
        }
    }
}
