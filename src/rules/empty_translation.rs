//! Flag messages marked finished whose translation text is empty.
//!
//! An empty finished translation renders as an empty string at runtime,
//! which is almost always a translator mistake; genuinely missing text
//! should be marked unfinished instead.

use crate::catalog::MessageStatus;
use crate::issue::Issue;
use crate::scan::FileCatalog;

pub fn check(file: &FileCatalog) -> Vec<Issue> {
    let mut issues = Vec::new();
    for context in file.catalog.contexts() {
        for message in &context.messages {
            if message.status != MessageStatus::Finished || message.numerus {
                continue;
            }
            let empty = message
                .translations
                .first()
                .is_none_or(|t| t.is_empty());
            if empty {
                issues.push(Issue::empty_translation(
                    &file.path_str(),
                    message.doc_line,
                    &context.name,
                    &message.source,
                    file.source_line(message.doc_line),
                ));
            }
        }
    }
    issues
}
