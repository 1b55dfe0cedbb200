//! Flag unfinished messages so completion gaps show up in CI.

use crate::catalog::MessageStatus;
use crate::issue::Issue;
use crate::scan::FileCatalog;

pub fn check(file: &FileCatalog) -> Vec<Issue> {
    let mut issues = Vec::new();
    for context in file.catalog.contexts() {
        for message in &context.messages {
            if message.status == MessageStatus::Unfinished {
                issues.push(Issue::untranslated(
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
