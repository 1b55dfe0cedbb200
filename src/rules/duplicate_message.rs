//! Flag duplicate (source, comment) pairs within a context, and contexts
//! declared more than once. The catalog keeps duplicates in document order;
//! lookups resolve to the first occurrence, so later copies are unreachable.

use std::collections::HashMap;

use crate::issue::Issue;
use crate::scan::FileCatalog;

pub fn check(file: &FileCatalog) -> Vec<Issue> {
    let mut issues = Vec::new();
    let path = file.path_str();

    let mut seen_contexts: HashMap<&str, usize> = HashMap::new();
    for context in file.catalog.contexts() {
        *seen_contexts.entry(context.name.as_str()).or_insert(0) += 1;
        if seen_contexts[context.name.as_str()] == 2 {
            issues.push(Issue::duplicate_context(&path, &context.name));
        }

        let mut first_lines: HashMap<(&str, Option<&str>), usize> = HashMap::new();
        for message in &context.messages {
            let key = (message.source.as_str(), message.comment.as_deref());
            match first_lines.get(&key) {
                Some(&first_line) => issues.push(Issue::duplicate_message(
                    &path,
                    message.doc_line,
                    &context.name,
                    &message.source,
                    first_line,
                    file.source_line(message.doc_line),
                )),
                None => {
                    first_lines.insert(key, message.doc_line);
                }
            }
        }
    }
    issues
}
