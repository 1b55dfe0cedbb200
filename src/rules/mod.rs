//! Detection rules for catalog issues.
//!
//! Each rule is a pure function from a loaded catalog file (plus the plural
//! registry where relevant) to a list of issues, so rules stay independently
//! testable and the check command just concatenates their output.

pub mod duplicate_message;
pub mod empty_translation;
pub mod obsolete;
pub mod plural_forms;
pub mod untranslated;

use crate::issue::Issue;
use crate::plural::PluralRules;
use crate::scan::FileCatalog;

/// Run every rule against one catalog file. The result is sorted for
/// deterministic reporting.
pub fn run_all(file: &FileCatalog, rules: &PluralRules) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(plural_forms::check(file, rules));
    issues.extend(duplicate_message::check(file));
    issues.extend(untranslated::check(file));
    issues.extend(obsolete::check(file));
    issues.extend(empty_translation::check(file));
    issues.sort();
    issues
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    use crate::parser;
    use crate::scan::FileCatalog;

    /// Build a `FileCatalog` from an in-memory document for rule tests.
    pub fn file_catalog(doc: &str) -> FileCatalog {
        FileCatalog {
            path: PathBuf::from("bitcoin_test.ts"),
            text: doc.to_string(),
            catalog: parser::parse(doc.as_bytes()).expect("valid test document"),
        }
    }
}
