//! Verify translation-form counts against the locale's plural rule.
//!
//! A numerus message must carry exactly as many forms as the catalog's
//! locale requires; a non-numerus message carries exactly one. Obsolete
//! entries are skipped since they are dead weight awaiting `lincat clean`.

use crate::catalog::MessageStatus;
use crate::issue::Issue;
use crate::plural::PluralRules;
use crate::scan::FileCatalog;

pub fn check(file: &FileCatalog, rules: &PluralRules) -> Vec<Issue> {
    let mut issues = Vec::new();
    let locale = &file.catalog.language;

    let required = match rules.form_count(locale) {
        Ok(count) => count,
        Err(_) => {
            issues.push(Issue::unsupported_locale(&file.path_str(), locale));
            return issues;
        }
    };

    for context in file.catalog.contexts() {
        for message in &context.messages {
            if message.status == MessageStatus::Obsolete {
                continue;
            }
            let expected = if message.numerus { required } else { 1 };
            if message.translations.len() != expected {
                issues.push(Issue::plural_forms(
                    &file.path_str(),
                    message.doc_line,
                    &message.source,
                    expected,
                    message.translations.len(),
                    locale,
                    file.source_line(message.doc_line),
                ));
            }
        }
    }
    issues
}
