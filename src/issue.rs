use std::{cmp::Ordering, fmt};

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    PluralForms,
    DuplicateMessage,
    Untranslated,
    Obsolete,
    EmptyTranslation,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::PluralForms => write!(f, "plural-forms"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: String,
    pub line: Option<usize>,
    pub col: Option<usize>,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub details: Option<String>,
    pub source_line: Option<String>,
}

impl Issue {
    pub fn parse_error(file_path: &str, error: &CatalogError, source_line: Option<String>) -> Self {
        let (line, col) = match error {
            CatalogError::MalformedDocument { line, col, .. } => (Some(*line), Some(*col)),
            _ => (None, None),
        };
        Self {
            file_path: file_path.to_string(),
            line,
            col,
            message: error.to_string(),
            severity: Severity::Error,
            rule: Rule::ParseError,
            details: None,
            source_line,
        }
    }

    pub fn read_error(file_path: &str, error: &std::io::Error) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: None,
            col: None,
            message: format!("failed to read file: {error}"),
            severity: Severity::Error,
            rule: Rule::ParseError,
            details: None,
            source_line: None,
        }
    }

    pub fn plural_forms(
        file_path: &str,
        line: usize,
        source: &str,
        expected: usize,
        actual: usize,
        locale: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: None,
            message: source.to_string(),
            severity: Severity::Error,
            rule: Rule::PluralForms,
            details: Some(format!(
                "expected {} translation form(s) for locale \"{}\", found {}",
                expected, locale, actual
            )),
            source_line,
        }
    }

    pub fn unsupported_locale(file_path: &str, locale: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: None,
            col: None,
            message: format!("no plural rule registered for locale \"{}\"", locale),
            severity: Severity::Error,
            rule: Rule::PluralForms,
            details: Some(
                "register the locale under pluralOverrides in .lincatrc.json".to_string(),
            ),
            source_line: None,
        }
    }

    pub fn duplicate_message(
        file_path: &str,
        line: usize,
        context: &str,
        source: &str,
        first_line: usize,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: None,
            message: source.to_string(),
            severity: Severity::Error,
            rule: Rule::DuplicateMessage,
            details: Some(format!(
                "duplicated in context \"{}\" (first defined at line {})",
                context, first_line
            )),
            source_line,
        }
    }

    pub fn duplicate_context(file_path: &str, name: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: None,
            col: None,
            message: name.to_string(),
            severity: Severity::Error,
            rule: Rule::DuplicateMessage,
            details: Some("context declared more than once".to_string()),
            source_line: None,
        }
    }

    pub fn untranslated(
        file_path: &str,
        line: usize,
        context: &str,
        source: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: None,
            message: source.to_string(),
            severity: Severity::Warning,
            rule: Rule::Untranslated,
            details: Some(format!("unfinished in context \"{}\"", context)),
            source_line,
        }
    }

    pub fn obsolete(
        file_path: &str,
        line: usize,
        context: &str,
        source: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: None,
            message: source.to_string(),
            severity: Severity::Warning,
            rule: Rule::Obsolete,
            details: Some(format!(
                "obsolete in context \"{}\" (run `lincat clean` to remove)",
                context
            )),
            source_line,
        }
    }

    pub fn empty_translation(
        file_path: &str,
        line: usize,
        context: &str,
        source: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: None,
            message: source.to_string(),
            severity: Severity::Warning,
            rule: Rule::EmptyTranslation,
            details: Some(format!(
                "marked finished in context \"{}\" but the translation is empty",
                context
            )),
            source_line,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by file, then position, then rule and message so output is
        // deterministic even when issues come from parallel file loads.
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.rule.cmp(&other.rule))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
