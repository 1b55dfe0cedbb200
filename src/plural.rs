//! Plural-rule registry and resolver.
//!
//! Qt Linguist catalogs store one `<numerusform>` per grammatical plural
//! form of the target locale, so the number of forms a numerus message must
//! carry depends on the locale's rule family. The registry is an explicit
//! value passed to whatever needs it; there is no hidden global table, which
//! keeps the resolver testable and side-effect free.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CatalogError;

static LOCALE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}([_-][A-Za-z0-9]{2,8})*$").unwrap());

/// A plural-rule family: how many translation forms a locale needs and
/// which form index a given count selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    /// A single form for every count (ja, zh, ko, ...).
    OneForm,
    /// Two forms, the first used only for exactly 1 (en, de, tr, fi, ...).
    TwoFormsSingularOne,
    /// Two forms, the first used for 0 and 1 (fr, pt_BR, ...).
    TwoFormsSingularZeroOne,
    /// Three forms selected on n mod 10 / n mod 100 (hr, bs, ru, ...).
    ThreeFormsSlavic,
}

impl RuleFamily {
    /// Number of translation forms a numerus message needs under this family.
    pub fn form_count(self) -> usize {
        match self {
            RuleFamily::OneForm => 1,
            RuleFamily::TwoFormsSingularOne | RuleFamily::TwoFormsSingularZeroOne => 2,
            RuleFamily::ThreeFormsSlavic => 3,
        }
    }

    /// Index of the translation form that applies to a count of `n`.
    ///
    /// Always less than [`form_count`](Self::form_count).
    pub fn select(self, n: u64) -> usize {
        match self {
            RuleFamily::OneForm => 0,
            RuleFamily::TwoFormsSingularOne => {
                if n == 1 {
                    0
                } else {
                    1
                }
            }
            RuleFamily::TwoFormsSingularZeroOne => {
                if n <= 1 {
                    0
                } else {
                    1
                }
            }
            RuleFamily::ThreeFormsSlavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
        }
    }

    /// Stable name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            RuleFamily::OneForm => "one-form",
            RuleFamily::TwoFormsSingularOne => "singular-one",
            RuleFamily::TwoFormsSingularZeroOne => "singular-zero-one",
            RuleFamily::ThreeFormsSlavic => "slavic",
        }
    }

    /// Inverse of [`name`](Self::name). Returns `None` for unknown names.
    pub fn parse_name(name: &str) -> Option<Self> {
        match name {
            "one-form" => Some(RuleFamily::OneForm),
            "singular-one" => Some(RuleFamily::TwoFormsSingularOne),
            "singular-zero-one" => Some(RuleFamily::TwoFormsSingularZeroOne),
            "slavic" => Some(RuleFamily::ThreeFormsSlavic),
            _ => None,
        }
    }
}

/// Returns true if `tag` is a well-formed locale tag like `tr`, `pt_PT`
/// or `zh-CN`.
pub fn is_valid_tag(tag: &str) -> bool {
    LOCALE_TAG_REGEX.is_match(tag)
}

/// Locale-tag to rule-family registry.
///
/// Lookups fall back from a region tag to its base language (`pt_PT` ->
/// `pt`), so only languages whose regions genuinely differ (e.g. `pt_BR`)
/// need their own entry.
#[derive(Debug, Clone)]
pub struct PluralRules {
    rules: HashMap<String, RuleFamily>,
}

impl Default for PluralRules {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PluralRules {
    /// An empty registry. Every lookup fails with `UnsupportedLocale`.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registry seeded with the stock locale table.
    pub fn with_defaults() -> Self {
        let mut rules = Self::empty();
        for tag in ["ja", "zh", "ko", "th", "vi", "id"] {
            rules.register(tag, RuleFamily::OneForm);
        }
        for tag in [
            "af", "bg", "ca", "da", "de", "el", "en", "es", "et", "eu", "fi", "hu", "it", "nb",
            "nl", "pt", "sv", "tr",
        ] {
            rules.register(tag, RuleFamily::TwoFormsSingularOne);
        }
        for tag in ["fr", "pt_BR"] {
            rules.register(tag, RuleFamily::TwoFormsSingularZeroOne);
        }
        for tag in ["be", "bs", "hr", "ru", "sr", "uk"] {
            rules.register(tag, RuleFamily::ThreeFormsSlavic);
        }
        rules
    }

    /// Register or override the rule family for a locale tag.
    pub fn register(&mut self, tag: impl Into<String>, family: RuleFamily) {
        self.rules.insert(tag.into(), family);
    }

    /// Resolve the rule family for `tag`, falling back to the base language
    /// for region-qualified tags.
    pub fn family(&self, tag: &str) -> Result<RuleFamily, CatalogError> {
        if let Some(&family) = self.rules.get(tag) {
            return Ok(family);
        }
        if let Some(base) = tag.split(['_', '-']).next()
            && base != tag
            && let Some(&family) = self.rules.get(base)
        {
            return Ok(family);
        }
        Err(CatalogError::UnsupportedLocale(tag.to_string()))
    }

    /// Number of plural forms a numerus message must carry for `tag`.
    pub fn form_count(&self, tag: &str) -> Result<usize, CatalogError> {
        Ok(self.family(tag)?.form_count())
    }

    /// Which translation form index applies for a count of `n` under `tag`.
    pub fn select(&self, tag: &str, n: u64) -> Result<usize, CatalogError> {
        Ok(self.family(tag)?.select(n))
    }
}
