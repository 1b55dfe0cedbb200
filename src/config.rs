use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::plural::{self, PluralRules, RuleFamily};

pub const CONFIG_FILE_NAME: &str = ".lincatrc.json";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for catalog files to skip during directory scans.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Extra plural-rule registrations, locale tag to rule-family name
    /// (`one-form`, `singular-one`, `singular-zero-one`, `slavic`).
    /// Merged over the built-in table, so entries can also override it.
    #[serde(default)]
    pub plural_overrides: BTreeMap<String, String>,
}

impl Config {
    /// Validate glob patterns and plural overrides.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        for (tag, family) in &self.plural_overrides {
            if !plural::is_valid_tag(tag) {
                bail!("Invalid locale tag in 'pluralOverrides': \"{}\"", tag);
            }
            if RuleFamily::parse_name(family).is_none() {
                bail!(
                    "Unknown plural rule family \"{}\" for locale \"{}\" \
                     (expected one-form, singular-one, singular-zero-one or slavic)",
                    family,
                    tag
                );
            }
        }
        Ok(())
    }

    /// The plural registry: built-in table plus configured overrides.
    pub fn plural_rules(&self) -> PluralRules {
        let mut rules = PluralRules::with_defaults();
        for (tag, family) in &self.plural_overrides {
            if let Some(family) = RuleFamily::parse_name(family) {
                rules.register(tag.clone(), family);
            }
        }
        rules
    }

    /// Compiled ignore patterns. Call after `validate`.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
