use std::path::PathBuf;

use anyhow::Result;

use super::{CommandOutcome, resolve_paths};
use crate::cli::args::CheckCommand;
use crate::{config, rules, scan};

pub fn check(cmd: CheckCommand) -> Result<CommandOutcome> {
    let start_dir = cmd
        .common
        .config_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let loaded = config::load_config(&start_dir)?;
    let plural_rules = loaded.config.plural_rules();
    let ignores = loaded.config.ignore_patterns()?;

    let files = resolve_paths(&cmd.paths, &ignores)?;
    let (catalogs, mut issues) = scan::load_catalogs(&files);

    for file in &catalogs {
        issues.extend(rules::run_all(file, &plural_rules));
    }
    issues.sort();

    let mut notes = Vec::new();
    if cmd.common.verbose {
        for file in &catalogs {
            let stats = file.catalog.stats();
            notes.push(format!(
                "checked {} ({}: {}/{} finished)",
                file.path.display(),
                file.catalog.language,
                stats.finished,
                stats.total
            ));
        }
    }

    Ok(CommandOutcome {
        issues,
        files_checked: files.len(),
        notes,
        failed: false,
    })
}
