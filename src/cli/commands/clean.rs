use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{CommandOutcome, resolve_paths};
use crate::cli::args::CleanCommand;
use crate::{config, scan, writer};

/// Purge obsolete messages from catalog files (the catalog-cleanup pass).
/// Dry-run by default; `--apply` rewrites the files canonically.
pub fn clean(cmd: CleanCommand) -> Result<CommandOutcome> {
    let start_dir = cmd
        .common
        .config_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let loaded = config::load_config(&start_dir)?;
    let ignores = loaded.config.ignore_patterns()?;

    let files = resolve_paths(&cmd.paths, &ignores)?;
    let (mut catalogs, issues) = scan::load_catalogs(&files);

    let mut notes = Vec::new();
    let mut removed_total = 0;
    for file in &mut catalogs {
        let removed = file.catalog.purge_obsolete();
        if removed == 0 {
            continue;
        }
        removed_total += removed;
        if cmd.apply {
            fs::write(&file.path, writer::serialize(&file.catalog))
                .with_context(|| format!("Failed to write {}", file.path.display()))?;
            notes.push(format!(
                "{}: removed {} obsolete message(s)",
                file.path.display(),
                removed
            ));
        } else {
            notes.push(format!(
                "{}: would remove {} obsolete message(s)",
                file.path.display(),
                removed
            ));
        }
    }

    if removed_total == 0 {
        notes.push("no obsolete messages found".to_string());
    } else if !cmd.apply {
        notes.push("dry-run: re-run with --apply to rewrite files".to_string());
    }

    Ok(CommandOutcome {
        issues,
        files_checked: files.len(),
        notes,
        failed: false,
    })
}
