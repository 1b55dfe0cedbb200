use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{CommandOutcome, resolve_paths};
use crate::cli::args::FmtCommand;
use crate::{config, scan, writer};

/// Rewrite catalog files into canonical serialized form.
///
/// Without `--apply` this behaves like `rustfmt --check`: it lists the
/// files that would change and fails so CI can enforce formatting.
pub fn fmt(cmd: FmtCommand) -> Result<CommandOutcome> {
    let start_dir = cmd
        .common
        .config_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let loaded = config::load_config(&start_dir)?;
    let ignores = loaded.config.ignore_patterns()?;

    let files = resolve_paths(&cmd.paths, &ignores)?;
    let (catalogs, issues) = scan::load_catalogs(&files);

    let mut notes = Vec::new();
    let mut changed = 0;
    for file in &catalogs {
        let canonical = writer::serialize_to_string(&file.catalog);
        if canonical == file.text {
            if cmd.common.verbose {
                notes.push(format!("{}: already canonical", file.path.display()));
            }
            continue;
        }
        changed += 1;
        if cmd.apply {
            fs::write(&file.path, canonical.as_bytes())
                .with_context(|| format!("Failed to write {}", file.path.display()))?;
            notes.push(format!("{}: reformatted", file.path.display()));
        } else {
            notes.push(format!("{}: would reformat", file.path.display()));
        }
    }

    Ok(CommandOutcome {
        issues,
        files_checked: files.len(),
        notes,
        failed: !cmd.apply && changed > 0,
    })
}
