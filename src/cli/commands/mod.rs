pub mod check;
pub mod clean;
pub mod fmt;
pub mod init;

use std::path::PathBuf;

use anyhow::Result;
use glob::Pattern;

use crate::issue::Issue;
use crate::scan;

/// What a command did, for the shared reporting/exit-code logic in
/// `cli::run_cli`.
#[derive(Debug, Default)]
pub struct CommandOutcome {
    pub issues: Vec<Issue>,
    pub files_checked: usize,
    /// Plain summary lines printed before the issue report.
    pub notes: Vec<String>,
    /// Force a failing exit even without issues (fmt dry-run with pending
    /// changes).
    pub failed: bool,
}

/// Expand the positional path arguments into a concrete file list:
/// directories are scanned recursively for `.ts` files, explicit file
/// paths are taken as-is.
pub(crate) fn resolve_paths(paths: &[PathBuf], ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    let default_paths = [PathBuf::from(".")];
    let roots: &[PathBuf] = if paths.is_empty() {
        &default_paths
    } else {
        paths
    };

    let mut files = Vec::new();
    for root in roots {
        if root.is_dir() {
            files.extend(scan::find_catalog_files(root, ignores)?);
        } else {
            files.push(root.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_resolve_paths_mixes_files_and_dirs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bitcoin_tr.ts"), "x").unwrap();
        let explicit = dir.path().join("bitcoin_hr.ts");
        fs::write(&explicit, "x").unwrap();

        let files = resolve_paths(&[dir.path().to_path_buf(), explicit.clone()], &[]).unwrap();
        // The explicit file is also found by the scan; dedup keeps one copy.
        assert_eq!(files.len(), 2);
        assert!(files.contains(&explicit));
    }
}
