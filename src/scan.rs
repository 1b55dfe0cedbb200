//! Catalog file discovery and parallel loading.

use std::{fs, path::Path, path::PathBuf};

use anyhow::Result;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::issue::Issue;
use crate::parser;
use crate::plural;

/// A parsed catalog together with the file it came from and its raw text,
/// kept around so rules can attach source-line excerpts to issues.
#[derive(Debug)]
pub struct FileCatalog {
    pub path: PathBuf,
    pub text: String,
    pub catalog: Catalog,
}

impl FileCatalog {
    pub fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    /// 1-based line excerpt from the catalog document.
    pub fn source_line(&self, line: usize) -> Option<String> {
        self.text
            .lines()
            .nth(line.checked_sub(1)?)
            .map(str::to_string)
    }
}

/// Recursively collect `.ts` files under `root`, skipping paths that match
/// any of the configured ignore patterns. Results are sorted by file name
/// for deterministic output.
pub fn find_catalog_files(root: &Path, ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("ts") {
            continue;
        }
        if ignores.iter().any(|p| p.matches_path(path)) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    Ok(files)
}

/// Parse catalog files in parallel.
///
/// Unreadable or malformed files become parse issues rather than aborting
/// the run, so one broken catalog never hides problems in the others.
pub fn load_catalogs(paths: &[PathBuf]) -> (Vec<FileCatalog>, Vec<Issue>) {
    let results: Vec<Result<FileCatalog, Issue>> = paths
        .par_iter()
        .map(|path| {
            let path_str = path.display().to_string();
            let bytes = fs::read(path).map_err(|e| Issue::read_error(&path_str, &e))?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            match parser::parse(&bytes) {
                Ok(catalog) => Ok(FileCatalog {
                    path: path.clone(),
                    text,
                    catalog,
                }),
                Err(error) => {
                    let excerpt = match &error {
                        crate::error::CatalogError::MalformedDocument { line, .. } => {
                            text.lines().nth(line.saturating_sub(1)).map(str::to_string)
                        }
                        _ => None,
                    };
                    Err(Issue::parse_error(&path_str, &error, excerpt))
                }
            }
        })
        .collect();

    let mut catalogs = Vec::new();
    let mut issues = Vec::new();
    for result in results {
        match result {
            Ok(catalog) => catalogs.push(catalog),
            Err(issue) => issues.push(issue),
        }
    }
    (catalogs, issues)
}

/// Derive a locale tag from a catalog file name.
///
/// Handles both bare tags and prefixed names as used by the wallet tree:
/// `tr.ts` -> `tr`, `bitcoin_pt_PT.ts` -> `pt_PT`. The document's own
/// `language` attribute stays authoritative; this is a fallback for tooling
/// that only has a path.
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    if plural::is_valid_tag(stem) {
        return Some(stem.to_string());
    }
    let (_, rest) = stem.split_once('_')?;
    plural::is_valid_tag(rest).then(|| rest.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    const VALID: &str = r#"<?xml version="1.0" ?><!DOCTYPE TS><TS language="tr" version="2.0">
<context>
    <name>AboutDialog</name>
    <message>
        <source>About</source>
        <translation>Hakkında</translation>
    </message>
</context>
</TS>
"#;

    #[test]
    fn test_extract_locale() {
        assert_eq!(extract_locale("tr.ts"), Some("tr".to_string()));
        assert_eq!(
            extract_locale("locale/bitcoin_pt_PT.ts"),
            Some("pt_PT".to_string())
        );
        assert_eq!(
            extract_locale("bitcoin_af_ZA.ts"),
            Some("af_ZA".to_string())
        );
        assert_eq!(extract_locale("bitcoin_hr.ts"), Some("hr".to_string()));
        assert_eq!(extract_locale("strings.ts"), None);
    }

    #[test]
    fn test_find_catalog_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bitcoin_tr.ts"), VALID).unwrap();
        fs::write(dir.path().join("bitcoin_hr.ts"), VALID).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a catalog").unwrap();
        fs::create_dir(dir.path().join("old")).unwrap();
        fs::write(dir.path().join("old").join("bitcoin_fi.ts"), VALID).unwrap();

        let files = find_catalog_files(dir.path(), &[]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["bitcoin_hr.ts", "bitcoin_tr.ts", "bitcoin_fi.ts"]);

        let ignores = vec![Pattern::new("**/old/**").unwrap()];
        let files = find_catalog_files(dir.path(), &ignores).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_load_catalogs_collects_parse_issues() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("bitcoin_tr.ts");
        let bad = dir.path().join("bitcoin_hr.ts");
        fs::write(&good, VALID).unwrap();
        fs::write(&bad, "<TS language=\"hr\" version=\"2.0\">").unwrap();

        let (catalogs, issues) = load_catalogs(&[good, bad]);
        assert_eq!(catalogs.len(), 1);
        assert_eq!(catalogs[0].catalog.language, "tr");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].file_path.ends_with("bitcoin_hr.ts"));
    }

    #[test]
    fn test_source_line_excerpt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bitcoin_tr.ts");
        fs::write(&path, VALID).unwrap();
        let (catalogs, _) = load_catalogs(&[path]);
        assert_eq!(
            catalogs[0].source_line(3).as_deref(),
            Some("    <name>AboutDialog</name>")
        );
        assert_eq!(catalogs[0].source_line(0), None);
        assert_eq!(catalogs[0].source_line(999), None);
    }
}
