use anyhow::Result;

use crate::{CLEAN_CATALOG, CliTest, stdout_of};

const OBSOLETE_CATALOG: &str = r#"<?xml version="1.0" ?><!DOCTYPE TS><TS language="tr" version="2.0">
<context>
    <name>AboutDialog</name>
    <message>
        <source>About</source>
        <translation>Hakkında</translation>
    </message>
    <message>
        <source>Old label</source>
        <translation type="obsolete">Eski etiket</translation>
    </message>
</context>
<context>
    <name>RemovedDialog</name>
    <message>
        <source>Gone</source>
        <translation type="obsolete">Yok</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_dry_run_reports_without_writing() -> Result<()> {
    let test = CliTest::with_file("locale/bitcoin_tr.ts", OBSOLETE_CATALOG)?;

    let output = test.clean_command().output()?;
    let stdout = stdout_of(&output);
    assert!(
        stdout.contains("would remove 2 obsolete message(s)"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("--apply"));

    // File untouched in dry-run mode.
    assert_eq!(test.read_file("locale/bitcoin_tr.ts")?, OBSOLETE_CATALOG);

    Ok(())
}

#[test]
fn test_apply_rewrites_file() -> Result<()> {
    let test = CliTest::with_file("locale/bitcoin_tr.ts", OBSOLETE_CATALOG)?;

    let output = test.clean_command().arg("--apply").output()?;
    assert!(
        stdout_of(&output).contains("removed 2 obsolete message(s)"),
        "stdout: {}",
        stdout_of(&output)
    );

    let rewritten = test.read_file("locale/bitcoin_tr.ts")?;
    assert!(!rewritten.contains("Old label"));
    assert!(rewritten.contains("About"));
    // A context left with no messages is dropped entirely.
    assert!(!rewritten.contains("RemovedDialog"));

    // A second clean finds nothing left to do.
    let output = test.clean_command().output()?;
    assert!(stdout_of(&output).contains("no obsolete messages found"));

    Ok(())
}

#[test]
fn test_catalog_without_obsolete_is_untouched() -> Result<()> {
    let test = CliTest::with_file("locale/bitcoin_tr.ts", CLEAN_CATALOG)?;

    let output = test.clean_command().arg("--apply").output()?;
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("no obsolete messages found"));
    assert_eq!(test.read_file("locale/bitcoin_tr.ts")?, CLEAN_CATALOG);

    Ok(())
}
