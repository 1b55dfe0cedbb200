use anyhow::Result;

use crate::{CLEAN_CATALOG, CliTest, stdout_of};

#[test]
fn test_clean_catalog_passes() -> Result<()> {
    let test = CliTest::with_file("locale/bitcoin_tr.ts", CLEAN_CATALOG)?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout_of(&output).contains("no issues found"));

    Ok(())
}

#[test]
fn test_wrong_plural_form_count_fails() -> Result<()> {
    // Croatian needs three plural forms; this catalog only carries two.
    let test = CliTest::with_file(
        "locale/bitcoin_hr.ts",
        r#"<?xml version="1.0" ?><!DOCTYPE TS><TS language="hr" version="2.0">
<context>
    <name>BitcoinGUI</name>
    <message numerus="yes">
        <source>%n block(s)</source>
        <translation><numerusform>%n blok</numerusform><numerusform>%n bloka</numerusform></translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("plural-forms"), "stdout: {stdout}");
    assert!(stdout.contains("expected 3 translation form(s)"));

    Ok(())
}

#[test]
fn test_malformed_catalog_fails() -> Result<()> {
    let test = CliTest::with_file(
        "locale/bitcoin_tr.ts",
        "<?xml version=\"1.0\" ?><!DOCTYPE TS><TS language=\"tr\" version=\"2.0\">\n<context>\n",
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("parse-error"));

    Ok(())
}

#[test]
fn test_unfinished_message_warns() -> Result<()> {
    let test = CliTest::with_file(
        "locale/bitcoin_de.ts",
        r#"<?xml version="1.0" ?><!DOCTYPE TS><TS language="de" version="2.0">
<context>
    <name>AboutDialog</name>
    <message>
        <source>About</source>
        <translation type="unfinished"/>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("untranslated"), "stdout: {stdout}");
    assert!(stdout.contains("1 warning"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file("locale/bitcoin_tr.ts", CLEAN_CATALOG)?;
    test.write_file(
        ".lincatrc.json",
        r#"{ "ignores": ["**/old/**"] }"#,
    )?;
    // Would fail the check if scanned, but the ignore pattern excludes it.
    test.write_file("locale/old/bitcoin_xx.ts", "not a catalog")?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "stdout: {}",
        stdout_of(&output)
    );

    Ok(())
}

#[test]
fn test_plural_override_registers_locale() -> Result<()> {
    // Klingon is not in the built-in plural table.
    let doc = r#"<?xml version="1.0" ?><!DOCTYPE TS><TS language="tlh" version="2.0">
<context>
    <name>AboutDialog</name>
    <message numerus="yes">
        <source>%n block(s)</source>
        <translation><numerusform>%n blok</numerusform></translation>
    </message>
</context>
</TS>
"#;
    let test = CliTest::with_file("locale/bitcoin_tlh.ts", doc)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("no plural rule registered"));

    test.write_file(
        ".lincatrc.json",
        r#"{ "pluralOverrides": { "tlh": "one-form" } }"#,
    )?;
    let output = test.check_command().output()?;
    assert!(output.status.success(), "stdout: {}", stdout_of(&output));

    Ok(())
}

#[test]
fn test_explicit_file_argument() -> Result<()> {
    let test = CliTest::with_file("locale/bitcoin_tr.ts", CLEAN_CATALOG)?;
    test.write_file(
        "locale/bitcoin_de.ts",
        r#"<?xml version="1.0" ?><!DOCTYPE TS><TS language="de" version="2.0">
<context>
    <name>AboutDialog</name>
    <message>
        <source>About</source>
        <translation type="unfinished"/>
    </message>
</context>
</TS>
"#,
    )?;

    // Only the named file is checked, so the unfinished German catalog
    // does not affect the result.
    let output = test
        .check_command()
        .arg("locale/bitcoin_tr.ts")
        .output()?;
    assert!(output.status.success(), "stdout: {}", stdout_of(&output));
    assert!(stdout_of(&output).contains("1 catalog file"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    for subcommand in ["check", "clean", "fmt", "init"] {
        assert!(stdout.contains(subcommand), "missing {subcommand} in help");
    }

    Ok(())
}
