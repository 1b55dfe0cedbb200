use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("created .lincatrc.json"));
    assert!(test.root().join(".lincatrc.json").exists());

    let content = test.read_file(".lincatrc.json")?;
    let parsed: Value =
        serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed.get("ignores").is_some());
    assert!(parsed.get("pluralOverrides").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lincatrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file(
        "locale/bitcoin_tr.ts",
        crate::CLEAN_CATALOG,
    )?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
