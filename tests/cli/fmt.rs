use anyhow::Result;

use crate::{CLEAN_CATALOG, CliTest, stdout_of};

// Valid but not canonical: indented prolog lines and an absolute line
// number instead of the relative "+14" form.
const UNFORMATTED: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE TS>
<TS version="2.0" language="tr">
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
fn test_dry_run_fails_on_unformatted_file() -> Result<()> {
    let test = CliTest::with_file("locale/bitcoin_tr.ts", UNFORMATTED)?;

    let output = test.fmt_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("would reformat"));
    assert_eq!(test.read_file("locale/bitcoin_tr.ts")?, UNFORMATTED);

    Ok(())
}

#[test]
fn test_apply_rewrites_and_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("locale/bitcoin_tr.ts", UNFORMATTED)?;

    let output = test.fmt_command().arg("--apply").output()?;
    assert!(output.status.success(), "stdout: {}", stdout_of(&output));
    assert!(stdout_of(&output).contains("reformatted"));

    let formatted = test.read_file("locale/bitcoin_tr.ts")?;
    assert!(formatted.starts_with(
        "<?xml version=\"1.0\" ?><!DOCTYPE TS><TS language=\"tr\" version=\"2.0\">\n"
    ));
    assert!(formatted.contains("    <message>\n        <source>About</source>"));

    // Once canonical, fmt has nothing to do.
    let output = test.fmt_command().output()?;
    assert!(output.status.success(), "stdout: {}", stdout_of(&output));
    assert_eq!(test.read_file("locale/bitcoin_tr.ts")?, formatted);

    Ok(())
}

#[test]
fn test_canonical_file_passes() -> Result<()> {
    let test = CliTest::with_file("locale/bitcoin_tr.ts", CLEAN_CATALOG)?;

    let output = test.fmt_command().output()?;
    assert!(output.status.success(), "stdout: {}", stdout_of(&output));

    Ok(())
}
