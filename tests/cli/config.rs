use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_config_file_changes_language_table() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".polydocrc.json",
        r#"{ "languages": [{ "language": "english", "tag": "en" }] }"#,
    )?;
    test.write_file(
        "Hello.cs",
        "/// <summary>\n///   <en>\n///     Hello\n///   </en>\n/// </summary>\n",
    )?;

    assert_cmd_snapshot!(test.dry_run_command(), @r"
success: true
exit_code: 0
----- stdout -----
✓ All 1 comment block already translated

----- stderr -----
");

    Ok(())
}

#[test]
fn test_custom_main_tag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".polydocrc.json", r#"{ "mainTag": "remarks" }"#)?;
    test.write_file(
        "Hello.cs",
        "/// <summary>ignored</summary>\n/// <remarks>\n/// <en>Hi</en>\n/// </remarks>\n",
    )?;

    assert_cmd_snapshot!(test.dry_run_command(), @r"
success: false
exit_code: 1
----- stdout -----
  --> Hello.cs:2  missing zh-CN, es

Would rewrite 1 comment block in 1 file.
Run without --dry-run to translate and rewrite them.

----- stderr -----
");

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "settings/polydoc.json",
        r#"{ "languages": [{ "language": "english", "tag": "en" }] }"#,
    )?;
    test.write_file("Hello.cs", "/// <summary><en>Hi</en></summary>\n")?;

    assert_cmd_snapshot!(
        test.command()
            .args(["--dry-run", "--config", "settings/polydoc.json", "."]),
        @r"
success: false
exit_code: 1
----- stdout -----
  --> Hello.cs:1  not in canonical layout

Would rewrite 1 comment block in 1 file.
Run without --dry-run to translate and rewrite them.

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".polydocrc.json",
        r#"{ "languages": [{ "language": "english", "tag": "en" }, { "language": "anglais", "tag": "en" }] }"#,
    )?;

    assert_cmd_snapshot!(test.run_command(), @r#"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Duplicate language tag in 'languages': "en"
"#);
    assert!(test.root().join(".polydocrc.json").exists());

    Ok(())
}

#[test]
fn test_zero_timeout_is_rejected() -> Result<()> {
    let test = CliTest::with_file(".polydocrc.json", r#"{ "timeoutSecs": 0 }"#)?;

    assert_cmd_snapshot!(test.dry_run_command(), @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: 'timeoutSecs' must be greater than 0
");

    Ok(())
}
