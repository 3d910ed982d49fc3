use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{COMPLETE_BLOCK, CliTest};

#[test]
fn test_tree_without_comments() -> Result<()> {
    let test = CliTest::with_file("src/Program.cs", "class Program {}\n")?;
    test.write_file("README.md", "# readme\n")?;

    assert_cmd_snapshot!(test.run_command(), @r"
success: true
exit_code: 0
----- stdout -----
✓ Scanned 2 files - no documentation comments found

----- stderr -----
");
    assert_eq!(test.read_file("src/Program.cs")?, "class Program {}\n");

    Ok(())
}

#[test]
fn test_complete_blocks_need_no_service() -> Result<()> {
    let source = format!("namespace Neo.Core\n{{\n{COMPLETE_BLOCK}\n    public class Block {{}}\n}}\n");
    let test = CliTest::with_file("src/Core/Block.cs", &source)?;

    // No API key is configured: any translation call would fail the run.
    assert_cmd_snapshot!(test.run_command(), @r"
success: true
exit_code: 0
----- stdout -----
✓ All 1 comment block already translated

----- stderr -----
");
    assert_eq!(test.read_file("src/Core/Block.cs")?, source);

    Ok(())
}

#[test]
fn test_untranslated_block_without_api_key_fails() -> Result<()> {
    let source = "    /// <summary>\n    /// Gets the block hash\n    /// </summary>\n    UInt256 Hash { get; }\n";
    let test = CliTest::with_file("Block.cs", source)?;

    assert_cmd_snapshot!(test.run_command(), @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
ERROR failed to process comment block: Language detection failed: no translation API key configured (pass --api-key or set POLYDOC_API_KEY) file=./Block.cs raw=/// <summary>
    /// Gets the block hash
    /// </summary>
Error: Language detection failed: no translation API key configured (pass --api-key or set POLYDOC_API_KEY)
");
    assert_eq!(test.read_file("Block.cs")?, source);

    Ok(())
}

#[test]
fn test_missing_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    let missing = test.root().join("does-not-exist");

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.command().arg(&missing), @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Root directory does not exist: [TEMP]/does-not-exist
");
    });

    Ok(())
}

#[test]
fn test_root_argument_is_required() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command(), @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
error: the following required arguments were not provided:
  <ROOT>

Usage: polydoc <ROOT>

For more information, try '--help'.
");

    Ok(())
}
