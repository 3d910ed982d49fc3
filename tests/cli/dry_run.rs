use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{COMPLETE_BLOCK, CliTest};

#[test]
fn test_dry_run_lists_pending_blocks() -> Result<()> {
    let untagged = "/// <summary>\n/// Gets the block hash\n/// </summary>\n";
    let partial = "class Tx\n{\n  /// <summary>\n  ///   <en>\n  ///     Transaction\n  ///   </en>\n  /// </summary>\n}\n";
    let test = CliTest::with_file("src/Block.cs", untagged)?;
    test.write_file("src/Tx.cs", partial)?;

    assert_cmd_snapshot!(test.dry_run_command(), @r"
success: false
exit_code: 1
----- stdout -----
  --> src/Block.cs:1  untagged text
  --> src/Tx.cs:3  missing zh-CN, es

Would rewrite 2 comment blocks in 2 files.
Run without --dry-run to translate and rewrite them.

----- stderr -----
");

    // Nothing is written in dry-run mode.
    assert_eq!(test.read_file("src/Block.cs")?, untagged);
    assert_eq!(test.read_file("src/Tx.cs")?, partial);

    Ok(())
}

#[test]
fn test_dry_run_clean_tree_succeeds() -> Result<()> {
    let test = CliTest::with_file("Block.cs", &format!("{COMPLETE_BLOCK}\n"))?;

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
fn test_dry_run_flags_non_canonical_layout() -> Result<()> {
    let test = CliTest::with_file(
        "Block.cs",
        "/// <summary><en>Hi</en><zh-CN>你好</zh-CN><es>Hola</es></summary>\n",
    )?;

    assert_cmd_snapshot!(test.dry_run_command(), @r"
success: false
exit_code: 1
----- stdout -----
  --> Block.cs:1  not in canonical layout

Would rewrite 1 comment block in 1 file.
Run without --dry-run to translate and rewrite them.

----- stderr -----
");

    Ok(())
}
