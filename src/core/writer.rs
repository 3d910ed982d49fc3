//! Renders patched comments and writes them back into their files.

use std::fs;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::core::error::PipelineError;
use crate::core::record::CommentRecord;

/// Outcome of writing one record back to its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Rewritten,
    /// The rendered block is identical to the original; the file was not touched.
    Unchanged,
}

/// Render the canonical multi-language block for `record`.
///
/// The first line has no indentation: the text before the opening marker
/// on its line stays in the file. Blocks read with CRLF line endings keep them.
pub fn render(record: &CommentRecord, config: &Config) -> String {
    let indent = " ".repeat(record.indent);
    let prefix = &config.comment_prefix;
    let eol = if record.raw.contains("\r\n") { "\r\n" } else { "\n" };

    let mut block = config.opening_marker();
    block.push_str(eol);
    for entry in &record.languages {
        block.push_str(&format!("{indent}{prefix}   <{}>{eol}", entry.tag));
        block.push_str(&format!("{indent}{prefix}     {}{eol}", entry.comment));
        block.push_str(&format!("{indent}{prefix}   </{}>{eol}", entry.tag));
    }
    block.push_str(&indent);
    block.push_str(&config.closing_line());
    block
}

/// Replace the first occurrence of `raw` in `content` with `replacement`.
pub fn replace_block(content: &str, raw: &str, replacement: &str) -> Option<String> {
    let start = content.find(raw)?;
    let mut updated = String::with_capacity(content.len() + replacement.len());
    updated.push_str(&content[..start]);
    updated.push_str(replacement);
    updated.push_str(&content[start + raw.len()..]);
    Some(updated)
}

/// Rewrite `record`'s block in its file.
///
/// The file is re-read so that earlier rewrites in the same file are kept.
pub fn write(record: &CommentRecord, config: &Config) -> Result<WriteOutcome> {
    let block = render(record, config);
    if block == record.raw {
        return Ok(WriteOutcome::Unchanged);
    }

    let path = record.file_path();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let updated = replace_block(&content, &record.raw, &block).ok_or_else(|| {
        PipelineError::BlockNotFound {
            file: path.to_path_buf(),
        }
    })?;
    fs::write(path, updated)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(WriteOutcome::Rewritten)
}
