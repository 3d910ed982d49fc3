//! Comment block discovery.
//!
//! Walks a directory tree and extracts every `/// <summary> ... </summary>`
//! block together with the indentation of its opening line. Span discovery
//! within one file is done by [`CommentBlocks`], a lazy iterator over the
//! file content.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::core::record::CommentRecord;

/// A marker-delimited span found in a file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// Byte offset of the opening marker.
    pub offset: usize,
    pub indent: usize,
    pub raw: &'a str,
}

/// Iterator over the comment blocks of one file's content.
///
/// Each step finds the next opening marker, then the first closing marker
/// after it, and resumes after the closing marker. Cloning the iterator
/// restarts scanning from the same position.
#[derive(Debug, Clone)]
pub struct CommentBlocks<'a> {
    content: &'a str,
    cursor: usize,
    opening: String,
    closing: String,
    unterminated_at: Option<usize>,
}

impl<'a> CommentBlocks<'a> {
    pub fn new(content: &'a str, config: &Config) -> Self {
        Self {
            content,
            cursor: 0,
            opening: config.opening_marker(),
            closing: config.closing_marker(),
            unterminated_at: None,
        }
    }

    /// Offset of an opening marker that had no closing marker after it.
    ///
    /// Only meaningful once the iterator is exhausted.
    pub fn unterminated_at(&self) -> Option<usize> {
        self.unterminated_at
    }
}

impl<'a> Iterator for CommentBlocks<'a> {
    type Item = RawBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let content = self.content;
        if self.cursor >= content.len() {
            return None;
        }

        let start = self.cursor + content[self.cursor..].find(&self.opening)?;
        let body_start = start + self.opening.len();
        let Some(relative_end) = content[body_start..].find(&self.closing) else {
            self.unterminated_at = Some(start);
            self.cursor = content.len();
            return None;
        };
        let end = body_start + relative_end + self.closing.len();

        let line_start = content[..start].rfind('\n').map_or(0, |i| i + 1);
        let indent = content[line_start..start].chars().count();

        self.cursor = end;
        Some(RawBlock {
            offset: start,
            indent,
            raw: &content[start..end],
        })
    }
}

/// Result of scanning a directory tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub records: Vec<CommentRecord>,
    /// Files that were read and searched for markers.
    pub files_scanned: usize,
    /// Files that contained at least one comment block.
    pub files_with_comments: usize,
    /// Entries that could not be accessed or were not valid UTF-8.
    pub skipped_count: usize,
}

/// Extract comment records from one file's content.
pub fn scan_content(file: &Path, content: &str, config: &Config) -> Vec<CommentRecord> {
    let mut blocks = CommentBlocks::new(content, config);
    let records: Vec<CommentRecord> = blocks
        .by_ref()
        .map(|block| {
            let line = line_of(content, block.offset);
            CommentRecord::new(file, block.indent, block.raw).at_line(line)
        })
        .collect();

    if let Some(offset) = blocks.unterminated_at() {
        warn!(
            file = %file.display(),
            line = line_of(content, offset),
            "opening `{}` has no closing `{}`; ignoring the rest of the file",
            config.opening_marker(),
            config.closing_marker()
        );
    }

    records
}

fn line_of(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

/// Walk `root` and collect every comment block in every file below it.
///
/// Files are visited in path order so that records come out in a stable
/// order. Reading a file is an error; a file that is not UTF-8 is skipped.
pub fn scan_tree(root: &Path, config: &Config) -> Result<ScanResult> {
    let ignore_patterns: Vec<Pattern> = config
        .ignores
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p)))
        .collect::<Result<_>>()?;

    let opening = config.opening_marker();
    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!("cannot access path: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let path_str = path.to_string_lossy();
        if ignore_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        let Some(content) = read_text(path)? else {
            result.skipped_count += 1;
            debug!(file = %path.display(), "skipping non UTF-8 file");
            continue;
        };
        result.files_scanned += 1;

        if !content.contains(&opening) {
            continue;
        }

        let records = scan_content(path, &content, config);
        if !records.is_empty() {
            debug!(file = %path.display(), blocks = records.len(), "found comment blocks");
            result.files_with_comments += 1;
            result.records.extend(records);
        }
    }

    Ok(result)
}

/// Read a file as UTF-8 text, returning `None` when it is not valid UTF-8.
fn read_text(path: &Path) -> Result<Option<String>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(String::from_utf8(bytes).ok())
}
