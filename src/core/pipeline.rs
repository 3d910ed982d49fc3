//! Scan → Parse → Patch → Write over a whole tree.
//!
//! All records are collected from the pre-edit file contents first; each
//! write then re-reads the file so earlier rewrites in the same file are
//! preserved. The first error aborts the run.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Result;
use tracing::{debug, error};

use crate::config::Config;
use crate::core::{
    parser::CommentParser,
    patcher::{missing_languages, patch},
    record::CommentRecord,
    scanner::{ScanResult, scan_tree},
    writer::{WriteOutcome, render, write},
};
use crate::translate::Translator;

/// Why a block would be rewritten in dry-run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingReason {
    /// Plain text whose language still has to be detected.
    Untagged,
    /// Tagged, but these language tags are missing.
    Missing(Vec<String>),
    /// Every language is present but the block is not in canonical layout.
    Reformat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBlock {
    pub file: PathBuf,
    pub line: usize,
    pub reason: PendingReason,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub dry_run: bool,
    pub files_scanned: usize,
    pub files_with_comments: usize,
    pub skipped_count: usize,
    pub blocks_found: usize,
    pub blocks_rewritten: usize,
    pub blocks_unchanged: usize,
    /// Blocks with no text at all; left alone.
    pub blocks_empty: usize,
    pub detections: usize,
    pub translations: usize,
    pub files_modified: usize,
    /// Blocks that would change, only filled in dry-run mode.
    pub pending: Vec<PendingBlock>,
}

impl RunSummary {
    fn from_scan(scan: &ScanResult, dry_run: bool) -> Self {
        Self {
            dry_run,
            files_scanned: scan.files_scanned,
            files_with_comments: scan.files_with_comments,
            skipped_count: scan.skipped_count,
            blocks_found: scan.records.len(),
            ..Self::default()
        }
    }
}

/// Runs the comment pipeline with one configuration and translator.
pub struct Pipeline<'c, T: Translator> {
    config: &'c Config,
    parser: CommentParser<'c>,
    translator: T,
}

impl<'c, T: Translator> Pipeline<'c, T> {
    pub fn new(config: &'c Config, translator: T) -> Result<Self> {
        Ok(Self {
            config,
            parser: CommentParser::new(config)?,
            translator,
        })
    }

    /// Translate and rewrite every comment block under `root`.
    pub fn run(&self, root: &Path) -> Result<RunSummary> {
        let scan = scan_tree(root, self.config)?;
        let mut summary = RunSummary::from_scan(&scan, false);
        let mut files_modified: HashSet<PathBuf> = HashSet::new();

        for record in scan.records {
            let file = record.file.clone();
            let raw = record.raw.clone();
            let outcome = self.process(record, &mut summary).inspect_err(|err| {
                error!(
                    file = %file.display(),
                    raw = %raw,
                    "failed to process comment block: {:#}",
                    err
                );
            })?;

            match outcome {
                Some(WriteOutcome::Rewritten) => {
                    summary.blocks_rewritten += 1;
                    files_modified.insert(file);
                }
                Some(WriteOutcome::Unchanged) => summary.blocks_unchanged += 1,
                None => summary.blocks_empty += 1,
            }
        }

        summary.files_modified = files_modified.len();
        Ok(summary)
    }

    /// Report which blocks `run` would rewrite, without calling the
    /// translation service or writing anything.
    pub fn plan(&self, root: &Path) -> Result<RunSummary> {
        let scan = scan_tree(root, self.config)?;
        let mut summary = RunSummary::from_scan(&scan, true);
        let mut files: HashSet<&Path> = HashSet::new();

        for record in &scan.records {
            let extracted = self.parser.extract(&record.raw);
            let reason = if extracted.needs_detection() {
                PendingReason::Untagged
            } else if extracted.languages.is_empty() {
                summary.blocks_empty += 1;
                continue;
            } else {
                let mut parsed = record.clone();
                parsed.languages = extracted.languages;
                let missing: Vec<String> = missing_languages(&parsed, self.config)
                    .into_iter()
                    .map(|lang| lang.tag.clone())
                    .collect();
                if !missing.is_empty() {
                    PendingReason::Missing(missing)
                } else if render(&parsed, self.config) != parsed.raw {
                    PendingReason::Reformat
                } else {
                    summary.blocks_unchanged += 1;
                    continue;
                }
            };

            files.insert(record.file.as_path());
            summary.pending.push(PendingBlock {
                file: record.file.clone(),
                line: record.line,
                reason,
            });
        }

        summary.files_modified = files.len();
        Ok(summary)
    }

    /// Parse, patch and write one record. `None` means the block was empty.
    fn process(
        &self,
        record: CommentRecord,
        summary: &mut RunSummary,
    ) -> Result<Option<WriteOutcome>> {
        debug!(file = %record.file.display(), line = record.line, "processing comment block");

        let parsed = self.parser.parse(record, &self.translator)?;
        if parsed.detected {
            summary.detections += 1;
        }
        let mut record = parsed.record;
        if record.languages.is_empty() {
            return Ok(None);
        }

        summary.translations += patch(&mut record, self.config, &self.translator)?;
        write(&record, self.config).map(Some)
    }
}
