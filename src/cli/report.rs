//! Run summary formatting and printing.
//!
//! Kept apart from the pipeline so polydoc can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::{PendingBlock, PendingReason, RunSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the run summary to stdout.
pub fn print(summary: &RunSummary, root: &Path) {
    print_to(summary, root, &mut io::stdout().lock());
}

/// Print the run summary to a custom writer.
pub fn print_to<W: Write>(summary: &RunSummary, root: &Path, writer: &mut W) {
    if summary.blocks_found == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} - no documentation comments found",
                plural(summary.files_scanned, "file")
            )
            .green()
        );
    } else if summary.dry_run {
        print_plan(summary, root, writer);
    } else {
        print_applied(summary, writer);
    }

    if summary.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} could not be read as UTF-8 text and were skipped",
            "warning:".bold().yellow(),
            plural(summary.skipped_count, "file")
        );
    }
}

fn print_applied<W: Write>(summary: &RunSummary, writer: &mut W) {
    if summary.blocks_rewritten == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} already translated",
                plural(summary.blocks_found, "comment block")
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} in {}.",
        "Rewrote".green().bold(),
        plural(summary.blocks_rewritten, "comment block"),
        plural(summary.files_modified, "file")
    );
    let _ = writeln!(writer, "  - translations: {}", summary.translations);
    let _ = writeln!(writer, "  - detections: {}", summary.detections);
    if summary.blocks_unchanged > 0 {
        let _ = writeln!(writer, "  - unchanged: {}", summary.blocks_unchanged);
    }
}

fn print_plan<W: Write>(summary: &RunSummary, root: &Path, writer: &mut W) {
    if summary.pending.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} already translated",
                plural(summary.blocks_found, "comment block")
            )
            .green()
        );
        return;
    }

    for pending in &summary.pending {
        print_pending(pending, root, writer);
    }
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {} in {}.",
        "Would rewrite".yellow().bold(),
        plural(summary.pending.len(), "comment block"),
        plural(summary.files_modified, "file")
    );
    let _ = writeln!(
        writer,
        "Run without {} to translate and rewrite them.",
        "--dry-run".cyan()
    );
}

fn print_pending<W: Write>(pending: &PendingBlock, root: &Path, writer: &mut W) {
    let file = pending.file.strip_prefix(root).unwrap_or(pending.file.as_path());
    let detail = match &pending.reason {
        PendingReason::Untagged => "untagged text".to_string(),
        PendingReason::Missing(tags) => format!("missing {}", tags.join(", ")),
        PendingReason::Reformat => "not in canonical layout".to_string(),
    };
    let _ = writeln!(
        writer,
        "  {} {}:{}  {}",
        "-->".blue(),
        file.display(),
        pending.line,
        detail
    );
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
