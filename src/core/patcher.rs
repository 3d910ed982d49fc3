//! Fills in the languages a parsed comment is missing.

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{Config, Language};
use crate::core::parser::normalize_text;
use crate::core::record::{CommentRecord, LanguageEntry};
use crate::translate::Translator;

/// Configured languages that `record` has no entry for, in config order.
pub fn missing_languages<'c>(record: &CommentRecord, config: &'c Config) -> Vec<&'c Language> {
    config
        .languages
        .iter()
        .filter(|lang| !record.has_tag(&lang.tag))
        .collect()
}

/// Translate the record's first entry into every missing language.
///
/// Returns the number of translation calls made. A record without any
/// entry has nothing to translate from and is returned unchanged.
pub fn patch<T: Translator + ?Sized>(
    record: &mut CommentRecord,
    config: &Config,
    translator: &T,
) -> Result<usize> {
    let Some(source) = record.languages.first().map(|entry| entry.comment.clone()) else {
        return Ok(0);
    };

    let missing = missing_languages(record, config);
    let count = missing.len();
    for lang in missing {
        debug!(file = %record.file.display(), target = %lang.tag, "translating comment");
        let translated = translator
            .translate(&source, &lang.tag)
            .with_context(|| format!("Failed to translate comment into {}", lang.tag))?;
        record.languages.push(LanguageEntry::new(
            &lang.language,
            &lang.tag,
            normalize_text(&translated),
        ));
    }

    Ok(count)
}
