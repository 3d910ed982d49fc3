//! Comment block parsing.
//!
//! Strips the block decoration (`/// <summary>`, `/// </summary>`, `///`)
//! and pulls out one [`LanguageEntry`] per `<tag>...</tag>` sub-block found
//! for a configured language. A block holding only untagged text gets its
//! language detected through the [`Translator`].

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::config::{Config, Language};
use crate::core::error::PipelineError;
use crate::core::record::{CommentRecord, LanguageEntry};
use crate::translate::Translator;

/// Entries found in a block plus whatever text no language claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub languages: Vec<LanguageEntry>,
    pub leftover: String,
}

impl Extracted {
    /// True when the leftover must go through language detection.
    pub fn needs_detection(&self) -> bool {
        self.languages.is_empty() && !self.leftover.is_empty()
    }
}

/// A parsed record and whether its language had to be detected.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub record: CommentRecord,
    pub detected: bool,
}

pub struct CommentParser<'c> {
    config: &'c Config,
    patterns: Vec<(&'c Language, Regex)>,
}

impl<'c> CommentParser<'c> {
    pub fn new(config: &'c Config) -> Result<Self> {
        let patterns = config
            .languages
            .iter()
            .map(|lang| {
                let tag = regex::escape(&lang.tag);
                let re = Regex::new(&format!("(?s)<{tag}>.*</{tag}>"))
                    .with_context(|| format!("Invalid language tag: \"{}\"", lang.tag))?;
                Ok((lang, re))
            })
            .collect::<Result<_>>()?;
        Ok(Self { config, patterns })
    }

    /// Remove the block decoration, leaving plain text and language sub-tags.
    pub fn scrub(&self, raw: &str) -> String {
        raw.replace(&self.config.opening_marker(), "")
            .replace(&self.config.closing_line(), "")
            .replace(&self.config.closing_marker(), "")
            .replace(&self.config.comment_prefix, "")
            .replace('\r', "")
    }

    /// Extract tagged entries without touching the translation service.
    pub fn extract(&self, raw: &str) -> Extracted {
        let mut working = self.scrub(raw);
        let mut languages = Vec::new();

        for (lang, re) in &self.patterns {
            let Some(found) = re.find(&working) else {
                continue;
            };
            let span = found.as_str();
            let open = format!("<{}>", lang.tag);
            let close = format!("</{}>", lang.tag);
            let inner = span.replace(&open, "").replace(&close, "");
            languages.push(LanguageEntry::new(
                &lang.language,
                &lang.tag,
                normalize_text(&inner),
            ));

            let span = span.to_string();
            working = working.replacen(&span, "", 1).trim().to_string();
        }

        Extracted {
            languages,
            leftover: working.trim().to_string(),
        }
    }

    /// Fill `record.languages` from its raw text.
    ///
    /// Untagged text is attributed to the language the translator detects,
    /// which must be one of the configured languages.
    pub fn parse<T: Translator + ?Sized>(
        &self,
        mut record: CommentRecord,
        translator: &T,
    ) -> Result<Parsed> {
        let extracted = self.extract(&record.raw);
        let detected = extracted.needs_detection();
        record.languages = extracted.languages;

        if detected {
            let text = normalize_text(&extracted.leftover);
            let tag = translator
                .detect_language(&text)
                .context("Language detection failed")?;
            let lang = self
                .config
                .language_for_tag(&tag)
                .ok_or_else(|| PipelineError::UnknownLanguage { tag: tag.clone() })?;
            debug!(file = %record.file.display(), tag = %tag, "detected untagged comment language");
            record
                .languages
                .push(LanguageEntry::new(&lang.language, &lang.tag, text));
        }

        Ok(Parsed { record, detected })
    }
}

/// Trim every line, drop blank ones and join the rest with single spaces.
pub fn normalize_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
