use std::path::{Path, PathBuf};

/// One language's text inside a comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub language: String,
    pub tag: String,
    /// Single line; internal newlines are collapsed to spaces.
    pub comment: String,
}

impl LanguageEntry {
    pub fn new(language: impl Into<String>, tag: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            tag: tag.into(),
            comment: comment.into(),
        }
    }
}

/// A comment block discovered in a file, carried through parse, patch and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub file: PathBuf,
    /// 1-based line of the opening marker.
    pub line: usize,
    /// Characters between the previous line break and the opening marker.
    pub indent: usize,
    /// Exact text of the block, from the opening marker through the closing marker.
    pub raw: String,
    pub languages: Vec<LanguageEntry>,
}

impl CommentRecord {
    pub fn new(file: impl Into<PathBuf>, indent: usize, raw: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: 1,
            indent,
            raw: raw.into(),
            languages: Vec::new(),
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.languages.iter().any(|entry| entry.tag == tag)
    }
}
