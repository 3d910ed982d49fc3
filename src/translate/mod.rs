//! The translation service seam.
//!
//! Comment processing only needs two capabilities from a translation
//! service: guessing the language of a piece of text, and translating text
//! into a target language. [`Translator`] captures both so the pipeline can
//! run against Google Cloud Translation in production and a fake in tests.

mod google;

pub use google::{DEFAULT_API_URL, GoogleTranslator, TranslateError};

use anyhow::Result;

pub trait Translator {
    /// Return the service tag of the language `text` is written in, e.g. `zh-CN`.
    fn detect_language(&self, text: &str) -> Result<String>;

    /// Translate `text` into the language identified by `target`.
    fn translate(&self, text: &str, target: &str) -> Result<String>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn detect_language(&self, text: &str) -> Result<String> {
        (**self).detect_language(text)
    }

    fn translate(&self, text: &str, target: &str) -> Result<String> {
        (**self).translate(text, target)
    }
}
