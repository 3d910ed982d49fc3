//! polydoc - multi-language documentation comments
//!
//! polydoc scans a source tree for XML documentation comments
//! (`/// <summary> ... /// </summary>`), detects the language of their
//! text, translates it into every configured language and rewrites each
//! block in place with one `<tag>` sub-block per language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, logging, report)
//! - `config`: Configuration file loading and validation
//! - `core`: Scan → Parse → Patch → Write pipeline
//! - `translate`: Translation service seam and the Google Cloud client

pub mod cli;
pub mod config;
pub mod core;
pub mod translate;
