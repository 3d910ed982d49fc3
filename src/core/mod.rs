//! Comment processing core.
//!
//! ```text
//! scanner   files → CommentRecord (raw block + indentation)
//!     ↓
//! parser    raw block → LanguageEntry per tagged language (or detected)
//!     ↓
//! patcher   missing languages → translated entries
//!     ↓
//! writer    canonical block → file
//! ```

mod error;
pub mod parser;
pub mod patcher;
mod pipeline;
pub mod record;
pub mod scanner;
pub mod writer;

pub use error::PipelineError;
pub use pipeline::{PendingBlock, PendingReason, Pipeline, RunSummary};
pub use record::{CommentRecord, LanguageEntry};
