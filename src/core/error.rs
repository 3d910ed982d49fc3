use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions raised while processing a comment block.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("detected language \"{tag}\" is not one of the configured languages")]
    UnknownLanguage { tag: String },

    #[error("comment block is no longer present in {}", file.display())]
    BlockNotFound { file: PathBuf },
}
