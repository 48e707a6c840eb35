use thiserror::Error;

use lingo_core::error::CoreError;
use lingo_storage::error::StorageError;
use lingo_translate::error::TranslateError;

/// Per-record and batch-level failures of the translation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("event record has no object key")]
    MissingObjectKey,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("request decode error: {0}")]
    Decode(#[from] CoreError),

    #[error("translation error: {0}")]
    Translate(#[from] TranslateError),

    #[error("{failed} of {total} records failed")]
    Batch { failed: usize, total: usize },
}
