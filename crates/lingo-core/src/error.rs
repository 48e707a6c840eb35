use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed request document: {0}")]
    Decode(serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
}
