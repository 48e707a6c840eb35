use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("unsupported language pair: {source_lang} -> {target}")]
    UnsupportedLanguagePair { source_lang: String, target: String },

    #[error("text exceeds the service size limit: {0}")]
    TextSizeExceeded(String),

    #[error("translation invocation failed: {0}")]
    Invocation(String),
}
