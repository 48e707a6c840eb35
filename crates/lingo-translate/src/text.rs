//! Text translation calls.
//!
//! The request text and language codes are passed to the service unmodified;
//! the "auto" source sentinel is forwarded verbatim so the service performs
//! its own language detection.

use tracing::debug;

use crate::error::TranslateError;

/// Translate `text` from `source_language` into `target_language`.
///
/// When the source language is "auto" the service detects it; the detected
/// code is logged but not returned — callers echo the requested code.
pub async fn translate_text(
    config: &aws_config::SdkConfig,
    text: &str,
    source_language: &str,
    target_language: &str,
) -> Result<String, TranslateError> {
    let client = aws_sdk_translate::Client::new(config);

    let resp = client
        .translate_text()
        .text(text)
        .source_language_code(source_language)
        .target_language_code(target_language)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_unsupported_language_pair_exception() {
                TranslateError::UnsupportedLanguagePair {
                    source_lang: source_language.to_string(),
                    target: target_language.to_string(),
                }
            } else if err.is_text_size_limit_exceeded_exception() {
                TranslateError::TextSizeExceeded(err.to_string())
            } else {
                TranslateError::Invocation(err.to_string())
            }
        })?;

    debug!(
        detected_source = resp.source_language_code(),
        target = resp.target_language_code(),
        "translation complete"
    );

    Ok(resp.translated_text().to_string())
}
