//! Request and response records for one translation cycle.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Source-language sentinel asking the translation service to detect the
/// language from the text itself.
pub const AUTO_SOURCE_LANGUAGE: &str = "auto";

/// Target language applied when a request does not name one.
pub const DEFAULT_TARGET_LANGUAGE: &str = "fr";

/// A decoded translation request. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

/// Wire shape of a request object. `text` and `original_text` are accepted
/// interchangeably; presence is validated after parsing so a missing text
/// field is reported as such rather than as a parse failure.
#[derive(Debug, Deserialize)]
struct RawRequest {
    text: Option<String>,
    original_text: Option<String>,
    source_language: Option<String>,
    target_language: Option<String>,
}

impl TranslationRequest {
    /// Decode a request object from raw JSON bytes, applying defaults for
    /// the optional language fields.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        let raw: RawRequest = serde_json::from_slice(bytes).map_err(CoreError::Decode)?;

        let text = raw
            .text
            .or(raw.original_text)
            .ok_or_else(|| CoreError::MissingField("text".to_string()))?;

        Ok(Self {
            source_language: raw
                .source_language
                .unwrap_or_else(|| AUTO_SOURCE_LANGUAGE.to_string()),
            target_language: raw
                .target_language
                .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string()),
            text,
        })
    }
}

/// The translated record written to the response bucket. All four fields are
/// always present in the encoded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub source_language: String,
    pub target_language: String,
    pub original_text: String,
    pub translated_text: String,
}

impl TranslationResult {
    /// Assemble the result record from the request it answers.
    ///
    /// The request's source language is echoed verbatim, including the
    /// "auto" sentinel when the service performed its own detection.
    pub fn from_request(request: &TranslationRequest, translated_text: String) -> Self {
        Self {
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            original_text: request.text.clone(),
            translated_text,
        }
    }

    /// Encode to the response object bytes. serde_json leaves non-ASCII
    /// characters unescaped, so the stored document stays readable UTF-8.
    pub fn to_json(&self) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec(self).map_err(CoreError::Serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_with_defaults_applied() {
        let request = TranslationRequest::from_json(br#"{"text": "Hello"}"#).unwrap();
        assert_eq!(request.source_language, "auto");
        assert_eq!(request.target_language, "fr");
        assert_eq!(request.text, "Hello");
    }

    #[test]
    fn decodes_explicit_language_fields() {
        let request = TranslationRequest::from_json(
            br#"{"text": "Hola", "source_language": "es", "target_language": "de"}"#,
        )
        .unwrap();
        assert_eq!(request.source_language, "es");
        assert_eq!(request.target_language, "de");
    }

    #[test]
    fn accepts_original_text_as_the_text_field() {
        let request =
            TranslationRequest::from_json(br#"{"original_text": "Bonjour"}"#).unwrap();
        assert_eq!(request.text, "Bonjour");
    }

    #[test]
    fn prefers_text_over_original_text() {
        let request =
            TranslationRequest::from_json(br#"{"text": "a", "original_text": "b"}"#).unwrap();
        assert_eq!(request.text, "a");
    }

    #[test]
    fn missing_text_names_the_field() {
        let err = TranslationRequest::from_json(br#"{"target_language": "es"}"#).unwrap_err();
        match err {
            CoreError::MissingField(field) => assert_eq!(field, "text"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn null_text_is_treated_as_missing() {
        let err = TranslationRequest::from_json(br#"{"text": null}"#).unwrap_err();
        assert!(matches!(err, CoreError::MissingField(_)));
    }

    #[test]
    fn malformed_json_reports_the_parse_position() {
        let err = TranslationRequest::from_json(b"{\"text\": ").unwrap_err();
        match err {
            CoreError::Decode(inner) => {
                assert!(inner.to_string().contains("line"), "got: {inner}");
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn result_round_trips_including_non_ascii() {
        let request = TranslationRequest::from_json(
            "{\"text\": \"こんにちは\", \"target_language\": \"fr\"}".as_bytes(),
        )
        .unwrap();
        let result = TranslationResult::from_request(&request, "bonjour, été".to_string());

        let encoded = result.to_json().unwrap();
        let text = std::str::from_utf8(&encoded).unwrap();
        assert!(text.contains("こんにちは"));
        assert!(text.contains("été"));
        assert!(!text.contains("\\u"), "non-ASCII must not be escaped: {text}");

        let decoded: TranslationResult = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn result_always_carries_all_four_fields() {
        let result = TranslationResult {
            source_language: "auto".to_string(),
            target_language: "fr".to_string(),
            original_text: String::new(),
            translated_text: String::new(),
        };
        let encoded = result.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
        for field in [
            "source_language",
            "target_language",
            "original_text",
            "translated_text",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
