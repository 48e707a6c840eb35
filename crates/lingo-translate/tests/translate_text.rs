//! Integration tests for the Translate wrapper.
//!
//! These tests call the real AWS Translate API and require valid credentials
//! in the environment (e.g. `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`).
//!
//! Run with: `cargo test -p lingo-translate --test translate_text -- --ignored`

use lingo_translate::error::TranslateError;
use lingo_translate::text::translate_text;

async fn build_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await
}

#[tokio::test]
#[ignore]
async fn translates_with_auto_detection() {
    let config = build_config().await;

    let translated = translate_text(&config, "Hello, world", "auto", "fr")
        .await
        .expect("translate_text should succeed");

    assert!(!translated.is_empty());
    assert_ne!(translated, "Hello, world");
}

#[tokio::test]
#[ignore]
async fn preserves_non_ascii_output() {
    let config = build_config().await;

    let translated = translate_text(&config, "Good morning", "en", "ja")
        .await
        .expect("translate_text should succeed");

    assert!(translated.chars().any(|c| !c.is_ascii()));
}

#[tokio::test]
#[ignore]
async fn rejects_an_unknown_language_code() {
    let config = build_config().await;

    let err = translate_text(&config, "Hello", "en", "zz")
        .await
        .expect_err("unknown target language should fail");

    match err {
        TranslateError::UnsupportedLanguagePair { source_lang, target } => {
            assert_eq!(source_lang, "en");
            assert_eq!(target, "zz");
        }
        TranslateError::Invocation(_) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}
