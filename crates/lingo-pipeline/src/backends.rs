//! Backend seams for the processor.
//!
//! The processor talks to storage and translation through these traits so it
//! can be exercised against in-memory fakes; the AWS implementations are the
//! only ones shipped.

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;

use lingo_storage::error::StorageError;
use lingo_storage::objects;
use lingo_translate::error::TranslateError;
use lingo_translate::text::translate_text;

/// Named download/upload of byte payloads against an object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;

    async fn store(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;
}

/// Translation of one text between a language pair.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslateError>;
}

/// S3-backed object store.
pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        objects::get_object(&self.client, bucket, key).await
    }

    async fn store(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        objects::put_object(&self.client, bucket, key, body, Some(content_type)).await?;
        Ok(())
    }
}

/// AWS Translate-backed translator.
pub struct AwsTranslator {
    config: aws_config::SdkConfig,
}

impl AwsTranslator {
    pub fn new(config: aws_config::SdkConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Translator for AwsTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        translate_text(&self.config, text, source_language, target_language).await
    }
}
