//! Per-record state machine and batch iteration.
//!
//! Each record moves through download, decode, translate, encode, upload in
//! that order. Upload is the final transition, so a failure at any earlier
//! stage leaves no partial output in the response bucket.

use aws_lambda_events::event::s3::S3Event;
use tracing::{error, info};

use lingo_core::models::{TranslationRequest, TranslationResult};
use lingo_core::s3_keys;

use crate::backends::{ObjectStore, Translator};
use crate::error::PipelineError;

/// How the processor reacts to a record failure mid-batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Abort the invocation on the first failing record. Uploads already
    /// performed for earlier records remain durable.
    #[default]
    FailFast,
    /// Keep processing the remaining records, then fail the invocation with
    /// a batch summary if any record failed.
    ContinueOnError,
}

/// A successfully processed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSuccess {
    pub request_key: String,
    pub response_key: String,
}

/// The batch event processor. Holds the injected backends and bucket
/// configuration for the lifetime of the process.
pub struct Processor<S, T> {
    store: S,
    translator: T,
    request_bucket: String,
    response_bucket: String,
    policy: BatchPolicy,
}

impl<S: ObjectStore, T: Translator> Processor<S, T> {
    pub fn new(
        store: S,
        translator: T,
        request_bucket: impl Into<String>,
        response_bucket: impl Into<String>,
    ) -> Self {
        Self {
            store,
            translator,
            request_bucket: request_bucket.into(),
            response_bucket: response_bucket.into(),
            policy: BatchPolicy::default(),
        }
    }

    /// Override the batch failure policy.
    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Process every record of one S3 event notification, in order.
    ///
    /// A record without an object key is a decode failure of the event
    /// itself and falls under the same policy as any other record failure.
    pub async fn process_event(
        &self,
        event: &S3Event,
    ) -> Result<Vec<RecordSuccess>, PipelineError> {
        let total = event.records.len();
        info!(records = total, "processing event");

        let mut succeeded = Vec::new();
        let mut failed = 0usize;

        for record in &event.records {
            let key = record.s3.object.key.as_deref();
            let outcome = match key {
                Some(key) => self.process_record(key).await,
                None => Err(PipelineError::MissingObjectKey),
            };

            match outcome {
                Ok(success) => succeeded.push(success),
                Err(e) => {
                    error!(key = key.unwrap_or("<missing>"), error = %e, "record failed");
                    match self.policy {
                        BatchPolicy::FailFast => return Err(e),
                        BatchPolicy::ContinueOnError => failed += 1,
                    }
                }
            }
        }

        if failed > 0 {
            return Err(PipelineError::Batch { failed, total });
        }

        Ok(succeeded)
    }

    /// Drive one request object through the full pipeline.
    pub async fn process_record(&self, key: &str) -> Result<RecordSuccess, PipelineError> {
        let body = self.store.fetch(&self.request_bucket, key).await?;

        let request = TranslationRequest::from_json(&body)?;

        let translated = self
            .translator
            .translate(
                &request.text,
                &request.source_language,
                &request.target_language,
            )
            .await?;

        let result = TranslationResult::from_request(&request, translated);
        let encoded = result.to_json()?;

        let response_key = s3_keys::response_key(key);
        self.store
            .store(
                &self.response_bucket,
                &response_key,
                encoded,
                "application/json",
            )
            .await?;

        info!(
            response_key = %response_key,
            response_bucket = %self.response_bucket,
            "translation complete"
        );

        Ok(RecordSuccess {
            request_key: key.to_string(),
            response_key,
        })
    }
}
