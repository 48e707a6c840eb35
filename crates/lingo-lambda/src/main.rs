//! Lambda entrypoint for the translation pipeline.
//!
//! Triggered by S3 object-created notifications on the request bucket. Each
//! invocation processes the event's records in order; a failure is logged
//! and returned to the platform so the invocation is marked failed and its
//! re-delivery semantics apply.

use std::env;

use aws_config::BehaviorVersion;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{LambdaEvent, service_fn};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lingo_pipeline::backends::{AwsTranslator, S3ObjectStore};
use lingo_pipeline::processor::Processor;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let request_bucket = env::var("REQUEST_BUCKET")
        .map_err(|_| eyre::eyre!("REQUEST_BUCKET environment variable must be set"))?;
    let response_bucket = env::var("RESPONSE_BUCKET")
        .map_err(|_| eyre::eyre!("RESPONSE_BUCKET environment variable must be set"))?;

    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let s3 = lingo_storage::client::build_client(&config);

    let processor = Processor::new(
        S3ObjectStore::new(s3),
        AwsTranslator::new(config),
        request_bucket,
        response_bucket,
    );

    let processor_ref = &processor;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| async move {
        handler(processor_ref, event).await
    }))
    .await
    .map_err(|e| eyre::eyre!(e))
}

async fn handler(
    processor: &Processor<S3ObjectStore, AwsTranslator>,
    event: LambdaEvent<S3Event>,
) -> Result<(), lambda_runtime::Error> {
    let request_id = event.context.request_id.clone();

    match processor.process_event(&event.payload).await {
        Ok(succeeded) => {
            info!(
                request_id = %request_id,
                records = succeeded.len(),
                "invocation complete"
            );
            Ok(())
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "invocation failed");
            Err(e.into())
        }
    }
}
