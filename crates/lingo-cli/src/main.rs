//! Local runner for the translation pipeline.
//!
//! Drives a single request object through the same
//! download/decode/translate/encode/upload sequence the Lambda performs,
//! without an S3 trigger. Useful for smoke-testing a deployment from a
//! terminal.

use aws_config::BehaviorVersion;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lingo_pipeline::backends::{AwsTranslator, S3ObjectStore};
use lingo_pipeline::processor::Processor;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Translate a request object already uploaded to the request bucket"
)]
struct Cli {
    /// Object key of the request document in the request bucket.
    #[arg(long)]
    key: String,

    /// Bucket holding request documents.
    #[arg(long, env = "REQUEST_BUCKET")]
    request_bucket: String,

    /// Bucket receiving translated documents.
    #[arg(long, env = "RESPONSE_BUCKET")]
    response_bucket: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let s3 = lingo_storage::client::build_client(&config);

    let processor = Processor::new(
        S3ObjectStore::new(s3),
        AwsTranslator::new(config),
        cli.request_bucket,
        cli.response_bucket,
    );

    let success = processor.process_record(&cli.key).await?;

    println!(
        "Translated {} -> {}",
        success.request_key, success.response_key
    );

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
