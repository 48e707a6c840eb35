use aws_sdk_s3::Client;

/// Build an S3 client from the shared AWS configuration.
///
/// The configuration is loaded once at process start and reused by every
/// service client in the process.
pub fn build_client(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}
