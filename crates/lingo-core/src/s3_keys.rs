//! S3 key conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! mapping between request objects and their translated counterparts.

/// Prefix stamped onto every response object key.
pub const RESPONSE_PREFIX: &str = "translated-";

/// Derive the response-bucket key for a request object key.
///
/// Prefix concatenation only, so distinct request keys always derive
/// distinct response keys.
pub fn response_key(request_key: &str) -> String {
    format!("{RESPONSE_PREFIX}{request_key}")
}
