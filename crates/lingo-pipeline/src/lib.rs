//! lingo-pipeline
//!
//! The batch event processor: drives each S3 event record through
//! download, decode, translate, encode, and upload, with an explicit batch
//! failure policy.

pub mod backends;
pub mod error;
pub mod processor;
