//! Bucket/key object storage for the Lectern backend emulator.
//!
//! Objects live in memory and are addressed by `(bucket, key)`. Uploads
//! overwrite silently. Public URLs are composed from the configured base URL
//! without checking that the object exists, matching the hosted service.

mod key;
mod store;

pub use key::object_key;
pub use store::{BlobMetadata, BlobStore, UploadReceipt};

/// Bucket holding article cover images.
pub const ARTICLE_IMAGES_BUCKET: &str = "article-images";

/// Bucket holding downloadable book files.
pub const BOOKS_BUCKET: &str = "books";
