//! Storage module for entity images
//!
//! Images uploaded with admin forms are written to an S3-compatible bucket
//! under a publicly readable prefix. Entities store only the resulting URL;
//! the same URL is used later to locate and delete the object.

mod images;
mod minio_client;
mod sigv4;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::core::error::AppError;

pub use images::{ImageStore, UploadedFile};
pub use minio_client::MinIOClient;

/// Object storage operations needed by the image store
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Write an object under `key`
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<(), AppError>;

    async fn delete(&self, key: &str) -> Result<(), AppError>;

    /// Full object key for a path inside the public prefix
    fn public_key(&self, path: &str) -> String;

    /// Publicly resolvable URL of an object
    fn public_url(&self, key: &str) -> String;

    /// Object key behind a URL produced by `public_url`, `None` for foreign URLs
    fn key_from_url(&self, url: &str) -> Option<String>;
}
