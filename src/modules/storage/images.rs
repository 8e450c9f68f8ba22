use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ObjectStorage;
use crate::core::error::{AppError, Result};
use crate::core::extractor::FormPayload;
use crate::shared::constants::{ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE};

/// A file part received with a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        _ => "bin",
    }
}

/// Uploads entity images and removes the ones this service owns
pub struct ImageStore {
    storage: Arc<dyn ObjectStorage>,
}

impl ImageStore {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Validate and store an image under `public/<folder>/`, returning its URL
    pub async fn upload(&self, folder: &str, file: UploadedFile) -> Result<String> {
        if file.data.len() > MAX_IMAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "{}: image too large. Maximum size is {} MB",
                file.field_name,
                MAX_IMAGE_SIZE / 1024 / 1024
            )));
        }

        let content_type = file.content_type.to_lowercase();
        if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::BadRequest(format!(
                "{}: file type '{}' is not allowed. Allowed types: {}",
                file.field_name,
                file.content_type,
                ALLOWED_IMAGE_TYPES.join(", ")
            )));
        }

        let path = format!(
            "{}/{}.{}",
            folder,
            Uuid::now_v7(),
            extension_for(&content_type)
        );
        let key = self.storage.public_key(&path);
        self.storage.upload(&key, file.data, &content_type).await?;

        let url = self.storage.public_url(&key);
        info!("Uploaded image '{}' as {}", file.file_name, key);
        Ok(url)
    }

    /// Upload the file part named `field`, if any, and put its URL into the
    /// payload under the same name.
    pub async fn stage(
        self: &Arc<Self>,
        form: &mut FormPayload,
        field: &str,
        folder: &str,
    ) -> Result<StagedImage> {
        let url = match form.take_file(field) {
            Some(file) => {
                let url = self.upload(folder, file).await?;
                form.insert(field, url.clone());
                Some(url)
            }
            None => None,
        };

        Ok(StagedImage {
            url,
            images: Arc::clone(self),
        })
    }

    /// Delete the object behind `url`. Foreign URLs are left alone.
    pub async fn delete_by_url(&self, url: &str) -> Result<()> {
        match self.storage.key_from_url(url) {
            Some(key) => {
                self.storage.delete(&key).await?;
                info!("Deleted image {}", key);
            }
            None => debug!("Skipping delete of unmanaged image URL {}", url),
        }
        Ok(())
    }

    /// Delete an image that was uploaded but never persisted
    pub async fn discard(&self, url: &str) {
        if let Err(e) = self.delete_by_url(url).await {
            warn!("Failed to discard uploaded image {}: {}", url, e);
        }
    }

    /// Delete `old` after a successful write swapped it for a different image.
    /// The record already points at `new`, so a failed delete only leaves an
    /// orphaned object behind.
    pub async fn replace(&self, old: Option<&str>, new: Option<&str>) {
        match (old, new) {
            (Some(old), Some(new)) if old != new => {
                if let Err(e) = self.delete_by_url(old).await {
                    warn!("Failed to delete replaced image {}: {}", old, e);
                }
            }
            _ => {}
        }
    }
}

/// An image uploaded ahead of the write it belongs to
pub struct StagedImage {
    url: Option<String>,
    images: Arc<ImageStore>,
}

impl StagedImage {
    #[cfg(test)]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Pass `result` through, discarding the upload if it failed
    pub async fn settle<T>(self, result: Result<T>) -> Result<T> {
        if result.is_err() {
            if let Some(url) = &self.url {
                self.images.discard(url).await;
            }
        }
        result
    }
}
