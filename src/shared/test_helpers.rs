use std::sync::Arc;

use axum_test::multipart::Part;
use axum_test::TestResponse;
use serde_json::Value;

use crate::modules::cache::{CacheStore, InMemoryCache};
use crate::modules::storage::memory::MemoryStorage;
use crate::modules::storage::ImageStore;

/// In-memory collaborators shared by service and router tests
pub struct TestContext {
    pub cache: CacheStore,
    pub storage: MemoryStorage,
    pub images: Arc<ImageStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let storage = MemoryStorage::new();
        Self {
            cache: CacheStore::new(Arc::new(InMemoryCache::new()), "test"),
            images: Arc::new(ImageStore::new(Arc::new(storage.clone()))),
            storage,
        }
    }
}

/// A small PNG file part for multipart requests
pub fn png_part(file_name: &str) -> Part {
    Part::bytes(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A])
        .file_name(file_name.to_string())
        .mime_type("image/png")
}

/// `data` member of an envelope response
pub fn data(response: &TestResponse) -> Value {
    response.json::<Value>()["data"].clone()
}

/// Ids of the entities in an envelope whose `data` is a list
pub fn data_ids(response: &TestResponse) -> Vec<String> {
    data(response)
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
