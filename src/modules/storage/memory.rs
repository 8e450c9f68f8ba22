//! In-memory object storage used by tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ObjectStorage;
use crate::core::error::AppError;

const BASE_URL: &str = "http://storage.test/media/";

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    objects: Arc<RwLock<HashMap<String, StoredObject>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.objects.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub async fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().await.get(key).cloned()
    }

    pub async fn contains_url(&self, url: &str) -> bool {
        match self.key_from_url(url) {
            Some(key) => self.objects.read().await.contains_key(&key),
            None => false,
        }
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<(), AppError> {
        self.objects.write().await.insert(
            key.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.objects.write().await.remove(key);
        Ok(())
    }

    fn public_key(&self, path: &str) -> String {
        format!("public/{}", path)
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}{}", BASE_URL, key)
    }

    fn key_from_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(BASE_URL)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }
}
