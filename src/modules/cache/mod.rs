//! Read-path cache
//!
//! Public listings are computed from the document store and kept in a
//! key-value cache with a TTL. Writers invalidate the affected keys (or key
//! patterns) so the next public read recomputes fresh data.

mod memory;
mod redis_cache;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::error::{AppError, Result};

pub use self::memory::InMemoryCache;
pub use self::redis_cache::RedisCache;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid key pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<CacheError> for AppError {
    fn from(e: CacheError) -> Self {
        AppError::ExternalServiceError(format!("Cache operation failed: {}", e))
    }
}

#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, CacheError>;
    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> std::result::Result<(), CacheError>;
    async fn delete(&self, key: &str) -> std::result::Result<(), CacheError>;
    /// Delete every key matching a glob pattern (`*` wildcard), returning the count
    async fn delete_pattern(&self, pattern: &str) -> std::result::Result<u64, CacheError>;
    fn backend_name(&self) -> &'static str;
}

/// Namespaced cache handle shared by the services
#[derive(Clone)]
pub struct CacheStore {
    backend: Arc<dyn CacheBackend>,
    prefix: String,
}

impl CacheStore {
    pub fn new(backend: Arc<dyn CacheBackend>, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}:{}", self.prefix, key)
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// Cache failures on this path are logged and the value is computed from
    /// the source of truth instead; errors from `compute` are returned as-is.
    pub async fn remember<T, F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let full_key = self.namespaced(key);

        match self.backend.get(&full_key).await {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    debug!("Cache hit: {}", full_key);
                    return Ok(value);
                }
                Err(e) => warn!("Discarding undecodable cache entry {}: {}", full_key, e),
            },
            Ok(None) => debug!("Cache miss: {}", full_key),
            Err(e) => warn!("Cache read failed for {}: {}", full_key, e),
        }

        let value = compute().await?;

        match serde_json::to_string(&value) {
            Ok(raw) => {
                if let Err(e) = self.backend.set(&full_key, &raw, ttl).await {
                    warn!("Cache write failed for {}: {}", full_key, e);
                }
            }
            Err(e) => warn!("Could not serialize cache value for {}: {}", full_key, e),
        }

        Ok(value)
    }

    /// Drop a single cached key
    pub async fn invalidate(&self, key: &str) -> Result<()> {
        let full_key = self.namespaced(key);
        self.backend.delete(&full_key).await?;
        debug!("Cache invalidated: {}", full_key);
        Ok(())
    }

    /// Drop every cached key matching `pattern` (glob, `*` wildcard)
    pub async fn invalidate_pattern(&self, pattern: &str) -> Result<()> {
        let full_pattern = self.namespaced(pattern);
        let removed = self.backend.delete_pattern(&full_pattern).await?;
        debug!("Cache invalidated: {} ({} keys)", full_pattern, removed);
        Ok(())
    }
}

/// Anchored regex for a Redis glob using the `*` and `?` wildcards
pub(crate) fn glob_regex(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    let mut expr = String::from("(?s)^");
    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            _ => expr.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    expr.push('$');
    Regex::new(&expr)
}
