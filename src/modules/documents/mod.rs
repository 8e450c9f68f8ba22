//! Document collections
//!
//! Every entity module persists its records as JSON documents, one collection
//! (table) per entity type. The [`Repository`] trait is the only seam services
//! talk to; [`PgRepository`] stores documents as `JSONB` in PostgreSQL and the
//! test-only in-memory repository mirrors its semantics.
//!
//! Field names used in [`ListQuery`] filters are the serialized (camelCase)
//! names of the document.

mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::core::error::Result;

pub use postgres::PgRepository;

/// A record stored in a document collection
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Table holding this collection
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;

    /// Manual display position, `None` for unordered collections
    fn order_count(&self) -> Option<i32> {
        None
    }

    /// Fields backed by a unique index, as `(field, value)` pairs
    fn unique_fields(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Stamp the document as modified
    fn touch(&mut self, now: chrono::DateTime<chrono::Utc>);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// `orderCount` ascending, oldest first on ties
    #[default]
    OrderCount,
    /// Most recently created first
    Newest,
}

/// Filter, sort and paging options for collection reads
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Equality filters on top-level document fields, compared as text
    pub filters: Vec<(&'static str, String)>,
    pub sort: SortBy,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &'static str, value: impl Into<String>) -> Self {
        debug_assert!(
            field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "filter field must be a plain identifier"
        );
        self.filters.push((field, value.into()));
        self
    }

    /// Only documents whose `status` is `active`
    pub fn active(self) -> Self {
        self.eq("status", "active")
    }

    pub fn sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, limit: i64, offset: i64) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// Persistence operations shared by every entity module.
///
/// There is no transaction across calls: `max_order_count` followed by
/// `insert` can race with a concurrent create, and reorders are a series of
/// independent `set_order_count` writes.
#[async_trait]
pub trait Repository<E: Document>: Send + Sync {
    async fn insert(&self, doc: E) -> Result<E>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>>;

    async fn find(&self, query: &ListQuery) -> Result<Vec<E>>;

    /// Number of documents matching the filters (paging is ignored)
    async fn count(&self, query: &ListQuery) -> Result<i64>;

    /// Replace a stored document, returning `None` when it does not exist
    async fn replace(&self, doc: E) -> Result<Option<E>>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> Result<bool>;

    async fn max_order_count(&self) -> Result<Option<i32>>;

    /// Returns `false` when the document does not exist
    async fn set_order_count(&self, id: Uuid, order_count: i32) -> Result<bool>;

    async fn find_one(&self, query: &ListQuery) -> Result<Option<E>> {
        let mut query = query.clone();
        query.limit = Some(1);
        query.offset = None;
        Ok(self.find(&query).await?.into_iter().next())
    }
}

/// Next `orderCount` for a new document: one past the current maximum
pub async fn next_order_count<E: Document>(repo: &dyn Repository<E>) -> Result<i32> {
    Ok(repo.max_order_count().await?.map(|max| max + 1).unwrap_or(0))
}

/// Check a reorder request: non-empty and without duplicate ids
pub fn validate_reorder_ids(ids: &[Uuid]) -> Result<()> {
    use crate::core::error::AppError;
    use std::collections::HashSet;

    if ids.is_empty() {
        return Err(AppError::Validation(vec![
            "ids: at least one id is required".to_string(),
        ]));
    }

    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(AppError::Validation(vec![format!(
            "ids: {} appears more than once",
            dup
        )]));
    }

    Ok(())
}

/// Write `orderCount = index` for each id concurrently.
///
/// Every write is attempted; ids that matched no document are reported as a
/// not-found error afterwards. Successful writes are not rolled back.
pub async fn apply_reorder<E: Document>(repo: &dyn Repository<E>, ids: &[Uuid]) -> Result<()> {
    use crate::core::error::AppError;

    validate_reorder_ids(ids)?;

    let writes = ids
        .iter()
        .enumerate()
        .map(|(index, id)| repo.set_order_count(*id, index as i32));
    let results = futures::future::try_join_all(writes).await?;

    let missing: Vec<String> = ids
        .iter()
        .zip(results)
        .filter(|(_, found)| !found)
        .map(|(id, _)| id.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::NotFound(format!(
            "No {} found for ids: {}",
            E::COLLECTION,
            missing.join(", ")
        )));
    }

    Ok(())
}
