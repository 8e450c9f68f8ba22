//! In-memory document collection used by tests.
//!
//! Mirrors the PostgreSQL repository: insertion order stands in for
//! `created_at`, filters compare the serialized field as text and unique
//! fields are checked on every write.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Document, ListQuery, Repository, SortBy};
use crate::core::error::{AppError, Result};

struct Entry<E> {
    seq: u64,
    doc: E,
}

struct State<E> {
    next_seq: u64,
    docs: HashMap<Uuid, Entry<E>>,
}

pub struct MemoryRepository<E> {
    state: Arc<RwLock<State<E>>>,
}

impl<E: Document> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                next_seq: 0,
                docs: HashMap::new(),
            })),
        }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.docs.len()
    }
}

impl<E: Document> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn field_text(value: &serde_json::Value, field: &str) -> Option<String> {
    match value.get(field)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn matches<E: Document>(doc: &E, query: &ListQuery) -> bool {
    if query.filters.is_empty() {
        return true;
    }
    let Ok(value) = serde_json::to_value(doc) else {
        return false;
    };
    query
        .filters
        .iter()
        .all(|(field, expected)| field_text(&value, field).as_deref() == Some(expected.as_str()))
}

fn check_unique<E: Document>(state: &State<E>, doc: &E) -> Result<()> {
    for (field, value) in doc.unique_fields() {
        let taken = state.docs.values().any(|entry| {
            entry.doc.id() != doc.id()
                && entry
                    .doc
                    .unique_fields()
                    .iter()
                    .any(|(f, v)| *f == field && *v == value)
        });
        if taken {
            return Err(AppError::Conflict(format!(
                "A record in {} with the same {} already exists",
                E::COLLECTION,
                field
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl<E: Document> Repository<E> for MemoryRepository<E> {
    async fn insert(&self, doc: E) -> Result<E> {
        let mut state = self.state.write().await;
        if state.docs.contains_key(&doc.id()) {
            return Err(AppError::Conflict(format!(
                "Duplicate id {} in {}",
                doc.id(),
                E::COLLECTION
            )));
        }
        check_unique(&state, &doc)?;

        let seq = state.next_seq;
        state.next_seq += 1;
        state.docs.insert(
            doc.id(),
            Entry {
                seq,
                doc: doc.clone(),
            },
        );
        Ok(doc)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>> {
        let state = self.state.read().await;
        Ok(state.docs.get(&id).map(|entry| entry.doc.clone()))
    }

    async fn find(&self, query: &ListQuery) -> Result<Vec<E>> {
        let state = self.state.read().await;
        let mut entries: Vec<&Entry<E>> = state
            .docs
            .values()
            .filter(|entry| matches(&entry.doc, query))
            .collect();

        match query.sort {
            SortBy::OrderCount => entries.sort_by_key(|entry| {
                (entry.doc.order_count().unwrap_or(0), entry.seq)
            }),
            SortBy::Newest => entries.sort_by(|a, b| b.seq.cmp(&a.seq)),
        }

        let offset = query.offset.unwrap_or(0).max(0) as usize;
        let limit = query.limit.map(|l| l.max(0) as usize).unwrap_or(usize::MAX);

        Ok(entries
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|entry| entry.doc.clone())
            .collect())
    }

    async fn count(&self, query: &ListQuery) -> Result<i64> {
        let state = self.state.read().await;
        Ok(state
            .docs
            .values()
            .filter(|entry| matches(&entry.doc, query))
            .count() as i64)
    }

    async fn replace(&self, mut doc: E) -> Result<Option<E>> {
        doc.touch(chrono::Utc::now());

        let mut state = self.state.write().await;
        if !state.docs.contains_key(&doc.id()) {
            return Ok(None);
        }
        check_unique(&state, &doc)?;

        if let Some(entry) = state.docs.get_mut(&doc.id()) {
            entry.doc = doc.clone();
        }
        Ok(Some(doc))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut state = self.state.write().await;
        Ok(state.docs.remove(&id).is_some())
    }

    async fn max_order_count(&self) -> Result<Option<i32>> {
        let state = self.state.read().await;
        Ok(state
            .docs
            .values()
            .filter_map(|entry| entry.doc.order_count())
            .max())
    }

    async fn set_order_count(&self, id: Uuid, order_count: i32) -> Result<bool> {
        let mut state = self.state.write().await;
        let Some(entry) = state.docs.get_mut(&id) else {
            return Ok(false);
        };

        // Round-trip through JSON so the write stays generic over E
        let mut value = serde_json::to_value(&entry.doc)
            .map_err(|e| AppError::Internal(format!("serialize {}: {}", E::COLLECTION, e)))?;
        value["orderCount"] = serde_json::json!(order_count);
        let mut doc: E = serde_json::from_value(value)
            .map_err(|e| AppError::Internal(format!("deserialize {}: {}", E::COLLECTION, e)))?;
        doc.touch(chrono::Utc::now());
        entry.doc = doc;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::documents::{apply_reorder, next_order_count};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Widget {
        id: Uuid,
        code: String,
        status: String,
        order_count: i32,
        updated_at: DateTime<Utc>,
    }

    impl Document for Widget {
        const COLLECTION: &'static str = "widgets";

        fn id(&self) -> Uuid {
            self.id
        }

        fn order_count(&self) -> Option<i32> {
            Some(self.order_count)
        }

        fn unique_fields(&self) -> Vec<(&'static str, String)> {
            vec![("code", self.code.clone())]
        }

        fn touch(&mut self, now: DateTime<Utc>) {
            self.updated_at = now;
        }
    }

    fn widget(code: &str, status: &str, order_count: i32) -> Widget {
        Widget {
            id: Uuid::new_v4(),
            code: code.to_string(),
            status: status.to_string(),
            order_count,
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_filters_and_sorts_by_order_count() {
        let repo = MemoryRepository::<Widget>::new();
        repo.insert(widget("b", "active", 2)).await.unwrap();
        repo.insert(widget("a", "active", 1)).await.unwrap();
        repo.insert(widget("c", "inactive", 0)).await.unwrap();

        let active = repo.find(&ListQuery::new().active()).await.unwrap();
        let codes: Vec<&str> = active.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "b"]);

        assert_eq!(repo.count(&ListQuery::new()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unique_fields_conflict() {
        let repo = MemoryRepository::<Widget>::new();
        repo.insert(widget("dup", "active", 0)).await.unwrap();

        let err = repo.insert(widget("dup", "active", 1)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_next_order_count() {
        let repo = MemoryRepository::<Widget>::new();
        assert_eq!(next_order_count(&repo).await.unwrap(), 0);

        repo.insert(widget("a", "active", 4)).await.unwrap();
        assert_eq!(next_order_count(&repo).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_apply_reorder_rewrites_positions() {
        let repo = MemoryRepository::<Widget>::new();
        let a = repo.insert(widget("a", "active", 0)).await.unwrap();
        let b = repo.insert(widget("b", "active", 1)).await.unwrap();
        let c = repo.insert(widget("c", "active", 2)).await.unwrap();

        apply_reorder(&repo, &[c.id, a.id, b.id]).await.unwrap();

        let codes: Vec<String> = repo
            .find(&ListQuery::new())
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.code)
            .collect();
        assert_eq!(codes, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_apply_reorder_reports_missing_ids_but_keeps_other_writes() {
        let repo = MemoryRepository::<Widget>::new();
        let a = repo.insert(widget("a", "active", 5)).await.unwrap();
        let ghost = Uuid::new_v4();

        let err = apply_reorder(&repo, &[ghost, a.id]).await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert!(msg.contains(&ghost.to_string())),
            other => panic!("unexpected error: {:?}", other),
        }

        let stored = repo.find_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(stored.order_count, 1);
    }

    #[tokio::test]
    async fn test_apply_reorder_rejects_duplicates_and_empty() {
        let repo = MemoryRepository::<Widget>::new();
        let id = Uuid::new_v4();

        assert!(matches!(
            apply_reorder(&repo, &[]).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            apply_reorder(&repo, &[id, id]).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_paging_and_newest_sort() {
        let repo = MemoryRepository::<Widget>::new();
        for code in ["a", "b", "c"] {
            repo.insert(widget(code, "active", 0)).await.unwrap();
        }

        let page = repo
            .find(&ListQuery::new().sort(SortBy::Newest).page(2, 0))
            .await
            .unwrap();
        let codes: Vec<&str> = page.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(codes, vec!["c", "b"]);
    }
}
