use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Document, ListQuery, Repository, SortBy};
use crate::core::error::{AppError, Result};

/// PostgreSQL-backed collection: `<collection>(id UUID, doc JSONB, created_at, updated_at)`
pub struct PgRepository<E> {
    pool: PgPool,
    _marker: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }
}

/// Convert database error to more specific AppError with user-friendly messages
fn handle_db_error(e: sqlx::Error, collection: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            let field = db_err
                .constraint()
                .and_then(|c| c.strip_prefix(collection))
                .map(|c| c.trim_matches('_').trim_end_matches("_key").replace('_', " "))
                .unwrap_or_else(|| "unique field".to_string());
            return AppError::Conflict(format!(
                "A record in {} with the same {} already exists",
                collection, field
            ));
        }
    }

    tracing::error!("Database error on {}: {:?}", collection, e);
    AppError::Database(e)
}

/// Render the WHERE clause for equality filters, numbering binds from `first_bind`
fn where_clause(query: &ListQuery, first_bind: usize) -> String {
    if query.filters.is_empty() {
        return String::new();
    }

    let conditions: Vec<String> = query
        .filters
        .iter()
        .enumerate()
        .map(|(i, (field, _))| format!("doc ->> '{}' = ${}", field, first_bind + i))
        .collect();

    format!("WHERE {}", conditions.join(" AND "))
}

fn order_clause(sort: SortBy) -> &'static str {
    match sort {
        SortBy::OrderCount => {
            "ORDER BY COALESCE((doc ->> 'orderCount')::int, 0) ASC, created_at ASC"
        }
        SortBy::Newest => "ORDER BY created_at DESC",
    }
}

#[async_trait]
impl<E: Document + Unpin> Repository<E> for PgRepository<E> {
    async fn insert(&self, doc: E) -> Result<E> {
        let sql = format!(
            "INSERT INTO {} (id, doc, created_at, updated_at) VALUES ($1, $2, NOW(), NOW()) RETURNING doc",
            E::COLLECTION
        );

        let Json(stored) = sqlx::query_scalar::<_, Json<E>>(&sql)
            .bind(doc.id())
            .bind(Json(&doc))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, E::COLLECTION))?;

        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", E::COLLECTION);

        let row = sqlx::query_scalar::<_, Json<E>>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, E::COLLECTION))?;

        Ok(row.map(|Json(doc)| doc))
    }

    async fn find(&self, query: &ListQuery) -> Result<Vec<E>> {
        let mut sql = format!(
            "SELECT doc FROM {} {} {}",
            E::COLLECTION,
            where_clause(query, 1),
            order_clause(query.sort)
        );
        let paging_bind = query.filters.len() + 1;
        if query.limit.is_some() {
            sql.push_str(&format!(" LIMIT ${} OFFSET ${}", paging_bind, paging_bind + 1));
        }

        let mut q = sqlx::query_scalar::<_, Json<E>>(&sql);
        for (_, value) in &query.filters {
            q = q.bind(value.as_str());
        }
        if let Some(limit) = query.limit {
            q = q.bind(limit).bind(query.offset.unwrap_or(0));
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, E::COLLECTION))?;

        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn count(&self, query: &ListQuery) -> Result<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} {}",
            E::COLLECTION,
            where_clause(query, 1)
        );

        let mut q = sqlx::query_scalar::<_, i64>(&sql);
        for (_, value) in &query.filters {
            q = q.bind(value.as_str());
        }

        q.fetch_one(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, E::COLLECTION))
    }

    async fn replace(&self, mut doc: E) -> Result<Option<E>> {
        doc.touch(chrono::Utc::now());

        let sql = format!(
            "UPDATE {} SET doc = $2, updated_at = NOW() WHERE id = $1 RETURNING doc",
            E::COLLECTION
        );

        let row = sqlx::query_scalar::<_, Json<E>>(&sql)
            .bind(doc.id())
            .bind(Json(&doc))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, E::COLLECTION))?;

        Ok(row.map(|Json(doc)| doc))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::COLLECTION);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, E::COLLECTION))?;

        Ok(result.rows_affected() > 0)
    }

    async fn max_order_count(&self) -> Result<Option<i32>> {
        let sql = format!(
            "SELECT MAX((doc ->> 'orderCount')::int) FROM {}",
            E::COLLECTION
        );

        sqlx::query_scalar::<_, Option<i32>>(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, E::COLLECTION))
    }

    async fn set_order_count(&self, id: Uuid, order_count: i32) -> Result<bool> {
        let sql = format!(
            r#"
            UPDATE {}
            SET doc = jsonb_set(
                    jsonb_set(doc, '{{orderCount}}', to_jsonb($2::int)),
                    '{{updatedAt}}', to_jsonb(NOW())
                ),
                updated_at = NOW()
            WHERE id = $1
            "#,
            E::COLLECTION
        );

        let result = sqlx::query(&sql)
            .bind(id)
            .bind(order_count)
            .execute(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, E::COLLECTION))?;

        Ok(result.rows_affected() > 0)
    }
}
