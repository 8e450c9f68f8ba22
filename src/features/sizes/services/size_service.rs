use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sizes::dtos::{CreateSizeDto, UpdateSizeDto};
use crate::features::sizes::models::Size;
use crate::modules::cache::CacheStore;
use crate::modules::documents::{
    apply_reorder, next_order_count, validate_reorder_ids, ListQuery, Repository,
};
use crate::shared::constants::SIZE_CACHE_TTL;
use crate::shared::types::StatusQuery;

const PUBLIC_KEY: &str = "sizes:public";

/// Service for size operations
pub struct SizeService {
    repo: Arc<dyn Repository<Size>>,
    cache: CacheStore,
}

impl SizeService {
    pub fn new(repo: Arc<dyn Repository<Size>>, cache: CacheStore) -> Self {
        Self { repo, cache }
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("Size {} not found", id))
    }

    pub async fn create(&self, dto: CreateSizeDto) -> Result<Size> {
        let now = Utc::now();
        let size = Size {
            id: Uuid::new_v4(),
            name: dto.name.trim().to_string(),
            status: dto.status,
            order_count: next_order_count(self.repo.as_ref()).await?,
            created_at: now,
            updated_at: now,
        };

        let size = self.repo.insert(size).await?;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Size created: {} ({})", size.id, size.name);
        Ok(size)
    }

    pub async fn list(&self, filter: &StatusQuery) -> Result<Vec<Size>> {
        let mut query = ListQuery::new();
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }
        self.repo.find(&query).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Size> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateSizeDto) -> Result<Size> {
        let mut size = self.get(id).await?;

        if let Some(name) = dto.name {
            size.name = name.trim().to_string();
        }
        if let Some(status) = dto.status {
            size.status = status;
        }

        let size = self
            .repo
            .replace(size)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Size updated: {}", id);
        Ok(size)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(Self::not_found(id));
        }
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Size deleted: {}", id);
        Ok(())
    }

    pub async fn reorder(&self, ids: &[Uuid]) -> Result<()> {
        validate_reorder_ids(ids)?;

        let result = apply_reorder(self.repo.as_ref(), ids).await;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Sizes reordered: {} ids", ids.len());
        result
    }

    pub async fn list_public(&self) -> Result<Vec<Size>> {
        self.cache
            .remember(PUBLIC_KEY, SIZE_CACHE_TTL, || async move {
                self.repo.find(&ListQuery::new().active()).await
            })
            .await
    }
}
