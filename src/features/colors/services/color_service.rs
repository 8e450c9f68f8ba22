use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::colors::dtos::{CreateColorDto, UpdateColorDto};
use crate::features::colors::models::Color;
use crate::modules::cache::CacheStore;
use crate::modules::documents::{
    apply_reorder, next_order_count, validate_reorder_ids, ListQuery, Repository,
};
use crate::shared::constants::COLOR_CACHE_TTL;
use crate::shared::types::StatusQuery;

const PUBLIC_KEY: &str = "colors:public";

/// Service for color operations
pub struct ColorService {
    repo: Arc<dyn Repository<Color>>,
    cache: CacheStore,
}

impl ColorService {
    pub fn new(repo: Arc<dyn Repository<Color>>, cache: CacheStore) -> Self {
        Self { repo, cache }
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("Color {} not found", id))
    }

    pub async fn create(&self, dto: CreateColorDto) -> Result<Color> {
        let now = Utc::now();
        let color = Color {
            id: Uuid::new_v4(),
            name: dto.name.trim().to_string(),
            color_code: dto.color_code,
            status: dto.status,
            order_count: next_order_count(self.repo.as_ref()).await?,
            created_at: now,
            updated_at: now,
        };

        let color = self.repo.insert(color).await?;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Color created: {} ({})", color.id, color.color_code);
        Ok(color)
    }

    pub async fn list(&self, filter: &StatusQuery) -> Result<Vec<Color>> {
        let mut query = ListQuery::new();
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }
        self.repo.find(&query).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Color> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateColorDto) -> Result<Color> {
        let mut color = self.get(id).await?;

        if let Some(name) = dto.name {
            color.name = name.trim().to_string();
        }
        if let Some(color_code) = dto.color_code {
            color.color_code = color_code;
        }
        if let Some(status) = dto.status {
            color.status = status;
        }

        let color = self
            .repo
            .replace(color)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Color updated: {}", id);
        Ok(color)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(Self::not_found(id));
        }
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Color deleted: {}", id);
        Ok(())
    }

    pub async fn reorder(&self, ids: &[Uuid]) -> Result<()> {
        validate_reorder_ids(ids)?;

        let result = apply_reorder(self.repo.as_ref(), ids).await;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Colors reordered: {} ids", ids.len());
        result
    }

    pub async fn list_public(&self) -> Result<Vec<Color>> {
        self.cache
            .remember(PUBLIC_KEY, COLOR_CACHE_TTL, || async move {
                self.repo.find(&ListQuery::new().active()).await
            })
            .await
    }
}
