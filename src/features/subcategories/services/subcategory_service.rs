use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::{CategoryService, CATEGORY_PUBLIC_KEY};
use crate::features::subcategories::dtos::{
    CreateSubcategoryDto, SubcategoryListQuery, UpdateSubcategoryDto,
};
use crate::features::subcategories::models::Subcategory;
use crate::modules::cache::CacheStore;
use crate::modules::documents::{
    apply_reorder, next_order_count, validate_reorder_ids, ListQuery, Repository,
};
use crate::modules::storage::ImageStore;
use crate::shared::slug::derive_slug;

/// Service for subcategory operations
pub struct SubcategoryService {
    repo: Arc<dyn Repository<Subcategory>>,
    categories: Arc<CategoryService>,
    cache: CacheStore,
    images: Arc<ImageStore>,
}

impl SubcategoryService {
    pub fn new(
        repo: Arc<dyn Repository<Subcategory>>,
        categories: Arc<CategoryService>,
        cache: CacheStore,
        images: Arc<ImageStore>,
    ) -> Self {
        Self {
            repo,
            categories,
            cache,
            images,
        }
    }

    pub fn images(&self) -> &Arc<ImageStore> {
        &self.images
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("Subcategory {} not found", id))
    }

    async fn ensure_category_exists(&self, category_id: Uuid) -> Result<()> {
        self.categories.get(category_id).await.map(|_| ())
    }

    async fn invalidate(&self) -> Result<()> {
        self.cache.invalidate(CATEGORY_PUBLIC_KEY).await
    }

    pub async fn create(&self, dto: CreateSubcategoryDto) -> Result<Subcategory> {
        self.ensure_category_exists(dto.category_id).await?;

        let now = Utc::now();
        let subcategory = Subcategory {
            id: Uuid::new_v4(),
            slug: derive_slug(dto.slug.as_deref(), &dto.name, "subcategory"),
            name: dto.name.trim().to_string(),
            category_id: dto.category_id,
            image: dto.image,
            status: dto.status,
            order_count: next_order_count(self.repo.as_ref()).await?,
            created_at: now,
            updated_at: now,
        };

        let subcategory = self.repo.insert(subcategory).await?;
        self.invalidate().await?;

        info!(
            "Subcategory created: {} ({}) in category {}",
            subcategory.id, subcategory.slug, subcategory.category_id
        );
        Ok(subcategory)
    }

    pub async fn list(&self, filter: &SubcategoryListQuery) -> Result<Vec<Subcategory>> {
        let mut query = ListQuery::new();
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }
        if let Some(category_id) = filter.category_id {
            query = query.eq("categoryId", category_id.to_string());
        }
        self.repo.find(&query).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Subcategory> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateSubcategoryDto) -> Result<Subcategory> {
        let mut subcategory = self.get(id).await?;
        let previous_image = subcategory.image.clone();

        if let Some(category_id) = dto.category_id {
            self.ensure_category_exists(category_id).await?;
            subcategory.category_id = category_id;
        }
        if let Some(image) = dto.image {
            subcategory.image = Some(image);
        }
        if let Some(slug) = dto.slug {
            subcategory.slug = derive_slug(Some(&slug), &subcategory.name, "subcategory");
        }
        if let Some(name) = dto.name {
            subcategory.name = name.trim().to_string();
        }
        if let Some(status) = dto.status {
            subcategory.status = status;
        }

        let subcategory = self
            .repo
            .replace(subcategory)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        self.images
            .replace(previous_image.as_deref(), subcategory.image.as_deref())
            .await;
        self.invalidate().await?;

        info!("Subcategory updated: {}", id);
        Ok(subcategory)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let subcategory = self.get(id).await?;

        if let Some(image) = &subcategory.image {
            self.images.delete_by_url(image).await?;
        }
        if !self.repo.delete(id).await? {
            return Err(Self::not_found(id));
        }
        self.invalidate().await?;

        info!("Subcategory deleted: {}", id);
        Ok(())
    }

    pub async fn reorder(&self, ids: &[Uuid]) -> Result<()> {
        validate_reorder_ids(ids)?;

        let result = apply_reorder(self.repo.as_ref(), ids).await;
        self.invalidate().await?;

        info!("Subcategories reordered: {} ids", ids.len());
        result
    }

    /// Active subcategories of active categories, read from the cached
    /// category tree
    pub async fn list_public(&self, category_id: Option<Uuid>) -> Result<Vec<Subcategory>> {
        let tree = self.categories.list_public().await?;
        Ok(tree
            .into_iter()
            .filter(|node| category_id.map_or(true, |id| node.category.id == id))
            .flat_map(|node| node.subcategories)
            .collect())
    }
}
