use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryListQuery, CategoryTreeDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::features::subcategories::models::Subcategory;
use crate::modules::cache::CacheStore;
use crate::modules::documents::{
    apply_reorder, next_order_count, validate_reorder_ids, ListQuery, Repository,
};
use crate::modules::storage::ImageStore;
use crate::shared::constants::CATEGORY_CACHE_TTL;
use crate::shared::slug::derive_slug;

/// Cached public category tree, shared with subcategory writes
pub const CATEGORY_PUBLIC_KEY: &str = "categories:public";

/// Service for category operations
pub struct CategoryService {
    repo: Arc<dyn Repository<Category>>,
    subcategories: Arc<dyn Repository<Subcategory>>,
    cache: CacheStore,
    images: Arc<ImageStore>,
}

impl CategoryService {
    pub fn new(
        repo: Arc<dyn Repository<Category>>,
        subcategories: Arc<dyn Repository<Subcategory>>,
        cache: CacheStore,
        images: Arc<ImageStore>,
    ) -> Self {
        Self {
            repo,
            subcategories,
            cache,
            images,
        }
    }

    pub fn images(&self) -> &Arc<ImageStore> {
        &self.images
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("Category {} not found", id))
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<Category> {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            slug: derive_slug(dto.slug.as_deref(), &dto.name, "category"),
            name: dto.name.trim().to_string(),
            icon: dto.icon,
            is_featured: dto.is_featured,
            status: dto.status,
            order_count: next_order_count(self.repo.as_ref()).await?,
            created_at: now,
            updated_at: now,
        };

        let category = self.repo.insert(category).await?;
        self.cache.invalidate(CATEGORY_PUBLIC_KEY).await?;

        info!("Category created: {} ({})", category.id, category.slug);
        Ok(category)
    }

    pub async fn list(&self, filter: &CategoryListQuery) -> Result<Vec<Category>> {
        let mut query = ListQuery::new();
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }
        if let Some(featured) = filter.is_featured {
            query = query.eq("isFeatured", featured.to_string());
        }
        self.repo.find(&query).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Category> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<Category> {
        let mut category = self.get(id).await?;
        let previous_icon = category.icon.clone();

        if let Some(icon) = dto.icon {
            category.icon = Some(icon);
        }
        if let Some(slug) = dto.slug {
            category.slug = derive_slug(Some(&slug), &category.name, "category");
        }
        if let Some(name) = dto.name {
            category.name = name.trim().to_string();
        }
        if let Some(is_featured) = dto.is_featured {
            category.is_featured = is_featured;
        }
        if let Some(status) = dto.status {
            category.status = status;
        }

        let category = self
            .repo
            .replace(category)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        self.images
            .replace(previous_icon.as_deref(), category.icon.as_deref())
            .await;
        self.cache.invalidate(CATEGORY_PUBLIC_KEY).await?;

        info!("Category updated: {}", id);
        Ok(category)
    }

    /// Delete the category and its icon. Subcategories are left in place.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let category = self.get(id).await?;

        if let Some(icon) = &category.icon {
            self.images.delete_by_url(icon).await?;
        }
        if !self.repo.delete(id).await? {
            return Err(Self::not_found(id));
        }
        self.cache.invalidate(CATEGORY_PUBLIC_KEY).await?;

        info!("Category deleted: {}", id);
        Ok(())
    }

    pub async fn reorder(&self, ids: &[Uuid]) -> Result<()> {
        validate_reorder_ids(ids)?;

        let result = apply_reorder(self.repo.as_ref(), ids).await;
        self.cache.invalidate(CATEGORY_PUBLIC_KEY).await?;

        info!("Categories reordered: {} ids", ids.len());
        result
    }

    /// Active categories with their active subcategories, cached
    pub async fn list_public(&self) -> Result<Vec<CategoryTreeDto>> {
        self.cache
            .remember(CATEGORY_PUBLIC_KEY, CATEGORY_CACHE_TTL, || async move {
                let active = ListQuery::new().active();
                let (categories, subcategories) = futures::try_join!(
                    self.repo.find(&active),
                    self.subcategories.find(&active),
                )?;
                Ok(CategoryTreeDto::build_tree(categories, subcategories))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::documents::memory::MemoryRepository;
    use crate::shared::test_helpers::TestContext;
    use crate::shared::types::EntityStatus;

    fn service(ctx: &TestContext) -> CategoryService {
        CategoryService::new(
            Arc::new(MemoryRepository::<Category>::new()),
            Arc::new(MemoryRepository::<Subcategory>::new()),
            ctx.cache.clone(),
            Arc::clone(&ctx.images),
        )
    }

    fn create_dto(name: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
            slug: None,
            icon: None,
            is_featured: false,
            status: EntityStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_slug_is_derived_and_unique() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        let category = service.create(create_dto("Home & Living")).await.unwrap();
        assert_eq!(category.slug, "home-living");

        assert!(matches!(
            service.create(create_dto("Home  Living")).await,
            Err(AppError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_list_filters_featured() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        let mut featured = create_dto("Electronics");
        featured.is_featured = true;
        let featured = service.create(featured).await.unwrap();
        service.create(create_dto("Books")).await.unwrap();

        let listed = service
            .list(&CategoryListQuery {
                status: None,
                is_featured: Some(true),
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, featured.id);
    }

    #[tokio::test]
    async fn test_public_tree_drops_inactive_categories() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        let shown = service.create(create_dto("Shown")).await.unwrap();
        let hidden = service.create(create_dto("Hidden")).await.unwrap();
        assert_eq!(service.list_public().await.unwrap().len(), 2);

        service
            .update(
                hidden.id,
                UpdateCategoryDto {
                    status: Some(EntityStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let tree = service.list_public().await.unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].category.id, shown.id);
    }
}
