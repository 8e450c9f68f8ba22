use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::banners::dtos::{BannerListQuery, CreateBannerDto, UpdateBannerDto};
use crate::features::banners::models::{Banner, BannerPosition};
use crate::modules::cache::CacheStore;
use crate::modules::documents::{
    apply_reorder, next_order_count, validate_reorder_ids, ListQuery, Repository,
};
use crate::modules::storage::ImageStore;
use crate::shared::constants::BANNER_CACHE_TTL;

const PUBLIC_KEY_PATTERN: &str = "banners:public:*";

fn public_key(position: Option<BannerPosition>) -> String {
    format!(
        "banners:public:{}",
        position.map(|p| p.as_str()).unwrap_or("all")
    )
}

/// Service for banner operations
pub struct BannerService {
    repo: Arc<dyn Repository<Banner>>,
    cache: CacheStore,
    images: Arc<ImageStore>,
}

impl BannerService {
    pub fn new(repo: Arc<dyn Repository<Banner>>, cache: CacheStore, images: Arc<ImageStore>) -> Self {
        Self {
            repo,
            cache,
            images,
        }
    }

    pub fn images(&self) -> &Arc<ImageStore> {
        &self.images
    }

    async fn invalidate(&self) -> Result<()> {
        self.cache.invalidate_pattern(PUBLIC_KEY_PATTERN).await
    }

    pub async fn create(&self, dto: CreateBannerDto) -> Result<Banner> {
        let now = Utc::now();
        let banner = Banner {
            id: Uuid::new_v4(),
            banner_title: dto.banner_title.trim().to_string(),
            banner_subtitle: dto.banner_subtitle,
            banner_image: dto.banner_image,
            banner_link: dto.banner_link,
            position: dto.position,
            status: dto.status,
            order_count: next_order_count(self.repo.as_ref()).await?,
            created_at: now,
            updated_at: now,
        };

        let banner = self.repo.insert(banner).await?;
        self.invalidate().await?;

        info!("Banner created: {} ({})", banner.id, banner.position.as_str());
        Ok(banner)
    }

    /// Admin listing, ordered by `orderCount`
    pub async fn list(&self, filter: &BannerListQuery) -> Result<Vec<Banner>> {
        let mut query = ListQuery::new();
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }
        if let Some(position) = filter.position {
            query = query.eq("position", position.as_str());
        }
        self.repo.find(&query).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Banner> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Banner {} not found", id)))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateBannerDto) -> Result<Banner> {
        let mut banner = self.get(id).await?;
        let previous_image = banner.banner_image.clone();

        if let Some(image) = dto.banner_image {
            banner.banner_image = image;
        }
        if let Some(title) = dto.banner_title {
            banner.banner_title = title.trim().to_string();
        }
        if let Some(subtitle) = dto.banner_subtitle {
            banner.banner_subtitle = Some(subtitle);
        }
        if let Some(link) = dto.banner_link {
            banner.banner_link = Some(link);
        }
        if let Some(position) = dto.position {
            banner.position = position;
        }
        if let Some(status) = dto.status {
            banner.status = status;
        }

        let banner = self
            .repo
            .replace(banner)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Banner {} not found", id)))?;
        self.images
            .replace(Some(&previous_image), Some(&banner.banner_image))
            .await;
        self.invalidate().await?;

        info!("Banner updated: {}", id);
        Ok(banner)
    }

    /// Delete the banner's image, then the banner
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let banner = self.get(id).await?;

        self.images.delete_by_url(&banner.banner_image).await?;
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Banner {} not found", id)));
        }
        self.invalidate().await?;

        info!("Banner deleted: {}", id);
        Ok(())
    }

    pub async fn reorder(&self, ids: &[Uuid]) -> Result<()> {
        validate_reorder_ids(ids)?;

        // Writes for existing ids land even when others are missing
        let result = apply_reorder(self.repo.as_ref(), ids).await;
        self.invalidate().await?;

        info!("Banners reordered: {} ids", ids.len());
        result
    }

    /// Active banners for one position (or every position), cached
    pub async fn list_public(&self, position: Option<BannerPosition>) -> Result<Vec<Banner>> {
        let key = public_key(position);
        self.cache
            .remember(&key, BANNER_CACHE_TTL, || async move {
                let mut query = ListQuery::new().active();
                if let Some(position) = position {
                    query = query.eq("position", position.as_str());
                }
                self.repo.find(&query).await
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

    fn service(ctx: &TestContext) -> BannerService {
        BannerService::new(
            Arc::new(MemoryRepository::<Banner>::new()),
            ctx.cache.clone(),
            Arc::clone(&ctx.images),
        )
    }

    fn create_dto(title: &str, position: BannerPosition) -> CreateBannerDto {
        CreateBannerDto {
            banner_title: title.to_string(),
            banner_subtitle: None,
            banner_image: format!("https://cdn.example.com/{}.png", title),
            banner_link: None,
            position,
            status: EntityStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_order_count() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        let first = service
            .create(create_dto("a", BannerPosition::TopHomepage))
            .await
            .unwrap();
        let second = service
            .create(create_dto("b", BannerPosition::TopHomepage))
            .await
            .unwrap();

        assert_eq!(first.order_count, 0);
        assert_eq!(second.order_count, 1);
    }

    #[tokio::test]
    async fn test_public_list_is_per_position_and_refreshed_after_update() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        let top = service
            .create(create_dto("top", BannerPosition::TopHomepage))
            .await
            .unwrap();
        service
            .create(create_dto("bottom", BannerPosition::BottomHomepage))
            .await
            .unwrap();

        let listed = service
            .list_public(Some(BannerPosition::TopHomepage))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, top.id);
        assert_eq!(service.list_public(None).await.unwrap().len(), 2);

        service
            .update(
                top.id,
                UpdateBannerDto {
                    status: Some(EntityStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(service
            .list_public(Some(BannerPosition::TopHomepage))
            .await
            .unwrap()
            .is_empty());
        assert_eq!(service.list_public(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_unspecified_fields() {
        let ctx = TestContext::new();
        let service = service(&ctx);
        let mut dto = create_dto("promo", BannerPosition::CategoryPage);
        dto.banner_subtitle = Some("Up to 50% off".to_string());
        let banner = service.create(dto).await.unwrap();

        let updated = service
            .update(
                banner.id,
                UpdateBannerDto {
                    banner_title: Some("Promo 2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.banner_title, "Promo 2");
        assert_eq!(updated.banner_subtitle.as_deref(), Some("Up to 50% off"));
        assert_eq!(updated.banner_image, banner.banner_image);
        assert_eq!(updated.position, BannerPosition::CategoryPage);
        assert_eq!(updated.order_count, banner.order_count);
    }

    #[tokio::test]
    async fn test_missing_banner_is_not_found() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        assert!(matches!(
            service.get(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
