use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sliders::dtos::{CreateSliderDto, UpdateSliderDto};
use crate::features::sliders::models::Slider;
use crate::modules::cache::CacheStore;
use crate::modules::documents::{
    apply_reorder, next_order_count, validate_reorder_ids, ListQuery, Repository,
};
use crate::modules::storage::ImageStore;
use crate::shared::constants::SLIDER_CACHE_TTL;
use crate::shared::slug::derive_slug;
use crate::shared::types::StatusQuery;

const PUBLIC_KEY: &str = "sliders:public";

/// Service for slider operations
pub struct SliderService {
    repo: Arc<dyn Repository<Slider>>,
    cache: CacheStore,
    images: Arc<ImageStore>,
}

impl SliderService {
    pub fn new(
        repo: Arc<dyn Repository<Slider>>,
        cache: CacheStore,
        images: Arc<ImageStore>,
    ) -> Self {
        Self {
            repo,
            cache,
            images,
        }
    }

    pub fn images(&self) -> &Arc<ImageStore> {
        &self.images
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("Slider {} not found", id))
    }

    pub async fn create(&self, dto: CreateSliderDto) -> Result<Slider> {
        let now = Utc::now();
        let slider = Slider {
            id: Uuid::new_v4(),
            slider_id: derive_slug(dto.slider_id.as_deref(), &dto.title, "slider"),
            title: dto.title.trim().to_string(),
            subtitle: dto.subtitle,
            image: dto.image,
            button_text: dto.button_text,
            button_link: dto.button_link,
            status: dto.status,
            order_count: next_order_count(self.repo.as_ref()).await?,
            created_at: now,
            updated_at: now,
        };

        let slider = self.repo.insert(slider).await?;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Slider created: {} ({})", slider.id, slider.slider_id);
        Ok(slider)
    }

    pub async fn list(&self, filter: &StatusQuery) -> Result<Vec<Slider>> {
        let mut query = ListQuery::new();
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }
        self.repo.find(&query).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Slider> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateSliderDto) -> Result<Slider> {
        let mut slider = self.get(id).await?;
        let previous_image = slider.image.clone();

        if let Some(image) = dto.image {
            slider.image = image;
        }
        // The identifier stays put when only the title changes
        if let Some(slider_id) = dto.slider_id {
            slider.slider_id = derive_slug(Some(&slider_id), &slider.title, "slider");
        }
        if let Some(title) = dto.title {
            slider.title = title.trim().to_string();
        }
        if let Some(subtitle) = dto.subtitle {
            slider.subtitle = Some(subtitle);
        }
        if let Some(button_text) = dto.button_text {
            slider.button_text = Some(button_text);
        }
        if let Some(button_link) = dto.button_link {
            slider.button_link = Some(button_link);
        }
        if let Some(status) = dto.status {
            slider.status = status;
        }

        let slider = self
            .repo
            .replace(slider)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        self.images
            .replace(Some(&previous_image), Some(&slider.image))
            .await;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Slider updated: {}", id);
        Ok(slider)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let slider = self.get(id).await?;

        self.images.delete_by_url(&slider.image).await?;
        if !self.repo.delete(id).await? {
            return Err(Self::not_found(id));
        }
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Slider deleted: {}", id);
        Ok(())
    }

    pub async fn reorder(&self, ids: &[Uuid]) -> Result<()> {
        validate_reorder_ids(ids)?;

        let result = apply_reorder(self.repo.as_ref(), ids).await;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Sliders reordered: {} ids", ids.len());
        result
    }

    pub async fn list_public(&self) -> Result<Vec<Slider>> {
        self.cache
            .remember(PUBLIC_KEY, SLIDER_CACHE_TTL, || async move {
                self.repo.find(&ListQuery::new().active()).await
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

    fn service(ctx: &TestContext) -> SliderService {
        SliderService::new(
            Arc::new(MemoryRepository::<Slider>::new()),
            ctx.cache.clone(),
            Arc::clone(&ctx.images),
        )
    }

    fn create_dto(title: &str) -> CreateSliderDto {
        CreateSliderDto {
            slider_id: None,
            title: title.to_string(),
            subtitle: None,
            image: "https://cdn.example.com/slide.png".to_string(),
            button_text: Some("Shop now".to_string()),
            button_link: None,
            status: EntityStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_slider_id_is_derived_and_unique() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        let slider = service.create(create_dto("Big Summer Sale")).await.unwrap();
        assert_eq!(slider.slider_id, "big-summer-sale");

        let duplicate = service.create(create_dto("Big summer sale!")).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_title_change_keeps_slider_id() {
        let ctx = TestContext::new();
        let service = service(&ctx);
        let slider = service.create(create_dto("Winter Deals")).await.unwrap();

        let updated = service
            .update(
                slider.id,
                UpdateSliderDto {
                    title: Some("Winter Mega Deals".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Winter Mega Deals");
        assert_eq!(updated.slider_id, "winter-deals");
        assert_eq!(updated.button_text.as_deref(), Some("Shop now"));
    }

    #[tokio::test]
    async fn test_public_list_reflects_new_sliders() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        service.create(create_dto("First")).await.unwrap();
        assert_eq!(service.list_public().await.unwrap().len(), 1);

        let mut hidden = create_dto("Hidden");
        hidden.status = EntityStatus::Inactive;
        service.create(hidden).await.unwrap();
        service.create(create_dto("Second")).await.unwrap();

        let titles: Vec<String> = service
            .list_public()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }
}
