use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::promo_codes::dtos::{
    ApplyPromoCodeDto, CreatePromoCodeDto, PromoCodeDiscountDto, PromoCodeListQuery,
    UpdatePromoCodeDto,
};
use crate::features::promo_codes::models::PromoCode;
use crate::modules::cache::CacheStore;
use crate::modules::documents::{ListQuery, Repository, SortBy};
use crate::modules::storage::ImageStore;
use crate::shared::constants::PROMO_CODE_CACHE_TTL;

const PUBLIC_KEY: &str = "promo-codes:public";

/// Service for promo code operations
pub struct PromoCodeService {
    repo: Arc<dyn Repository<PromoCode>>,
    cache: CacheStore,
    images: Arc<ImageStore>,
}

impl PromoCodeService {
    pub fn new(
        repo: Arc<dyn Repository<PromoCode>>,
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
        AppError::NotFound(format!("Promo code {} not found", id))
    }

    pub async fn create(&self, dto: CreatePromoCodeDto) -> Result<PromoCode> {
        let now = Utc::now();
        let promo = PromoCode {
            id: Uuid::new_v4(),
            title: dto.title.trim().to_string(),
            code: dto.code,
            discount_type: dto.discount_type,
            value: dto.value,
            minimum_order_amount: dto.minimum_order_amount.unwrap_or(Decimal::ZERO),
            maximum_discount: dto.maximum_discount,
            start_date: dto.start_date,
            end_date: dto.end_date,
            icon: dto.icon,
            status: dto.status,
            created_at: now,
            updated_at: now,
        };
        promo.check_terms()?;

        let promo = self.repo.insert(promo).await?;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Promo code created: {} ({})", promo.id, promo.code);
        Ok(promo)
    }

    pub async fn list(&self, filter: &PromoCodeListQuery) -> Result<Vec<PromoCode>> {
        let mut query = ListQuery::new().sort(SortBy::Newest);
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }
        if let Some(discount_type) = filter.discount_type {
            query = query.eq("discountType", discount_type.as_str());
        }
        self.repo.find(&query).await
    }

    pub async fn get(&self, id: Uuid) -> Result<PromoCode> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(&self, id: Uuid, dto: UpdatePromoCodeDto) -> Result<PromoCode> {
        let mut promo = self.get(id).await?;
        let previous_icon = promo.icon.clone();

        if let Some(title) = dto.title {
            promo.title = title.trim().to_string();
        }
        if let Some(code) = dto.code {
            promo.code = code;
        }
        if let Some(discount_type) = dto.discount_type {
            promo.discount_type = discount_type;
        }
        if let Some(value) = dto.value {
            promo.value = value;
        }
        if let Some(minimum) = dto.minimum_order_amount {
            promo.minimum_order_amount = minimum;
        }
        if let Some(maximum) = dto.maximum_discount {
            promo.maximum_discount = Some(maximum);
        }
        if let Some(start_date) = dto.start_date {
            promo.start_date = start_date;
        }
        if let Some(end_date) = dto.end_date {
            promo.end_date = end_date;
        }
        if let Some(status) = dto.status {
            promo.status = status;
        }
        promo.check_terms()?;

        if let Some(icon) = dto.icon {
            promo.icon = Some(icon);
        }

        let promo = self
            .repo
            .replace(promo)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        self.images
            .replace(previous_icon.as_deref(), promo.icon.as_deref())
            .await;
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Promo code updated: {}", id);
        Ok(promo)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let promo = self.get(id).await?;

        if let Some(icon) = &promo.icon {
            self.images.delete_by_url(icon).await?;
        }
        if !self.repo.delete(id).await? {
            return Err(Self::not_found(id));
        }
        self.cache.invalidate(PUBLIC_KEY).await?;

        info!("Promo code deleted: {} ({})", id, promo.code);
        Ok(())
    }

    /// Active codes whose date window contains now, soonest to expire first
    pub async fn list_public(&self) -> Result<Vec<PromoCode>> {
        self.cache
            .remember(PUBLIC_KEY, PROMO_CODE_CACHE_TTL, || async move {
                let now = Utc::now();
                let mut live: Vec<PromoCode> = self
                    .repo
                    .find(&ListQuery::new().active())
                    .await?
                    .into_iter()
                    .filter(|promo| promo.is_live(now))
                    .collect();
                live.sort_by_key(|promo| promo.end_date);
                Ok(live)
            })
            .await
    }

    /// Compute the discount a code gives on an order amount
    pub async fn apply(&self, dto: ApplyPromoCodeDto) -> Result<PromoCodeDiscountDto> {
        let promo = self
            .repo
            .find_one(&ListQuery::new().eq("code", dto.code.as_str()))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Promo code {} not found", dto.code)))?;

        promo.ensure_applicable(dto.order_amount, Utc::now())?;
        let discount = promo.discount_for(dto.order_amount);

        info!(
            "Promo code {} applied: {} off {}",
            promo.code, discount, dto.order_amount
        );
        Ok(PromoCodeDiscountDto {
            code: promo.code,
            discount_type: promo.discount_type,
            order_amount: dto.order_amount,
            discount,
            payable_amount: dto.order_amount - discount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::features::promo_codes::models::DiscountType;
    use crate::modules::documents::memory::MemoryRepository;
    use crate::shared::test_helpers::TestContext;
    use crate::shared::types::EntityStatus;

    fn service(ctx: &TestContext) -> PromoCodeService {
        PromoCodeService::new(
            Arc::new(MemoryRepository::<PromoCode>::new()),
            ctx.cache.clone(),
            Arc::clone(&ctx.images),
        )
    }

    fn create_dto(code: &str, days_from_now: i64) -> CreatePromoCodeDto {
        let start = Utc::now() + Duration::days(days_from_now);
        CreatePromoCodeDto {
            title: format!("{} offer", code),
            code: code.to_string(),
            discount_type: DiscountType::Percentage,
            value: Decimal::from(10),
            minimum_order_amount: None,
            maximum_discount: Some(Decimal::from(200)),
            start_date: start - Duration::days(1),
            end_date: start + Duration::days(7),
            icon: None,
            status: EntityStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_duplicate_code_conflicts() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        service.create(create_dto("EID25", 0)).await.unwrap();
        assert!(matches!(
            service.create(create_dto("EID25", 0)).await,
            Err(AppError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_update_rechecks_terms_against_stored_values() {
        let ctx = TestContext::new();
        let service = service(&ctx);
        let promo = service.create(create_dto("SPRING", 0)).await.unwrap();

        let result = service
            .update(
                promo.id,
                UpdatePromoCodeDto {
                    end_date: Some(promo.start_date - Duration::hours(1)),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = service
            .update(
                promo.id,
                UpdatePromoCodeDto {
                    value: Some(Decimal::from(150)),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let updated = service
            .update(
                promo.id,
                UpdatePromoCodeDto {
                    discount_type: Some(DiscountType::Flat),
                    value: Some(Decimal::from(150)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.value, Decimal::from(150));
        assert_eq!(updated.code, "SPRING");
    }

    #[tokio::test]
    async fn test_public_list_only_has_live_codes() {
        let ctx = TestContext::new();
        let service = service(&ctx);

        service.create(create_dto("NOW", 0)).await.unwrap();
        service.create(create_dto("LATER", 30)).await.unwrap();
        let mut paused = create_dto("PAUSED", 0);
        paused.status = EntityStatus::Inactive;
        service.create(paused).await.unwrap();

        let codes: Vec<String> = service
            .list_public()
            .await
            .unwrap()
            .into_iter()
            .map(|promo| promo.code)
            .collect();
        assert_eq!(codes, vec!["NOW"]);
    }

    #[tokio::test]
    async fn test_apply() {
        let ctx = TestContext::new();
        let service = service(&ctx);
        service.create(create_dto("SAVE10", 0)).await.unwrap();

        let applied = service
            .apply(ApplyPromoCodeDto {
                code: "SAVE10".to_string(),
                order_amount: Decimal::new(125050, 2),
            })
            .await
            .unwrap();
        assert_eq!(applied.discount, Decimal::new(12505, 2));
        assert_eq!(applied.payable_amount, Decimal::new(112545, 2));

        let capped = service
            .apply(ApplyPromoCodeDto {
                code: "SAVE10".to_string(),
                order_amount: Decimal::from(5000),
            })
            .await
            .unwrap();
        assert_eq!(capped.discount, Decimal::from(200));

        assert!(matches!(
            service
                .apply(ApplyPromoCodeDto {
                    code: "NOPE".to_string(),
                    order_amount: Decimal::from(100),
                })
                .await,
            Err(AppError::NotFound(_))
        ));
    }
}
