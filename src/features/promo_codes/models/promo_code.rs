use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::modules::documents::Document;
use crate::shared::types::EntityStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `value` percent of the order amount
    Percentage,
    /// `value` off the order amount
    Flat,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Flat => "flat",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub id: Uuid,
    pub title: String,
    /// Upper-cased, unique across promo codes
    pub code: String,
    pub discount_type: DiscountType,
    pub value: Decimal,
    pub minimum_order_amount: Decimal,
    /// Cap on percentage discounts
    pub maximum_discount: Option<Decimal>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub icon: Option<String>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PromoCode {
    /// Cross-field rules that single-field validation cannot express
    pub fn check_terms(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.discount_type == DiscountType::Percentage && self.value > Decimal::ONE_HUNDRED {
            errors.push("value: percentage discount cannot exceed 100".to_string());
        }
        if self.end_date <= self.start_date {
            errors.push("end_date: must be after start_date".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }

    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.status == EntityStatus::Active && self.start_date <= now && now <= self.end_date
    }

    /// Reject the code for this order, with the reason a shopper would see
    pub fn ensure_applicable(&self, order_amount: Decimal, now: DateTime<Utc>) -> Result<()> {
        if self.status != EntityStatus::Active {
            return Err(AppError::BadRequest(format!(
                "Promo code {} is not active",
                self.code
            )));
        }
        if now < self.start_date {
            return Err(AppError::BadRequest(format!(
                "Promo code {} is not valid until {}",
                self.code,
                self.start_date.format("%Y-%m-%d %H:%M UTC")
            )));
        }
        if now > self.end_date {
            return Err(AppError::BadRequest(format!(
                "Promo code {} has expired",
                self.code
            )));
        }
        if order_amount < self.minimum_order_amount {
            return Err(AppError::BadRequest(format!(
                "Promo code {} requires a minimum order of {}",
                self.code, self.minimum_order_amount
            )));
        }
        Ok(())
    }

    /// Discount for an order, rounded to 2 decimal places
    ///
    /// Percentage discounts are capped by `maximumDiscount`; no discount ever
    /// exceeds the order amount.
    pub fn discount_for(&self, order_amount: Decimal) -> Decimal {
        let raw = match self.discount_type {
            DiscountType::Percentage => {
                let discount = order_amount * self.value / Decimal::ONE_HUNDRED;
                match self.maximum_discount {
                    Some(cap) => discount.min(cap),
                    None => discount,
                }
            }
            DiscountType::Flat => self.value,
        };

        raw.min(order_amount)
            .max(Decimal::ZERO)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl Document for PromoCode {
    const COLLECTION: &'static str = "promo_codes";

    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_fields(&self) -> Vec<(&'static str, String)> {
        vec![("code", self.code.clone())]
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn promo(discount_type: DiscountType, value: i64) -> PromoCode {
        let now = Utc::now();
        PromoCode {
            id: Uuid::new_v4(),
            title: "Eid".to_string(),
            code: "EID25".to_string(),
            discount_type,
            value: Decimal::from(value),
            minimum_order_amount: Decimal::from(500),
            maximum_discount: None,
            start_date: now - Duration::days(1),
            end_date: now + Duration::days(1),
            icon: None,
            status: EntityStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_percentage_discount_is_capped_and_rounded() {
        let mut code = promo(DiscountType::Percentage, 15);
        assert_eq!(
            code.discount_for(Decimal::new(99999, 2)),
            Decimal::new(15000, 2)
        );

        code.maximum_discount = Some(Decimal::from(100));
        assert_eq!(code.discount_for(Decimal::from(2000)), Decimal::from(100));
    }

    #[test]
    fn test_flat_discount_never_exceeds_order() {
        let code = promo(DiscountType::Flat, 300);
        assert_eq!(code.discount_for(Decimal::from(1000)), Decimal::from(300));
        assert_eq!(code.discount_for(Decimal::from(120)), Decimal::from(120));
    }

    #[test]
    fn test_applicability_window_and_minimum() {
        let now = Utc::now();
        let mut code = promo(DiscountType::Flat, 50);
        assert!(code.ensure_applicable(Decimal::from(500), now).is_ok());
        assert!(matches!(
            code.ensure_applicable(Decimal::from(499), now),
            Err(AppError::BadRequest(_))
        ));

        code.end_date = now - Duration::minutes(1);
        assert!(!code.is_live(now));
        assert!(code.ensure_applicable(Decimal::from(500), now).is_err());

        code.end_date = now + Duration::days(2);
        code.start_date = now + Duration::days(1);
        assert!(!code.is_live(now));

        code.start_date = now - Duration::days(1);
        code.status = EntityStatus::Inactive;
        assert!(!code.is_live(now));
        assert!(code.ensure_applicable(Decimal::from(500), now).is_err());
    }

    #[test]
    fn test_terms() {
        let mut code = promo(DiscountType::Percentage, 101);
        code.end_date = code.start_date;
        match code.check_terms() {
            Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }

        let code = promo(DiscountType::Flat, 101);
        assert!(code.check_terms().is_ok());
    }
}
