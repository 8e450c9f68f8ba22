use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::promo_codes::models::DiscountType;
use crate::shared::serde_helpers::{
    lenient_datetime, lenient_datetime_opt, uppercase, uppercase_opt,
};
use crate::shared::types::EntityStatus;
use crate::shared::validation::{
    validate_non_negative_decimal, validate_not_blank, validate_positive_decimal,
    PROMO_CODE_REGEX,
};

/// Request DTO for creating a promo code
///
/// `code` is upper-cased before validation. Dates accept RFC 3339 or
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromoCodeDto {
    #[validate(custom(function = validate_not_blank), length(max = 200))]
    pub title: String,

    #[serde(deserialize_with = "uppercase")]
    #[validate(regex(
        path = *PROMO_CODE_REGEX,
        message = "must be 3-32 letters, digits, '-' or '_'"
    ))]
    pub code: String,

    pub discount_type: DiscountType,

    #[validate(custom(function = validate_positive_decimal))]
    #[schema(example = "10")]
    pub value: Decimal,

    #[serde(default)]
    #[validate(custom(function = validate_non_negative_decimal))]
    pub minimum_order_amount: Option<Decimal>,

    #[serde(default)]
    #[validate(custom(function = validate_positive_decimal))]
    pub maximum_discount: Option<Decimal>,

    #[serde(deserialize_with = "lenient_datetime")]
    pub start_date: DateTime<Utc>,

    #[serde(deserialize_with = "lenient_datetime")]
    pub end_date: DateTime<Utc>,

    #[validate(url(message = "must be a valid URL"))]
    pub icon: Option<String>,

    #[serde(default)]
    pub status: EntityStatus,
}

/// Request DTO for updating a promo code, only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromoCodeDto {
    #[validate(custom(function = validate_not_blank), length(max = 200))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "uppercase_opt")]
    #[validate(regex(
        path = *PROMO_CODE_REGEX,
        message = "must be 3-32 letters, digits, '-' or '_'"
    ))]
    pub code: Option<String>,

    pub discount_type: Option<DiscountType>,

    #[validate(custom(function = validate_positive_decimal))]
    pub value: Option<Decimal>,

    #[validate(custom(function = validate_non_negative_decimal))]
    pub minimum_order_amount: Option<Decimal>,

    #[validate(custom(function = validate_positive_decimal))]
    pub maximum_discount: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_datetime_opt")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient_datetime_opt")]
    pub end_date: Option<DateTime<Utc>>,

    #[validate(url(message = "must be a valid URL"))]
    pub icon: Option<String>,

    pub status: Option<EntityStatus>,
}

/// Admin list filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeListQuery {
    pub status: Option<EntityStatus>,
    pub discount_type: Option<DiscountType>,
}

/// Checkout request: which code, for how much
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPromoCodeDto {
    #[serde(deserialize_with = "uppercase")]
    #[validate(custom(function = validate_not_blank))]
    pub code: String,

    #[validate(custom(function = validate_positive_decimal))]
    #[schema(example = "1500.00")]
    pub order_amount: Decimal,
}

/// Result of applying a promo code to an order amount
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeDiscountDto {
    pub code: String,
    pub discount_type: DiscountType,
    pub order_amount: Decimal,
    pub discount: Decimal,
    pub payable_amount: Decimal,
}
