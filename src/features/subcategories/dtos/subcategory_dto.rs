use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::shared::types::EntityStatus;
use crate::shared::validation::{validate_not_blank, SLUG_REGEX};

/// Request DTO for creating a subcategory under an existing category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubcategoryDto {
    #[validate(custom(function = validate_not_blank), length(max = 100))]
    pub name: String,

    #[validate(regex(
        path = *SLUG_REGEX,
        message = "must be lowercase letters, digits and single hyphens"
    ))]
    pub slug: Option<String>,

    pub category_id: Uuid,

    #[validate(url(message = "must be a valid URL"))]
    pub image: Option<String>,

    #[serde(default)]
    pub status: EntityStatus,
}

/// Request DTO for updating a subcategory, only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubcategoryDto {
    #[validate(custom(function = validate_not_blank), length(max = 100))]
    pub name: Option<String>,

    #[validate(regex(
        path = *SLUG_REGEX,
        message = "must be lowercase letters, digits and single hyphens"
    ))]
    pub slug: Option<String>,

    pub category_id: Option<Uuid>,

    #[validate(url(message = "must be a valid URL"))]
    pub image: Option<String>,

    pub status: Option<EntityStatus>,
}

/// Admin list filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryListQuery {
    pub status: Option<EntityStatus>,
    pub category_id: Option<Uuid>,
}

/// Public list filter
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PublicSubcategoryQuery {
    pub category_id: Option<Uuid>,
}
