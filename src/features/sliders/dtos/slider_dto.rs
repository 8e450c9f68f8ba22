use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::types::EntityStatus;
use crate::shared::validation::{validate_not_blank, SLUG_REGEX};

/// Request DTO for creating a slider
///
/// `sliderId` is derived from `title` when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSliderDto {
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "must be lowercase letters, digits and single hyphens"
    ))]
    pub slider_id: Option<String>,

    #[validate(custom(function = validate_not_blank), length(max = 200))]
    pub title: String,

    #[validate(length(max = 300))]
    pub subtitle: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub image: String,

    #[validate(length(max = 50))]
    pub button_text: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub button_link: Option<String>,

    #[serde(default)]
    pub status: EntityStatus,
}

/// Request DTO for updating a slider, only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSliderDto {
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "must be lowercase letters, digits and single hyphens"
    ))]
    pub slider_id: Option<String>,

    #[validate(custom(function = validate_not_blank), length(max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 300))]
    pub subtitle: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub image: Option<String>,

    #[validate(length(max = 50))]
    pub button_text: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub button_link: Option<String>,

    pub status: Option<EntityStatus>,
}
