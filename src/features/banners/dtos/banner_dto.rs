use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::banners::models::BannerPosition;
use crate::shared::types::EntityStatus;
use crate::shared::validation::validate_not_blank;

/// Request DTO for creating a banner
///
/// With multipart requests `bannerImage` is the file part; its uploaded URL
/// takes the place of the field.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBannerDto {
    #[validate(custom(function = validate_not_blank), length(max = 200))]
    pub banner_title: String,

    #[validate(length(max = 300))]
    pub banner_subtitle: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub banner_image: String,

    #[validate(url(message = "must be a valid URL"))]
    pub banner_link: Option<String>,

    pub position: BannerPosition,

    #[serde(default)]
    pub status: EntityStatus,
}

/// Request DTO for updating a banner, only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBannerDto {
    #[validate(custom(function = validate_not_blank), length(max = 200))]
    pub banner_title: Option<String>,

    #[validate(length(max = 300))]
    pub banner_subtitle: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub banner_image: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub banner_link: Option<String>,

    pub position: Option<BannerPosition>,

    pub status: Option<EntityStatus>,
}

/// Admin list filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BannerListQuery {
    pub status: Option<EntityStatus>,
    pub position: Option<BannerPosition>,
}

/// Public list filter; all positions when omitted
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PublicBannerQuery {
    pub position: Option<BannerPosition>,
}
