use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::types::EntityStatus;
use crate::shared::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSizeDto {
    #[validate(custom(function = validate_not_blank), length(max = 30))]
    pub name: String,

    #[serde(default)]
    pub status: EntityStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSizeDto {
    #[validate(custom(function = validate_not_blank), length(max = 30))]
    pub name: Option<String>,

    pub status: Option<EntityStatus>,
}
