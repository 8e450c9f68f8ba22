use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::types::EntityStatus;
use crate::shared::validation::{validate_not_blank, HEX_COLOR_REGEX};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateColorDto {
    #[validate(custom(function = validate_not_blank), length(max = 50))]
    pub name: String,

    #[validate(regex(path = *HEX_COLOR_REGEX, message = "must be a hex color like #1A2B3C"))]
    pub color_code: String,

    #[serde(default)]
    pub status: EntityStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColorDto {
    #[validate(custom(function = validate_not_blank), length(max = 50))]
    pub name: Option<String>,

    #[validate(regex(path = *HEX_COLOR_REGEX, message = "must be a hex color like #1A2B3C"))]
    pub color_code: Option<String>,

    pub status: Option<EntityStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_color_code_format() {
        let dto: CreateColorDto = serde_json::from_value(json!({
            "name": "Navy",
            "colorCode": "000080"
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("color_code"));

        let dto: UpdateColorDto = serde_json::from_value(json!({"colorCode": "#008"})).unwrap();
        assert!(dto.validate().is_ok());
    }
}
