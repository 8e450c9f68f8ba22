use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::categories::models::Category;
use crate::features::subcategories::models::Subcategory;
use crate::shared::serde_helpers::{lenient_bool, lenient_bool_opt};
use crate::shared::types::EntityStatus;
use crate::shared::validation::{validate_not_blank, SLUG_REGEX};

/// Request DTO for creating a category
///
/// `slug` is derived from `name` when omitted. With multipart requests the
/// `icon` field may be an image file.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(custom(function = validate_not_blank), length(max = 100))]
    pub name: String,

    #[validate(regex(
        path = *SLUG_REGEX,
        message = "must be lowercase letters, digits and single hyphens"
    ))]
    pub slug: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub icon: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_featured: bool,

    #[serde(default)]
    pub status: EntityStatus,
}

/// Request DTO for updating a category, only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(custom(function = validate_not_blank), length(max = 100))]
    pub name: Option<String>,

    #[validate(regex(
        path = *SLUG_REGEX,
        message = "must be lowercase letters, digits and single hyphens"
    ))]
    pub slug: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub icon: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool_opt")]
    pub is_featured: Option<bool>,

    pub status: Option<EntityStatus>,
}

/// Admin list filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListQuery {
    pub status: Option<EntityStatus>,
    #[serde(default, deserialize_with = "lenient_bool_opt")]
    pub is_featured: Option<bool>,
}

/// Category with its subcategories nested, as served publicly
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTreeDto {
    #[serde(flatten)]
    pub category: Category,
    pub subcategories: Vec<Subcategory>,
}

impl CategoryTreeDto {
    /// Attach subcategories to their categories, keeping both input orders.
    /// Subcategories of categories not in `categories` are dropped.
    pub fn build_tree(
        categories: Vec<Category>,
        subcategories: Vec<Subcategory>,
    ) -> Vec<CategoryTreeDto> {
        categories
            .into_iter()
            .map(|category| {
                let subcategories = subcategories
                    .iter()
                    .filter(|s| s.category_id == category.id)
                    .cloned()
                    .collect();
                CategoryTreeDto {
                    category,
                    subcategories,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            icon: None,
            is_featured: false,
            status: EntityStatus::Active,
            order_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn subcategory(name: &str, category_id: Uuid) -> Subcategory {
        Subcategory {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            category_id,
            image: None,
            status: EntityStatus::Active,
            order_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_build_tree_groups_and_drops_orphans() {
        let fashion = category("Fashion");
        let home = category("Home");
        let subs = vec![
            subcategory("Shirts", fashion.id),
            subcategory("Lamps", home.id),
            subcategory("Orphan", Uuid::new_v4()),
            subcategory("Shoes", fashion.id),
        ];

        let tree = CategoryTreeDto::build_tree(vec![fashion, home], subs);
        let names: Vec<Vec<&str>> = tree
            .iter()
            .map(|node| node.subcategories.iter().map(|s| s.name.as_str()).collect())
            .collect();
        assert_eq!(names, vec![vec!["Shirts", "Shoes"], vec!["Lamps"]]);
    }

    #[test]
    fn test_tree_node_serializes_flat() {
        let tree = CategoryTreeDto::build_tree(vec![category("Books")], vec![]);
        let value = serde_json::to_value(&tree[0]).unwrap();
        assert_eq!(value["name"], "Books");
        assert_eq!(value["isFeatured"], false);
        assert_eq!(value["subcategories"], json!([]));
    }

    #[test]
    fn test_is_featured_accepts_form_text() {
        let dto: CreateCategoryDto =
            serde_json::from_value(json!({"name": "Toys", "isFeatured": "true"})).unwrap();
        assert!(dto.is_featured);
        assert!(dto.validate().is_ok());
    }
}
