use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::documents::Document;
use crate::shared::types::EntityStatus;

/// Page slot a banner is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BannerPosition {
    TopHomepage,
    MiddleHomepage,
    BottomHomepage,
    CategoryPage,
    ProductPage,
}

impl BannerPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerPosition::TopHomepage => "top-homepage",
            BannerPosition::MiddleHomepage => "middle-homepage",
            BannerPosition::BottomHomepage => "bottom-homepage",
            BannerPosition::CategoryPage => "category-page",
            BannerPosition::ProductPage => "product-page",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: Uuid,
    pub banner_title: String,
    pub banner_subtitle: Option<String>,
    pub banner_image: String,
    pub banner_link: Option<String>,
    pub position: BannerPosition,
    pub status: EntityStatus,
    pub order_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Banner {
    const COLLECTION: &'static str = "banners";

    fn id(&self) -> Uuid {
        self.id
    }

    fn order_count(&self) -> Option<i32> {
        Some(self.order_count)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wire_names_match_as_str() {
        for position in [
            BannerPosition::TopHomepage,
            BannerPosition::MiddleHomepage,
            BannerPosition::BottomHomepage,
            BannerPosition::CategoryPage,
            BannerPosition::ProductPage,
        ] {
            assert_eq!(
                serde_json::to_value(position).unwrap(),
                serde_json::json!(position.as_str())
            );
        }
    }
}
