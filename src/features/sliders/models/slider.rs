use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::documents::Document;
use crate::shared::types::EntityStatus;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
    pub id: Uuid,
    /// Stable public identifier, unique across sliders
    pub slider_id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub status: EntityStatus,
    pub order_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Slider {
    const COLLECTION: &'static str = "sliders";

    fn id(&self) -> Uuid {
        self.id
    }

    fn order_count(&self) -> Option<i32> {
        Some(self.order_count)
    }

    fn unique_fields(&self) -> Vec<(&'static str, String)> {
        vec![("sliderId", self.slider_id.clone())]
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
