use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::documents::Document;
use crate::shared::types::EntityStatus;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: Uuid,
    pub name: String,
    /// `#RGB` or `#RRGGBB`
    pub color_code: String,
    pub status: EntityStatus,
    pub order_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Color {
    const COLLECTION: &'static str = "colors";

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
