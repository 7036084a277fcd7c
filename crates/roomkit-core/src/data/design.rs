use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PlacedFurniture, RoomDetails};

/// A named, durable snapshot of a room and its placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub room_id: String,
    pub user_id: String,
    #[serde(default)]
    pub furniture: Vec<PlacedFurniture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_details: Option<RoomDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Design {
    /// An empty, unsaved design.
    pub fn new(
        name: impl Into<String>,
        room_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            room_id: room_id.into(),
            user_id: user_id.into(),
            furniture: Vec::new(),
            room_details: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Number of placed items in the snapshot.
    pub fn item_count(&self) -> usize {
        self.furniture.len()
    }

    /// Sets `created_at` if missing and refreshes `updated_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.created_at.get_or_insert(now);
        self.updated_at = Some(now);
    }
}
