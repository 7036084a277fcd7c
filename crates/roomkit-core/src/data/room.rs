use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::is_hex_color;
use crate::error::LayoutError;

/// A room the user is furnishing. Dimensions are in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub wall_color: String,
    pub floor_color: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Creates an unsaved room with the default colors.
    pub fn new(name: impl Into<String>, width: f64, length: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            length,
            height,
            ..Self::default()
        }
    }

    /// Checks that every dimension is positive and both colors are hex strings.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (dimension, value) in [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidRoomDimension {
                    dimension: dimension.to_string(),
                    value,
                });
            }
        }
        for color in [&self.wall_color, &self.floor_color] {
            if !is_hex_color(color) {
                return Err(LayoutError::InvalidColor {
                    value: color.clone(),
                });
            }
        }
        Ok(())
    }

    /// Snapshot of the geometry and colors, as stored inside a design.
    pub fn details(&self) -> RoomDetails {
        RoomDetails::from(self)
    }

    /// Applies a design's room snapshot, keeping identity and ownership.
    pub fn apply_details(&mut self, details: &RoomDetails) {
        self.width = details.width;
        self.length = details.length;
        self.height = details.height;
        self.wall_color = details.wall_color.clone();
        self.floor_color = details.floor_color.clone();
    }

    /// Center of the floor in room space, `(x, z)`.
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.length / 2.0)
    }
}

impl Default for Room {
    fn default() -> Self {
        Self {
            id: None,
            name: "New Room".to_string(),
            width: 5.0,
            length: 5.0,
            height: 3.0,
            wall_color: "#FFFFFF".to_string(),
            floor_color: "#D2B48C".to_string(),
            user_id: "user1".to_string(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Room geometry and colors captured when a design is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetails {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub wall_color: String,
    pub floor_color: String,
}

impl From<&Room> for RoomDetails {
    fn from(room: &Room) -> Self {
        Self {
            width: room.width,
            length: room.length,
            height: room.height,
            wall_color: room.wall_color.clone(),
            floor_color: room.floor_color.clone(),
        }
    }
}
