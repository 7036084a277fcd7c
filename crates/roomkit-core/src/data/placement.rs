use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{is_hex_color, MaterialPreset};
use crate::constants::MAX_SHADE;
use crate::error::LayoutError;

/// A furniture template instance positioned in the room.
///
/// Positions are room-space meters with `y` vertical. `placement_id` is a
/// stable identity assigned at creation; the store still addresses records by
/// their position in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedFurniture {
    #[serde(default = "Uuid::new_v4")]
    pub placement_id: Uuid,
    pub furniture_id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    pub color: String,
    #[serde(default)]
    pub shade: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metalness: Option<f64>,
}

fn default_scale() -> f64 {
    1.0
}

impl PlacedFurniture {
    /// A new placement at `(x, 0, z)`, unrotated, unscaled.
    pub fn new(furniture_id: impl Into<String>, x: f64, z: f64, color: impl Into<String>) -> Self {
        Self {
            placement_id: Uuid::new_v4(),
            furniture_id: furniture_id.into(),
            x,
            y: 0.0,
            z,
            rotation: 0.0,
            scale: 1.0,
            color: color.into(),
            shade: 0.0,
            roughness: None,
            metalness: None,
        }
    }

    /// Applies the checks an edit would apply to every field. Used for
    /// records that enter the store without going through a patch.
    ///
    /// An empty color is accepted; renderers fall back to the template color.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut patch = PlacementPatch::new()
            .x(self.x)
            .y(self.y)
            .z(self.z)
            .rotation(self.rotation)
            .scale(self.scale)
            .shade(self.shade);
        patch.roughness = self.roughness;
        patch.metalness = self.metalness;
        if !self.color.is_empty() {
            patch.color = Some(self.color.clone());
        }
        patch.validate()
    }
}

/// Partial update of a placement. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metalness: Option<f64>,
}

impl PlacementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Sets both floor coordinates.
    pub fn position(self, x: f64, z: f64) -> Self {
        self.x(x).z(z)
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn shade(mut self, shade: f64) -> Self {
        self.shade = Some(shade);
        self
    }

    pub fn roughness(mut self, roughness: f64) -> Self {
        self.roughness = Some(roughness);
        self
    }

    pub fn metalness(mut self, metalness: f64) -> Self {
        self.metalness = Some(metalness);
        self
    }

    /// Sets the color together with the preset's surface finish.
    pub fn material(self, preset: MaterialPreset, color: impl Into<String>) -> Self {
        self.color(color)
            .roughness(preset.roughness())
            .metalness(preset.metalness())
    }

    /// True when the patch moves the item on the floor.
    pub fn moves(&self) -> bool {
        self.x.is_some() || self.z.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rejects values that must never reach the store.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
            ("rotation", self.rotation),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(invalid(field, format!("must be finite, got {v}")));
                }
            }
        }
        if let Some(scale) = self.scale {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(invalid("scale", format!("must be positive, got {scale}")));
            }
        }
        if let Some(shade) = self.shade {
            if !(0.0..=MAX_SHADE).contains(&shade) {
                return Err(invalid("shade", format!("must be within 0-100, got {shade}")));
            }
        }
        for (field, value) in [("roughness", self.roughness), ("metalness", self.metalness)] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid(field, format!("must be within 0-1, got {v}")));
                }
            }
        }
        if let Some(color) = &self.color {
            if !is_hex_color(color) {
                return Err(LayoutError::InvalidColor {
                    value: color.clone(),
                });
            }
        }
        Ok(())
    }

    /// Merges the set fields into `item`. Does not validate or clamp.
    pub fn apply_to(&self, item: &mut PlacedFurniture) {
        if let Some(x) = self.x {
            item.x = x;
        }
        if let Some(y) = self.y {
            item.y = y;
        }
        if let Some(z) = self.z {
            item.z = z;
        }
        if let Some(rotation) = self.rotation {
            item.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            item.scale = scale;
        }
        if let Some(color) = &self.color {
            item.color = color.clone();
        }
        if let Some(shade) = self.shade {
            item.shade = shade;
        }
        if self.roughness.is_some() {
            item.roughness = self.roughness;
        }
        if self.metalness.is_some() {
            item.metalness = self.metalness;
        }
    }
}

fn invalid(field: &str, reason: String) -> LayoutError {
    LayoutError::InvalidPlacement {
        field: field.to_string(),
        reason,
    }
}
