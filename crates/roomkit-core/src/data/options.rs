use std::fmt;

use serde::{Deserialize, Serialize};

use super::is_hex_color;
use crate::constants::{
    AMBIENT_INTENSITY, DIRECTIONAL_INTENSITY, FIT_MARGIN, LIGHT_COLOR, MAX_DIRECTIONAL_INTENSITY,
    MAX_ITEM_SCALE, MIN_ITEM_SCALE, ROTATION_STEP_DEGREES,
};
use crate::error::LayoutError;

/// How placements are kept inside the room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// Only the item's center point is kept within the walls; its drawn
    /// edges may extend past them.
    #[default]
    CenterOnly,
    /// The item's rotated footprint is kept entirely within the walls.
    Footprint,
}

impl fmt::Display for ClampPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CenterOnly => write!(f, "center_only"),
            Self::Footprint => write!(f, "footprint"),
        }
    }
}

/// Layout behavior of a placement session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Fraction of the viewport a fitted room occupies, in (0, 1].
    pub fit_margin: f64,
    pub clamp_policy: ClampPolicy,
    /// Degrees per rotate-left / rotate-right step.
    pub rotation_step: f64,
    /// Range a placement's scale is limited to.
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            fit_margin: FIT_MARGIN,
            clamp_policy: ClampPolicy::default(),
            rotation_step: ROTATION_STEP_DEGREES,
            min_scale: MIN_ITEM_SCALE,
            max_scale: MAX_ITEM_SCALE,
        }
    }
}

impl LayoutOptions {
    /// Limits `scale` to `[min_scale, max_scale]`.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

/// Scene lighting handed to the 3D renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LightingOptions {
    /// Ambient light intensity, 0 to 1
    pub ambient_intensity: f64,
    /// Key light intensity, 0 to 1.5; the fill light runs at half of it
    pub directional_intensity: f64,
    pub shadows_enabled: bool,
    pub light_color: String,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient_intensity: AMBIENT_INTENSITY,
            directional_intensity: DIRECTIONAL_INTENSITY,
            shadows_enabled: true,
            light_color: LIGHT_COLOR.to_string(),
        }
    }
}

impl LightingOptions {
    /// Intensity of the secondary fill light.
    pub fn fill_intensity(&self) -> f64 {
        self.directional_intensity / 2.0
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(0.0..=1.0).contains(&self.ambient_intensity) {
            return Err(LayoutError::InvalidLighting {
                field: "ambient_intensity".to_string(),
                value: self.ambient_intensity,
            });
        }
        if !(0.0..=MAX_DIRECTIONAL_INTENSITY).contains(&self.directional_intensity) {
            return Err(LayoutError::InvalidLighting {
                field: "directional_intensity".to_string(),
                value: self.directional_intensity,
            });
        }
        if !is_hex_color(&self.light_color) {
            return Err(LayoutError::InvalidColor {
                value: self.light_color.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for LightingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ambient {:.2}, directional {:.2}, shadows {}, color {}",
            self.ambient_intensity,
            self.directional_intensity,
            if self.shadows_enabled { "on" } else { "off" },
            self.light_color
        )
    }
}
