use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Surface finish presets offered for furniture in the 3D view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialPreset {
    Wood,
    Metal,
    Plastic,
    Fabric,
}

impl MaterialPreset {
    pub const ALL: [MaterialPreset; 4] = [Self::Wood, Self::Metal, Self::Plastic, Self::Fabric];

    pub fn roughness(self) -> f64 {
        match self {
            Self::Wood => 0.8,
            Self::Metal => 0.2,
            Self::Plastic => 0.9,
            Self::Fabric => 1.0,
        }
    }

    pub fn metalness(self) -> f64 {
        match self {
            Self::Wood => 0.1,
            Self::Metal => 0.8,
            Self::Plastic | Self::Fabric => 0.0,
        }
    }

    /// Swatches offered with the preset.
    pub fn palette(self) -> &'static [&'static str] {
        match self {
            Self::Wood => &["#A67D5D", "#8B5A2B", "#D2B48C", "#5C4033"],
            Self::Metal => &["#C0C0C0", "#A8A8A8", "#D4AF37", "#B87333"],
            Self::Plastic => &["#FFFFFF", "#1E90FF", "#FF6347", "#32CD32"],
            Self::Fabric => &["#6B8E23", "#4682B4", "#800020", "#2F4F4F"],
        }
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wood => write!(f, "wood"),
            Self::Metal => write!(f, "metal"),
            Self::Plastic => write!(f, "plastic"),
            Self::Fabric => write!(f, "fabric"),
        }
    }
}

impl FromStr for MaterialPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown material preset: {s}"))
    }
}
