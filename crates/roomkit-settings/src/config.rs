//! Configuration for RoomKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, selected by file extension.
//!
//! Configuration is organized into logical sections:
//! - Layout settings (fit margin, clamp policy, rotation step, viewport)
//! - Room defaults (the room a new session starts with)
//! - Lighting (3D scene lights)
//! - Storage (where designs are kept, backend URL)

use std::path::{Path, PathBuf};

use roomkit_core::constants;
use roomkit_core::{is_hex_color, ClampPolicy, LayoutOptions, LightingOptions, Room};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Layout behavior of the placement core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Fraction of the viewport the fitted room occupies
    pub fit_margin: f64,
    pub clamp_policy: ClampPolicy,
    /// Degrees per rotate-left / rotate-right action
    pub rotation_step_degrees: f64,
    /// Canvas size used when the host reports none
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Range a placement's scale is limited to
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            fit_margin: constants::FIT_MARGIN,
            clamp_policy: ClampPolicy::default(),
            rotation_step_degrees: constants::ROTATION_STEP_DEGREES,
            viewport_width: constants::DEFAULT_VIEWPORT_WIDTH,
            viewport_height: constants::DEFAULT_VIEWPORT_HEIGHT,
            min_scale: constants::MIN_ITEM_SCALE,
            max_scale: constants::MAX_ITEM_SCALE,
        }
    }
}

/// The room a new session starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDefaults {
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub wall_color: String,
    pub floor_color: String,
    pub user_id: String,
}

impl Default for RoomDefaults {
    fn default() -> Self {
        let room = Room::default();
        Self {
            name: room.name,
            width: room.width,
            length: room.length,
            height: room.height,
            wall_color: room.wall_color,
            floor_color: room.floor_color,
            user_id: room.user_id,
        }
    }
}

/// Lights of the 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingSettings {
    /// 0 to 1
    pub ambient_intensity: f64,
    /// 0 to 1.5
    pub directional_intensity: f64,
    pub shadows_enabled: bool,
    pub light_color: String,
}

impl Default for LightingSettings {
    fn default() -> Self {
        let lighting = LightingOptions::default();
        Self {
            ambient_intensity: lighting.ambient_intensity,
            directional_intensity: lighting.directional_intensity,
            shadows_enabled: lighting.shadows_enabled,
            light_color: lighting.light_color,
        }
    }
}

/// Where designs are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory for saved designs; `None` keeps them in memory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designs_dir: Option<PathBuf>,
    pub api_base_url: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            designs_dir: None,
            api_base_url: "http://localhost:3000/api".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Layout behavior
    pub layout: LayoutSettings,
    /// Default room
    pub room_defaults: RoomDefaults,
    /// 3D scene lighting
    pub lighting: LightingSettings,
    /// Persistence
    pub storage: StorageSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, otherwise defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if !(layout.fit_margin > 0.0 && layout.fit_margin <= 1.0) {
            return Err(ConfigError::out_of_range("layout.fit_margin", layout.fit_margin));
        }

        if !(layout.rotation_step_degrees > 0.0 && layout.rotation_step_degrees.is_finite()) {
            return Err(ConfigError::out_of_range(
                "layout.rotation_step_degrees",
                layout.rotation_step_degrees,
            ));
        }

        if layout.viewport_width <= 0.0 || layout.viewport_height <= 0.0 {
            return Err(ConfigError::out_of_range(
                "layout.viewport",
                format!("{}x{}", layout.viewport_width, layout.viewport_height),
            ));
        }

        if !(layout.min_scale > 0.0 && layout.min_scale <= layout.max_scale) {
            return Err(ConfigError::out_of_range(
                "layout.min_scale",
                format!("{}..{}", layout.min_scale, layout.max_scale),
            ));
        }

        let room = &self.room_defaults;
        for (key, value) in [
            ("room_defaults.width", room.width),
            ("room_defaults.length", room.length),
            ("room_defaults.height", room.height),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        for (key, value) in [
            ("room_defaults.wall_color", &room.wall_color),
            ("room_defaults.floor_color", &room.floor_color),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::InvalidColor {
                    key: key.to_string(),
                    value: value.clone(),
                });
            }
        }

        let lighting = &self.lighting;
        if !(0.0..=1.0).contains(&lighting.ambient_intensity) {
            return Err(ConfigError::out_of_range(
                "lighting.ambient_intensity",
                lighting.ambient_intensity,
            ));
        }
        if !(0.0..=constants::MAX_DIRECTIONAL_INTENSITY).contains(&lighting.directional_intensity) {
            return Err(ConfigError::out_of_range(
                "lighting.directional_intensity",
                lighting.directional_intensity,
            ));
        }
        if !is_hex_color(&lighting.light_color) {
            return Err(ConfigError::InvalidColor {
                key: "lighting.light_color".to_string(),
                value: lighting.light_color.clone(),
            });
        }

        Ok(())
    }

    /// Layout options for a placement store.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            fit_margin: self.layout.fit_margin,
            clamp_policy: self.layout.clamp_policy,
            rotation_step: self.layout.rotation_step_degrees,
            min_scale: self.layout.min_scale,
            max_scale: self.layout.max_scale,
        }
    }

    /// Lighting for the 3D scene adapter.
    pub fn lighting_options(&self) -> LightingOptions {
        LightingOptions {
            ambient_intensity: self.lighting.ambient_intensity,
            directional_intensity: self.lighting.directional_intensity,
            shadows_enabled: self.lighting.shadows_enabled,
            light_color: self.lighting.light_color.clone(),
        }
    }

    /// The room a new session starts with.
    pub fn default_room(&self) -> Room {
        let defaults = &self.room_defaults;
        Room {
            name: defaults.name.clone(),
            width: defaults.width,
            length: defaults.length,
            height: defaults.height,
            wall_color: defaults.wall_color.clone(),
            floor_color: defaults.floor_color.clone(),
            user_id: defaults.user_id.clone(),
            ..Room::default()
        }
    }
}

/// Platform config file location: `<config_dir>/roomkit/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("roomkit").join("config.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory(
                "no configuration directory on this platform".to_string(),
            )
        })
}
