//! RoomKit Settings Crate
//!
//! Handles application configuration: layout behavior, the default room and
//! design storage locations.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, Config, LayoutSettings, LightingSettings, RoomDefaults, StorageSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
