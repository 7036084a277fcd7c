//! # RoomKit
//!
//! Room and furniture layout toolkit:
//! - Fits a room into a 2D canvas or maps it 1:1 into a 3D scene
//! - Keeps placed furniture inside the room (center or footprint clamping)
//! - Owns the editing session (catalog, placements, designs)
//! - Builds backend-neutral render frames for 2D and 3D front ends
//!
//! ## Architecture
//!
//! RoomKit is organized as a workspace with multiple crates:
//!
//! 1. **roomkit-core** - Data model, errors, layout constants, event bus
//! 2. **roomkit-designer** - Viewport mapping, bounds, placement store,
//!    gestures, render adapters, design persistence
//! 3. **roomkit-settings** - Configuration file handling
//! 4. **roomkit** - This crate: logging setup and the headless CLI

pub mod cli;

pub use roomkit_core::{
    Catalog, ClampPolicy, Design, Error, EventBus, FurnitureTemplate, FurnitureType, LayoutError,
    LayoutEvent, LayoutOptions, LightingOptions, MaterialPreset, PersistenceError, PlacedFurniture,
    PlacementPatch, Result, Room,
};

pub use roomkit_designer::{
    Canvas2dAdapter, DesignRepository, DragSession, Frame2d, Frame3d, InMemoryRepository,
    JsonDirRepository, PlacementStore, RenderAdapter, RoomPoint, Scene3dAdapter, Selection,
    ViewPoint, ViewTransform, ViewportSize,
};

pub use roomkit_settings::{
    Config, LayoutSettings, LightingSettings, RoomDefaults, StorageSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Human-readable output on stderr
/// - RUST_LOG environment variable support (defaults to INFO)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging as one JSON object per line on stderr.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_current_span(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}
