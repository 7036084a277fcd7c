//! # RoomKit Designer
//!
//! Room layout and furniture placement. Fits a room into a viewport, maps
//! coordinates between room space and view space, keeps furniture inside the
//! room and owns the editing session's placements.
//!
//! ## Core Components
//!
//! - **Viewport**: scale resolution and the room/view coordinate mapping
//! - **Bounds**: center-only or footprint-aware clamping
//! - **Placement**: the session store (room, catalog, placed furniture)
//! - **Drag**: two-phase move/rotate gestures
//! - **Selection**: selected placement, tracked by stable id
//! - **Renderer**: 2D canvas and 3D scene frame builders
//! - **Serialization / Repository**: design documents and saved-design storage
//!
//! ## Architecture
//!
//! ```text
//! PlacementStore (authoritative state, publishes LayoutEvents)
//!   ├── BoundsEnforcer (one clamp policy per session)
//!   ├── Canvas2dAdapter ──┐
//!   └── Scene3dAdapter  ──┴── ViewTransform (shared mapping)
//! ```
//!
//! Adapters read the store and request changes only through its operations.

pub mod bounds;
pub mod drag;
pub mod placement;
pub mod renderer;
pub mod repository;
pub mod selection;
pub mod serialization;
pub mod viewport;

pub use bounds::{BoundsEnforcer, Footprint};
pub use drag::DragSession;
pub use placement::{normalize_rotation, PlacementStore};
pub use renderer::{
    Canvas2dAdapter, Frame2d, Frame3d, ItemRect, RenderAdapter, RoomBox, RoomRect, Scene3dAdapter,
    SceneNode, SkippedItem,
};
pub use repository::{new_design_id, DesignRepository, InMemoryRepository, JsonDirRepository};
pub use selection::Selection;
pub use serialization::{
    load_catalog_file, load_design_file, parse_envelope, save_design_file, ApiEnvelope, ApiMessage,
};
pub use viewport::{resolve_scale, RoomPoint, ViewPoint, ViewTransform, ViewportSize};
