//! # RoomKit Core
//!
//! Core types and utilities for RoomKit.
//! Provides the room/furniture data model, layout options, the error
//! hierarchy and the synchronous event bus used to observe layout changes.

pub mod constants;
pub mod data;
pub mod error;
pub mod event_bus;

pub use data::{
    is_hex_color, Catalog, ClampPolicy, Design, FurnitureTemplate, FurnitureType, LayoutOptions,
    LightingOptions, MaterialPreset, ModelFormat, ModelSource, PlacedFurniture, PlacementPatch,
    Room, RoomDetails,
};

pub use error::{Error, LayoutError, PersistenceError, Result};

pub use event_bus::{
    EventBus, EventBusConfig, EventCategory, EventFilter, LayoutEvent, SubscriptionId,
};
