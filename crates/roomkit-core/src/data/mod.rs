//! Data model for rooms, the furniture catalog, placements and saved designs.
//!
//! All types serialize with camelCase field names so they round-trip through
//! the JSON documents exchanged with the design backend.

mod catalog;
mod design;
mod material;
mod options;
mod placement;
mod room;

pub use catalog::{Catalog, FurnitureTemplate, FurnitureType, ModelFormat, ModelSource};
pub use design::Design;
pub use material::MaterialPreset;
pub use options::{ClampPolicy, LayoutOptions, LightingOptions};
pub use placement::{PlacedFurniture, PlacementPatch};
pub use room::{Room, RoomDetails};

/// Returns true for `#RGB` and `#RRGGBB` hex color strings.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
