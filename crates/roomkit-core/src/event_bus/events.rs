//! Event type definitions for the event bus.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything the placement store announces to its observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// The active room was replaced or resized.
    RoomChanged { width: f64, length: f64, height: f64 },
    /// A catalog was loaded.
    CatalogLoaded { templates: usize },
    /// A placement was appended at `index`.
    FurnitureAdded { index: usize, placement_id: Uuid },
    /// The placement at `index` was modified.
    FurnitureUpdated { index: usize, placement_id: Uuid },
    /// The placement formerly at `index` was removed; later indices shifted down.
    FurnitureRemoved { index: usize, placement_id: Uuid },
    /// All placements were discarded (session reset).
    PlacementsCleared,
    /// A saved design replaced the session contents.
    DesignLoaded { design_id: Option<String>, items: usize },
    /// The session was written to a repository.
    DesignSaved { design_id: String },
    /// A saved design was deleted.
    DesignDeleted { design_id: String },
}

impl LayoutEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            LayoutEvent::RoomChanged { .. } => EventCategory::Room,
            LayoutEvent::CatalogLoaded { .. } => EventCategory::Catalog,
            LayoutEvent::FurnitureAdded { .. }
            | LayoutEvent::FurnitureUpdated { .. }
            | LayoutEvent::FurnitureRemoved { .. }
            | LayoutEvent::PlacementsCleared => EventCategory::Placement,
            LayoutEvent::DesignLoaded { .. }
            | LayoutEvent::DesignSaved { .. }
            | LayoutEvent::DesignDeleted { .. } => EventCategory::Design,
        }
    }

    /// True for events after which a render adapter must redraw.
    pub fn requires_redraw(&self) -> bool {
        !matches!(
            self,
            LayoutEvent::DesignSaved { .. } | LayoutEvent::DesignDeleted { .. }
        )
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            LayoutEvent::RoomChanged {
                width,
                length,
                height,
            } => format!("Room resized to {width}m x {length}m x {height}m"),
            LayoutEvent::CatalogLoaded { templates } => {
                format!("Catalog loaded ({templates} templates)")
            }
            LayoutEvent::FurnitureAdded { index, .. } => format!("Furniture added at #{index}"),
            LayoutEvent::FurnitureUpdated { index, .. } => format!("Furniture #{index} updated"),
            LayoutEvent::FurnitureRemoved { index, .. } => format!("Furniture #{index} removed"),
            LayoutEvent::PlacementsCleared => "All furniture cleared".to_string(),
            LayoutEvent::DesignLoaded { design_id, items } => format!(
                "Design {} loaded ({items} items)",
                design_id.as_deref().unwrap_or("<unsaved>")
            ),
            LayoutEvent::DesignSaved { design_id } => format!("Design {design_id} saved"),
            LayoutEvent::DesignDeleted { design_id } => format!("Design {design_id} deleted"),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Room geometry and colors.
    Room,
    /// Catalog loads.
    Catalog,
    /// Placement add/update/remove.
    Placement,
    /// Design save/load/delete.
    Design,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Room => write!(f, "Room"),
            EventCategory::Catalog => write!(f, "Catalog"),
            EventCategory::Placement => write!(f, "Placement"),
            EventCategory::Design => write!(f, "Design"),
        }
    }
}
