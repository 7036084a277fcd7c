//! Two-phase drag gestures.
//!
//! A gesture previews many candidate positions and then commits once:
//!
//! ```text
//! begin ──► preview* ──► commit  (one update_furniture)
//!                   └──► cancel  (store untouched)
//! ```
//!
//! Previews go through the store's [`BoundsEnforcer`](crate::bounds::BoundsEnforcer)
//! so the item shown under the pointer is exactly where the commit lands.

use roomkit_core::{LayoutError, PlacementPatch};
use uuid::Uuid;

use crate::placement::PlacementStore;
use crate::viewport::{RoomPoint, ViewPoint, ViewTransform};

/// An in-progress move and/or rotation of one placement.
#[derive(Debug, Clone)]
pub struct DragSession {
    placement_id: Uuid,
    transform: ViewTransform,
    origin: RoomPoint,
    start_rotation: f64,
    position: Option<RoomPoint>,
    rotation: Option<f64>,
}

impl DragSession {
    /// Starts a gesture on the placement at `index`. `transform` maps the
    /// pointer's view coordinates into the room.
    pub fn begin(
        store: &PlacementStore,
        index: usize,
        transform: ViewTransform,
    ) -> Result<Self, LayoutError> {
        let item = store.get(index)?;
        tracing::debug!("Drag started on placement {}", index);
        Ok(Self {
            placement_id: item.placement_id,
            transform,
            origin: RoomPoint::new(item.x, item.z),
            start_rotation: item.rotation,
            position: None,
            rotation: None,
        })
    }

    pub fn placement_id(&self) -> Uuid {
        self.placement_id
    }

    /// Position of the item when the gesture began.
    pub fn origin(&self) -> RoomPoint {
        self.origin
    }

    /// Maps `pointer` into the room, clamps it and stages it. The store is
    /// not modified.
    ///
    /// If the placement has been removed the unclamped position is staged;
    /// the commit will then fail.
    pub fn preview(&mut self, store: &PlacementStore, pointer: ViewPoint) -> RoomPoint {
        let candidate = self.transform.to_room(pointer);
        let clamped = match store.index_of(self.placement_id) {
            Some(index) => store
                .clamp_candidate(index, candidate, self.rotation)
                .unwrap_or(candidate),
            None => candidate,
        };
        self.position = Some(clamped);
        clamped
    }

    /// Stages a rotation in degrees.
    pub fn rotate_to(&mut self, degrees: f64) {
        self.rotation = Some(degrees);
    }

    /// Rotation staged so far, or the rotation at the start of the gesture.
    pub fn rotation(&self) -> f64 {
        self.rotation.unwrap_or(self.start_rotation)
    }

    /// Staged position, if the pointer has moved.
    pub fn position(&self) -> Option<RoomPoint> {
        self.position
    }

    pub fn has_changes(&self) -> bool {
        self.position.is_some() || self.rotation.is_some()
    }

    /// Applies the staged fields with a single `update_furniture`.
    ///
    /// The target is looked up by placement id at commit time; if it was
    /// removed during the gesture this fails with
    /// [`LayoutError::PlacementNotFound`]. A gesture with nothing staged
    /// commits nothing.
    pub fn commit(self, store: &mut PlacementStore) -> Result<(), LayoutError> {
        let index = store
            .index_of(self.placement_id)
            .ok_or(LayoutError::PlacementNotFound {
                placement_id: self.placement_id,
            })?;
        if !self.has_changes() {
            return Ok(());
        }

        let mut patch = PlacementPatch::new();
        if let Some(p) = self.position {
            patch = patch.position(p.x, p.z);
        }
        if let Some(rotation) = self.rotation {
            patch = patch.rotation(rotation);
        }
        tracing::debug!("Drag committed on placement {}", index);
        store.update_furniture(index, patch)
    }

    /// Abandons the gesture. Equivalent to dropping the session.
    pub fn cancel(self) {
        tracing::debug!("Drag cancelled for {}", self.placement_id);
    }
}
