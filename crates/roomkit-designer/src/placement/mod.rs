//! Placement store: the authoritative state of one editing session.
//!
//! Owns the active room, the read-only catalog and the ordered sequence of
//! placed furniture. Render adapters read from it and request changes only
//! through its operations; every change is announced on the store's
//! [`EventBus`] so observers can redraw.
//!
//! Placements are addressed by their position in the sequence. Removing an
//! item shifts every later item down by one, so an index taken before a
//! removal must not be reused. Each placement also carries a stable
//! `placement_id` for callers that need identity across removals.
//!
//! Design snapshot operations live in the `design_io` submodule.

mod design_io;

use roomkit_core::{
    Catalog, ClampPolicy, Design, EventBus, FurnitureTemplate, LayoutError, LayoutEvent,
    LayoutOptions, PlacedFurniture, PlacementPatch, Room,
};
use uuid::Uuid;

use crate::bounds::{BoundsEnforcer, Footprint};
use crate::viewport::{resolve_scale, RoomPoint, ViewTransform, ViewportSize};

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn normalize_rotation(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Session state for room layout editing.
#[derive(Debug)]
pub struct PlacementStore {
    room: Room,
    catalog: Catalog,
    placements: Vec<PlacedFurniture>,
    options: LayoutOptions,
    enforcer: BoundsEnforcer,
    current_design: Option<Design>,
    is_modified: bool,
    events: EventBus,
}

impl PlacementStore {
    /// Creates a session with the default room and layout options.
    pub fn new() -> Self {
        let options = LayoutOptions::default();
        Self {
            room: Room::default(),
            catalog: Catalog::new(),
            placements: Vec::new(),
            options,
            enforcer: BoundsEnforcer::new(options.clamp_policy),
            current_design: None,
            is_modified: false,
            events: EventBus::new(),
        }
    }

    /// Creates a session for `room` with explicit layout options.
    pub fn with_options(room: Room, options: LayoutOptions) -> Result<Self, LayoutError> {
        room.validate()?;
        Ok(Self {
            room,
            options,
            enforcer: BoundsEnforcer::new(options.clamp_policy),
            ..Self::new()
        })
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// The bus on which every mutation is announced.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Switches the clamp policy and re-clamps every placement under it.
    pub fn set_clamp_policy(&mut self, policy: ClampPolicy) {
        self.options.clamp_policy = policy;
        self.enforcer = BoundsEnforcer::new(policy);
        self.reclamp_all();
    }

    pub fn enforcer(&self) -> &BoundsEnforcer {
        &self.enforcer
    }

    /// Replaces the session catalog. Returns the number of templates kept.
    pub fn load_catalog(&mut self, items: impl IntoIterator<Item = FurnitureTemplate>) -> usize {
        self.catalog = Catalog::from_templates(items);
        let templates = self.catalog.len();
        tracing::debug!("Catalog loaded with {} templates", templates);
        self.events.publish(LayoutEvent::CatalogLoaded { templates });
        templates
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Template of the placement at `index`, if both exist.
    pub fn template_for(&self, index: usize) -> Option<&FurnitureTemplate> {
        self.placements
            .get(index)
            .and_then(|item| self.catalog.get(&item.furniture_id))
    }

    /// Replaces the active room. Existing placements are clamped into the
    /// new bounds.
    pub fn set_room(&mut self, room: Room) -> Result<(), LayoutError> {
        room.validate()?;
        tracing::debug!(
            "Room set to '{}' ({} x {} x {})",
            room.name,
            room.width,
            room.length,
            room.height
        );
        self.room = room;
        self.reclamp_all();
        self.is_modified = true;
        self.events.publish(LayoutEvent::RoomChanged {
            width: self.room.width,
            length: self.room.length,
            height: self.room.height,
        });
        Ok(())
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Fits the active room into a 2D viewport using the session's margin.
    pub fn resolve_scale(&self, viewport: ViewportSize) -> Result<ViewTransform, LayoutError> {
        resolve_scale(&self.room, viewport, self.options.fit_margin)
    }

    /// Appends a placement of `template_id` at the center of the room,
    /// unrotated, at scale 1, in the template's default color.
    pub fn add_furniture(&mut self, template_id: &str) -> Result<(), LayoutError> {
        let template = self.catalog.get(template_id).ok_or_else(|| {
            LayoutError::UnknownTemplateReference {
                template_id: template_id.to_string(),
            }
        })?;

        let (x, z) = self.room.center();
        let mut item = PlacedFurniture::new(template_id, x, z, template.default_color.clone());
        settle(&mut item, &self.options, &self.enforcer, &self.room, Some(template));

        let index = self.placements.len();
        let placement_id = item.placement_id;
        self.placements.push(item);
        self.is_modified = true;
        tracing::debug!("Added '{}' at index {}", template_id, index);
        self.events.publish(LayoutEvent::FurnitureAdded {
            index,
            placement_id,
        });
        Ok(())
    }

    /// Merges `patch` into the placement at `index`, normalizes its rotation
    /// into `[0, 360)`, limits its scale to the configured range and clamps
    /// it into the room.
    ///
    /// On error nothing is modified.
    pub fn update_furniture(
        &mut self,
        index: usize,
        patch: PlacementPatch,
    ) -> Result<(), LayoutError> {
        self.check_index(index)?;
        patch.validate()?;

        let mut item = self.placements[index].clone();
        patch.apply_to(&mut item);
        let template = self.catalog.get(&item.furniture_id);
        settle(&mut item, &self.options, &self.enforcer, &self.room, template);

        let placement_id = item.placement_id;
        self.placements[index] = item;
        self.is_modified = true;
        tracing::debug!("Updated placement {} with {:?}", index, patch);
        self.events.publish(LayoutEvent::FurnitureUpdated {
            index,
            placement_id,
        });
        Ok(())
    }

    /// Removes the placement at `index`; later placements move down by one.
    pub fn remove_furniture(&mut self, index: usize) -> Result<(), LayoutError> {
        self.check_index(index)?;
        let removed = self.placements.remove(index);
        self.is_modified = true;
        tracing::debug!("Removed '{}' from index {}", removed.furniture_id, index);
        self.events.publish(LayoutEvent::FurnitureRemoved {
            index,
            placement_id: removed.placement_id,
        });
        Ok(())
    }

    /// Rotates the placement counter-clockwise by the configured step.
    pub fn rotate_left(&mut self, index: usize) -> Result<(), LayoutError> {
        self.rotate_by(index, -self.options.rotation_step)
    }

    /// Rotates the placement clockwise by the configured step.
    pub fn rotate_right(&mut self, index: usize) -> Result<(), LayoutError> {
        self.rotate_by(index, self.options.rotation_step)
    }

    pub fn rotate_by(&mut self, index: usize, delta_degrees: f64) -> Result<(), LayoutError> {
        let current = self.get(index)?.rotation;
        self.update_furniture(index, PlacementPatch::new().rotation(current + delta_degrees))
    }

    /// Placements in presentation order.
    pub fn placed_furniture(&self) -> &[PlacedFurniture] {
        &self.placements
    }

    pub fn get(&self, index: usize) -> Result<&PlacedFurniture, LayoutError> {
        self.placements
            .get(index)
            .ok_or(LayoutError::IndexOutOfRange {
                index,
                len: self.placements.len(),
            })
    }

    /// Current index of the placement with the given stable id.
    pub fn index_of(&self, placement_id: Uuid) -> Option<usize> {
        self.placements
            .iter()
            .position(|p| p.placement_id == placement_id)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Clamps a candidate position for the placement at `index` without
    /// storing it. `rotation` overrides the stored rotation for the footprint.
    pub fn clamp_candidate(
        &self,
        index: usize,
        point: RoomPoint,
        rotation: Option<f64>,
    ) -> Result<RoomPoint, LayoutError> {
        let item = self.get(index)?;
        let footprint = self.catalog.get(&item.furniture_id).map(|t| {
            (
                Footprint::of(t, item.scale),
                rotation.unwrap_or(item.rotation),
            )
        });
        Ok(self.enforcer.clamp(point, &self.room, footprint))
    }

    /// Discards all placements and the current design handle, keeping the
    /// room and catalog.
    pub fn reset(&mut self) {
        self.placements.clear();
        self.current_design = None;
        self.is_modified = false;
        tracing::debug!("Session reset");
        self.events.publish(LayoutEvent::PlacementsCleared);
    }

    /// True if the session changed since it was last loaded or saved.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Name of the current design, with `*` when there are unsaved changes.
    pub fn display_name(&self) -> String {
        let name = self
            .current_design
            .as_ref()
            .map_or("Untitled", |d| d.name.as_str());
        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }

    fn check_index(&self, index: usize) -> Result<(), LayoutError> {
        if index < self.placements.len() {
            Ok(())
        } else {
            Err(LayoutError::IndexOutOfRange {
                index,
                len: self.placements.len(),
            })
        }
    }

    fn reclamp_all(&mut self) {
        for item in &mut self.placements {
            let template = self.catalog.get(&item.furniture_id);
            settle(item, &self.options, &self.enforcer, &self.room, template);
        }
    }
}

/// Brings a merged placement back within the session's rules: rotation in
/// `[0, 360)`, scale within the configured range, position inside the room.
/// Scale is settled first since it changes the footprint.
fn settle(
    item: &mut PlacedFurniture,
    options: &LayoutOptions,
    enforcer: &BoundsEnforcer,
    room: &Room,
    template: Option<&FurnitureTemplate>,
) {
    item.rotation = normalize_rotation(item.rotation);
    item.scale = options.clamp_scale(item.scale);
    enforcer.clamp_placement(item, room, template);
}

impl Default for PlacementStore {
    fn default() -> Self {
        Self::new()
    }
}
