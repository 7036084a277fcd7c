//! Design snapshot operations (serialize, load, save, delete) for the store.

use std::collections::HashSet;

use chrono::Utc;
use roomkit_core::{Design, LayoutError, LayoutEvent, Result};
use uuid::Uuid;

use super::{settle, PlacementStore};
use crate::repository::{new_design_id, DesignRepository};

impl PlacementStore {
    /// Snapshot of the session as a design named `name`.
    ///
    /// Reuses the id and creation time of the current design so saving again
    /// overwrites it; otherwise a fresh id is generated.
    pub fn serialize_design(&self, name: &str) -> Design {
        let now = Utc::now();
        let current = self.current_design.as_ref();
        Design {
            id: Some(
                current
                    .and_then(|d| d.id.clone())
                    .unwrap_or_else(new_design_id),
            ),
            name: name.to_string(),
            room_id: self
                .room
                .id
                .clone()
                .unwrap_or_else(|| "temp-room-id".to_string()),
            user_id: self.room.user_id.clone(),
            furniture: self.placements.clone(),
            room_details: Some(self.room.details()),
            created_at: Some(current.and_then(|d| d.created_at).unwrap_or(now)),
            updated_at: Some(now),
        }
    }

    /// Replaces the session contents with a saved design.
    ///
    /// The room takes the design's room snapshot when it has one. Every
    /// placement must pass the same field checks as an edit; one bad record
    /// rejects the whole design and leaves the session untouched. Accepted
    /// placements are settled like any edit. Placements whose template is not
    /// in the catalog are kept (renderers skip them).
    pub fn load_design(&mut self, design: &Design) -> std::result::Result<(), LayoutError> {
        let mut room = self.room.clone();
        if let Some(details) = &design.room_details {
            room.apply_details(details);
        }
        if !design.room_id.is_empty() {
            room.id = Some(design.room_id.clone());
        }
        room.user_id = design.user_id.clone();
        room.validate()?;

        for (index, item) in design.furniture.iter().enumerate() {
            if let Err(e) = item.validate() {
                tracing::warn!(
                    "Rejecting design '{}': placement {} is invalid: {}",
                    design.name,
                    index,
                    e
                );
                return Err(e);
            }
        }

        let mut seen = HashSet::new();
        let mut placements = design.furniture.clone();
        for item in &mut placements {
            if !seen.insert(item.placement_id) {
                item.placement_id = Uuid::new_v4();
            }
            let template = self.catalog.get(&item.furniture_id);
            if template.is_none() {
                tracing::warn!(
                    "Design references unknown template '{}'",
                    item.furniture_id
                );
            }
            settle(item, &self.options, &self.enforcer, &room, template);
        }

        tracing::info!(
            "Loaded design '{}' with {} items",
            design.name,
            placements.len()
        );
        self.room = room;
        self.placements = placements;
        self.current_design = Some(design.clone());
        self.is_modified = false;

        self.events.publish(LayoutEvent::RoomChanged {
            width: self.room.width,
            length: self.room.length,
            height: self.room.height,
        });
        self.events.publish(LayoutEvent::DesignLoaded {
            design_id: design.id.clone(),
            items: self.placements.len(),
        });
        Ok(())
    }

    /// Saves the session under `name`: updates the current design if the
    /// repository has it, otherwise creates a new one. The stored document
    /// becomes the current design.
    pub fn save_design(&mut self, repo: &mut dyn DesignRepository, name: &str) -> Result<Design> {
        let design = self.serialize_design(name);
        let existing_id = self
            .current_design
            .as_ref()
            .and_then(|d| d.id.clone())
            .filter(|id| repo.exists(id));

        let saved = match existing_id {
            Some(id) => repo.update(&id, design)?,
            None => repo.create(design)?,
        };

        let design_id = saved.id.clone().unwrap_or_default();
        tracing::info!("Saved design '{}' as {}", saved.name, design_id);
        self.current_design = Some(saved.clone());
        self.is_modified = false;
        self.events.publish(LayoutEvent::DesignSaved { design_id });
        Ok(saved)
    }

    /// Deletes a saved design; forgets it if it is the current one.
    pub fn delete_design(
        &mut self,
        repo: &mut dyn DesignRepository,
        design_id: &str,
    ) -> Result<()> {
        repo.delete(design_id)?;
        if self
            .current_design
            .as_ref()
            .is_some_and(|d| d.id.as_deref() == Some(design_id))
        {
            self.current_design = None;
        }
        self.events.publish(LayoutEvent::DesignDeleted {
            design_id: design_id.to_string(),
        });
        Ok(())
    }

    /// The design last loaded or saved in this session.
    pub fn current_design(&self) -> Option<&Design> {
        self.current_design.as_ref()
    }
}
