use uuid::Uuid;

use crate::placement::PlacementStore;

/// Tracks the selected placement by its stable id, so the selection follows
/// the item when earlier placements are removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<Uuid>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    /// Selects the placement at `index`, or clears the selection if it is
    /// already selected. Returns true if something is selected afterwards.
    pub fn toggle(&mut self, store: &PlacementStore, index: usize) -> bool {
        let Ok(item) = store.get(index) else {
            return self.selected.is_some();
        };
        if self.selected == Some(item.placement_id) {
            self.selected = None;
        } else {
            self.selected = Some(item.placement_id);
        }
        self.selected.is_some()
    }

    pub fn select(&mut self, store: &PlacementStore, index: usize) -> bool {
        match store.get(index) {
            Ok(item) => {
                self.selected = Some(item.placement_id);
                true
            }
            Err(_) => false,
        }
    }

    /// Current index of the selected placement. `None` if nothing is selected
    /// or the selected placement has been removed.
    pub fn selected_index(&self, store: &PlacementStore) -> Option<usize> {
        self.selected.and_then(|id| store.index_of(id))
    }

    pub fn is_selected(&self, placement_id: Uuid) -> bool {
        self.selected == Some(placement_id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
