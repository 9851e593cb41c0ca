use std::collections::HashMap;

use log::warn;

use farcall_shared::EntityId;

use super::entity_ref::EntityRef;

/// Tracks which entities are currently relevant to the controlling client of
/// one entity.
///
/// Exists only while that entity has a live client channel; destroyed (and
/// its refs released) when the client disconnects or the entity stops being
/// client-controlled. Mutated only by the owning role's tick thread.
#[derive(Debug, Default)]
pub struct Witness {
    view: HashMap<EntityId, EntityRef>,
}

impl Witness {
    pub fn new() -> Self {
        Self {
            view: HashMap::new(),
        }
    }

    /// An entity entered this viewer's area of interest. It becomes a valid
    /// client-call target only after [`enter_acknowledged`](Self::enter_acknowledged).
    pub fn entity_enters_view(&mut self, entity_id: EntityId) {
        if self.view.contains_key(&entity_id) {
            warn!("entity({entity_id}) is already in view");
            return;
        }
        self.view.insert(entity_id, EntityRef::new(entity_id));
    }

    /// The enter-client handshake completed: the client now knows about the
    /// entity.
    pub fn enter_acknowledged(&mut self, entity_id: EntityId) {
        match self.view.get_mut(&entity_id) {
            Some(entity_ref) => entity_ref.clear_enter_pending(),
            None => warn!("enter acknowledged for entity({entity_id}) not in view"),
        }
    }

    /// The entity is scheduled to leave the view but the client has not been
    /// told yet. It remains a valid call target until it actually leaves.
    pub fn mark_leave_pending(&mut self, entity_id: EntityId) {
        if let Some(entity_ref) = self.view.get_mut(&entity_id) {
            entity_ref.set_leave_pending();
        }
    }

    /// The entity left the area of interest, was destroyed, or the view is
    /// being torn down. Returns whether a ref existed.
    pub fn entity_leaves_view(&mut self, entity_id: EntityId) -> bool {
        self.view.remove(&entity_id).is_some()
    }

    pub fn view_ref(&self, entity_id: EntityId) -> Option<&EntityRef> {
        self.view.get(&entity_id)
    }

    /// Whether the entity is in view with a completed enter handshake.
    pub fn visible(&self, entity_id: EntityId) -> bool {
        self.view
            .get(&entity_id)
            .is_some_and(|entity_ref| !entity_ref.is_enter_pending())
    }

    pub fn view_refs(&self) -> impl Iterator<Item = &EntityRef> {
        self.view.values()
    }

    pub fn view_count(&self) -> usize {
        self.view.len()
    }

    /// Releases every ref, e.g. on client disconnect.
    pub fn clear(&mut self) {
        self.view.clear();
    }
}
