use std::sync::Arc;

use farcall_shared::{EntityId, SchemaModule};

use crate::witness::Witness;

/// Auto-archive mode of a persistable entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoArchive {
    /// Never picked up by the archiver
    Never,
    /// Re-archived once every archive period
    Always,
    /// Archived exactly once, then reverts to `Never`
    OnceThenNever,
}

impl AutoArchive {
    pub fn is_enabled(self) -> bool {
        !matches!(self, AutoArchive::Never)
    }
}

/// The slice of one game entity that the call layer and the archiver need.
/// The simulation side owns the concrete type.
pub trait Entity {
    fn id(&self) -> EntityId;

    /// Whether this is the authoritative instance, as opposed to a cached
    /// shadow copy on a non-owning role.
    fn is_real(&self) -> bool;

    fn is_destroyed(&self) -> bool;

    /// Whether the entity currently has a database row to write to.
    fn has_db(&self) -> bool;

    fn auto_archive(&self) -> AutoArchive;

    fn set_auto_archive(&mut self, mode: AutoArchive);

    /// Persist the entity to durable storage. Write failures are the
    /// entity's own concern; the archiver never retries within a period.
    fn write_to_db(&mut self);

    /// The entity's own schema module.
    fn schema(&self) -> &Arc<SchemaModule>;

    /// View tracking for the controlling client, present only while the
    /// entity has a live client channel.
    fn witness(&self) -> Option<&Witness>;
}

/// Lookup handle into the owning role's entity registry.
///
/// Injected into the call layer and the archiver at construction; the
/// registry is mutated only by the owning role's tick thread, the call layer
/// only reads it.
pub trait EntityRegistry {
    /// Returns `None` for ids that are unknown or since-destroyed.
    fn find_entity(&self, entity_id: EntityId) -> Option<&dyn Entity>;

    fn find_entity_mut(&mut self, entity_id: EntityId) -> Option<&mut dyn Entity>;

    /// Snapshot of every registered entity id.
    fn entity_ids(&self) -> Vec<EntityId>;
}
