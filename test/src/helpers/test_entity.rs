use std::sync::Arc;

use farcall_server::{AutoArchive, Entity, Witness};
use farcall_shared::{EntityId, SchemaModule};

/// Configurable in-memory entity for call-layer and archiver tests.
pub struct TestEntity {
    id: EntityId,
    real: bool,
    destroyed: bool,
    has_db: bool,
    auto_archive: AutoArchive,
    schema: Arc<SchemaModule>,
    witness: Option<Witness>,
    write_count: u32,
}

impl TestEntity {
    pub fn new(id: EntityId, schema: Arc<SchemaModule>) -> Self {
        Self {
            id,
            real: true,
            destroyed: false,
            has_db: false,
            auto_archive: AutoArchive::Never,
            schema,
            witness: None,
            write_count: 0,
        }
    }

    /// Mark the entity as a cached shadow instead of the real instance
    pub fn shadow(mut self) -> Self {
        self.real = false;
        self
    }

    /// Give the entity a database row and an auto-archive mode
    pub fn with_db(mut self, mode: AutoArchive) -> Self {
        self.has_db = true;
        self.auto_archive = mode;
        self
    }

    /// Attach an empty witness (a live client channel)
    pub fn with_witness(mut self) -> Self {
        self.witness = Some(Witness::new());
        self
    }

    pub fn witness_mut(&mut self) -> Option<&mut Witness> {
        self.witness.as_mut()
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn drop_db(&mut self) {
        self.has_db = false;
    }

    pub fn write_count(&self) -> u32 {
        self.write_count
    }
}

impl Entity for TestEntity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn is_real(&self) -> bool {
        self.real
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn has_db(&self) -> bool {
        self.has_db
    }

    fn auto_archive(&self) -> AutoArchive {
        self.auto_archive
    }

    fn set_auto_archive(&mut self, mode: AutoArchive) {
        self.auto_archive = mode;
    }

    fn write_to_db(&mut self) {
        self.write_count += 1;
    }

    fn schema(&self) -> &Arc<SchemaModule> {
        &self.schema
    }

    fn witness(&self) -> Option<&Witness> {
        self.witness.as_ref()
    }
}
