use std::sync::Arc;

use crate::{schema::module::SchemaModule, types::ComponentSlotId};

/// Describes one component slot of an entity schema.
///
/// Carries the component's own schema module; attribute lookups on a
/// component-scoped call are restricted to that module.
#[derive(Debug)]
pub struct PropertyDescription {
    name: String,
    id: ComponentSlotId,
    component_module: Arc<SchemaModule>,
}

impl PropertyDescription {
    pub fn new(name: &str, id: ComponentSlotId, component_module: Arc<SchemaModule>) -> Self {
        Self {
            name: name.to_string(),
            id,
            component_module,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> ComponentSlotId {
        self.id
    }

    pub fn component_module(&self) -> &Arc<SchemaModule> {
        &self.component_module
    }
}
