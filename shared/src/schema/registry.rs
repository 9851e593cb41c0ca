use std::{collections::HashMap, sync::Arc};

use log::info;

use crate::schema::module::SchemaModule;

/// Process-lifetime owner of every loaded schema module.
///
/// Calls hold non-owning `Arc` handles into this registry; modules are never
/// replaced or dropped after load.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    modules: HashMap<String, Arc<SchemaModule>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    pub fn register(&mut self, module: SchemaModule) -> Arc<SchemaModule> {
        let module = Arc::new(module);
        info!("registered schema module `{}`", module.name());
        self.modules
            .insert(module.name().to_string(), module.clone());
        module
    }

    pub fn find_module(&self, name: &str) -> Option<&Arc<SchemaModule>> {
        self.modules.get(name)
    }
}
