use std::collections::HashMap;

use farcall_server::GenericAttributes;
use farcall_shared::Value;

/// Script fallback that knows nothing.
pub struct NoFallback;

impl GenericAttributes for NoFallback {
    fn generic_get_attribute(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// Script fallback backed by a fixed attribute map.
#[derive(Default)]
pub struct MapFallback {
    attributes: HashMap<String, Value>,
}

impl MapFallback {
    pub fn new() -> Self {
        Self {
            attributes: HashMap::new(),
        }
    }

    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }
}

impl GenericAttributes for MapFallback {
    fn generic_get_attribute(&self, name: &str) -> Option<Value> {
        self.attributes.get(name).cloned()
    }
}
