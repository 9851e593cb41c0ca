use std::{collections::HashMap, sync::Arc};

use crate::schema::{
    method::{MethodDescription, MethodExposure},
    property::PropertyDescription,
};

/// The schema of one entity (or entity component) type: its remotely
/// invokable methods keyed by exposure, and its component slots.
///
/// Built once during schema load, then immutable behind an `Arc` for the
/// process lifetime.
#[derive(Debug, Default)]
pub struct SchemaModule {
    name: String,
    cell_methods: HashMap<String, Arc<MethodDescription>>,
    base_methods: HashMap<String, Arc<MethodDescription>>,
    client_methods: HashMap<String, Arc<MethodDescription>>,
    component_properties: HashMap<String, Arc<PropertyDescription>>,
}

impl SchemaModule {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cell_methods: HashMap::new(),
            base_methods: HashMap::new(),
            client_methods: HashMap::new(),
            component_properties: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_method(&mut self, method: MethodDescription) {
        let table = match method.exposure() {
            MethodExposure::Cell => &mut self.cell_methods,
            MethodExposure::Base => &mut self.base_methods,
            MethodExposure::Client => &mut self.client_methods,
        };
        table.insert(method.name().to_string(), Arc::new(method));
    }

    pub fn add_component_property(&mut self, property: PropertyDescription) {
        self.component_properties
            .insert(property.name().to_string(), Arc::new(property));
    }

    pub fn find_method_by_name(
        &self,
        name: &str,
        exposure: MethodExposure,
    ) -> Option<&Arc<MethodDescription>> {
        let table = match exposure {
            MethodExposure::Cell => &self.cell_methods,
            MethodExposure::Base => &self.base_methods,
            MethodExposure::Client => &self.client_methods,
        };
        table.get(name)
    }

    pub fn find_component_property_by_name(
        &self,
        name: &str,
    ) -> Option<&Arc<PropertyDescription>> {
        self.component_properties.get(name)
    }
}
