use std::sync::Arc;

use farcall_shared::{
    Bundle, EntityId, MethodDescription, MethodExposure, PropertyDescription, SchemaModule,
};

use crate::{entity::EntityRegistry, error::EntityCallError};

use super::{
    entity_call::EntityCall,
    method::RemoteEntityMethod,
    role_call::RoleCall,
    target::{CallClass, CallRoute},
};

/// Call scoped to one component slot of a remote entity.
///
/// Attribute search is restricted to the component's own schema module and
/// never falls back to the owning entity's schema.
#[derive(Clone)]
pub struct ComponentCall {
    owner: RoleCall,
    property: Arc<PropertyDescription>,
}

impl ComponentCall {
    pub fn new(owner: RoleCall, property: Arc<PropertyDescription>) -> Self {
        Self { owner, property }
    }

    pub fn property(&self) -> &Arc<PropertyDescription> {
        &self.property
    }
}

impl EntityCall for ComponentCall {
    fn call_class(&self) -> CallClass {
        CallClass::EntityComponent
    }

    fn target_entity_id(&self) -> EntityId {
        self.owner.target_entity_id()
    }

    fn describe(&self) -> String {
        format!("component id:{}.", self.owner.target_entity_id())
    }

    fn route(&self) -> CallRoute {
        self.owner.route()
    }

    fn resolve_target(
        &self,
        registry: &dyn EntityRegistry,
    ) -> Result<Arc<SchemaModule>, EntityCallError> {
        // owner liveness first; the component itself has no separate life
        self.owner.resolve_target(registry)?;
        Ok(self.property.component_module().clone())
    }

    fn method_exposure(&self) -> MethodExposure {
        self.owner.method_exposure()
    }

    fn create_remote_method(&self, method: &Arc<MethodDescription>) -> RemoteEntityMethod {
        RemoteEntityMethod::new(method.clone(), self.boxed_clone())
    }

    fn component_call(&self, _property: &Arc<PropertyDescription>) -> Option<Box<dyn EntityCall>> {
        None
    }

    fn begin_message(&self, bundle: &mut Bundle) {
        self.owner.begin_message(bundle);
        bundle.write_entity_id(self.owner.target_entity_id());
        bundle.write_component_slot_id(self.property.id());
    }

    fn boxed_clone(&self) -> Box<dyn EntityCall> {
        Box::new(self.clone())
    }
}
