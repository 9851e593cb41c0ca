use std::sync::Arc;

use farcall_shared::{
    Bundle, EntityId, MethodDescription, MethodExposure, PropertyDescription, SchemaModule,
};

use crate::{entity::EntityRegistry, error::EntityCallError};

use super::{
    entity_call::EntityCall,
    method::RemoteEntityMethod,
    target::{CallClass, CallRoute},
};

/// Broadcast call to every client that currently has the entity in view.
///
/// Only the authoritative instance may broadcast; a cached shadow copy does
/// not own the set of witnesses and is rejected. `other_clients` excludes
/// the entity's own controlling client from the broadcast.
#[derive(Clone)]
pub struct BroadcastClientsCall {
    entity_id: EntityId,
    other_clients: bool,
    module: Arc<SchemaModule>,
}

impl BroadcastClientsCall {
    pub fn new(entity_id: EntityId, other_clients: bool, module: Arc<SchemaModule>) -> Self {
        Self {
            entity_id,
            other_clients,
            module,
        }
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn is_other_clients(&self) -> bool {
        self.other_clients
    }
}

impl EntityCall for BroadcastClientsCall {
    fn call_class(&self) -> CallClass {
        CallClass::ClientBroadcast
    }

    fn target_entity_id(&self) -> EntityId {
        self.entity_id
    }

    fn describe(&self) -> String {
        format!("clients id:{}.", self.entity_id)
    }

    fn route(&self) -> CallRoute {
        CallRoute::Broadcast {
            entity_id: self.entity_id,
            other_clients: self.other_clients,
        }
    }

    fn resolve_target(
        &self,
        registry: &dyn EntityRegistry,
    ) -> Result<Arc<SchemaModule>, EntityCallError> {
        let entity = registry
            .find_entity(self.entity_id)
            .ok_or(EntityCallError::TargetNotFound {
                entity_id: self.entity_id,
            })?;

        if entity.is_destroyed() {
            return Err(EntityCallError::TargetDestroyed {
                entity_id: self.entity_id,
            });
        }

        if !entity.is_real() {
            return Err(EntityCallError::TargetNotAuthoritative {
                entity_id: self.entity_id,
            });
        }

        Ok(self.module.clone())
    }

    fn method_exposure(&self) -> MethodExposure {
        MethodExposure::Client
    }

    fn create_remote_method(&self, method: &Arc<MethodDescription>) -> RemoteEntityMethod {
        RemoteEntityMethod::new(method.clone(), self.boxed_clone())
    }

    fn component_call(&self, property: &Arc<PropertyDescription>) -> Option<Box<dyn EntityCall>> {
        Some(Box::new(BroadcastClientsComponentCall::new(
            self.clone(),
            property.clone(),
        )))
    }

    fn begin_message(&self, bundle: &mut Bundle) {
        bundle.write_entity_id(self.entity_id);
    }

    fn boxed_clone(&self) -> Box<dyn EntityCall> {
        Box::new(self.clone())
    }
}

/// Broadcast call scoped to one component slot of the entity.
#[derive(Clone)]
pub struct BroadcastClientsComponentCall {
    owner: BroadcastClientsCall,
    property: Arc<PropertyDescription>,
}

impl BroadcastClientsComponentCall {
    pub fn new(owner: BroadcastClientsCall, property: Arc<PropertyDescription>) -> Self {
        Self { owner, property }
    }

    pub fn property(&self) -> &Arc<PropertyDescription> {
        &self.property
    }
}

impl EntityCall for BroadcastClientsComponentCall {
    fn call_class(&self) -> CallClass {
        CallClass::ClientBroadcastComponent
    }

    fn target_entity_id(&self) -> EntityId {
        self.owner.entity_id()
    }

    fn describe(&self) -> String {
        format!("component_clients id:{}.", self.owner.entity_id())
    }

    fn route(&self) -> CallRoute {
        self.owner.route()
    }

    fn resolve_target(
        &self,
        registry: &dyn EntityRegistry,
    ) -> Result<Arc<SchemaModule>, EntityCallError> {
        self.owner.resolve_target(registry)?;
        Ok(self.property.component_module().clone())
    }

    fn method_exposure(&self) -> MethodExposure {
        MethodExposure::Client
    }

    fn create_remote_method(&self, method: &Arc<MethodDescription>) -> RemoteEntityMethod {
        RemoteEntityMethod::new(method.clone(), self.boxed_clone())
    }

    fn component_call(&self, _property: &Arc<PropertyDescription>) -> Option<Box<dyn EntityCall>> {
        None
    }

    fn begin_message(&self, bundle: &mut Bundle) {
        self.owner.begin_message(bundle);
        bundle.write_entity_id(self.owner.entity_id());
        bundle.write_component_slot_id(self.property.id());
    }

    fn boxed_clone(&self) -> Box<dyn EntityCall> {
        Box::new(self.clone())
    }
}
