use std::sync::Arc;

use farcall_shared::{
    Bundle, EntityId, MethodDescription, MethodExposure, PropertyDescription, SchemaModule,
};

use crate::{
    entity::{Entity, EntityRegistry},
    error::EntityCallError,
};

use super::{
    entity_call::EntityCall,
    method::RemoteEntityMethod,
    target::{CallClass, CallRoute},
};

/// Call into the client-side instance of a viewed entity, as seen by the
/// client controlling `src_entity_id`.
///
/// The viewed entity must be part of that client's acknowledged view: an
/// entity mid-handshake into the view is not yet a valid call target, so a
/// remote invocation can never reach a client that does not know the entity
/// exists.
#[derive(Clone)]
pub struct ClientCall {
    src_entity_id: EntityId,
    client_entity_id: EntityId,
}

impl ClientCall {
    pub fn new(src_entity_id: EntityId, client_entity_id: EntityId) -> Self {
        Self {
            src_entity_id,
            client_entity_id,
        }
    }

    pub fn src_entity_id(&self) -> EntityId {
        self.src_entity_id
    }

    pub fn client_entity_id(&self) -> EntityId {
        self.client_entity_id
    }

    /// Viewer -> witness -> visible ref -> viewed entity.
    pub(crate) fn resolve_viewed<'r>(
        &self,
        registry: &'r dyn EntityRegistry,
    ) -> Result<&'r dyn Entity, EntityCallError> {
        let src_entity =
            registry
                .find_entity(self.src_entity_id)
                .ok_or(EntityCallError::TargetNotFound {
                    entity_id: self.src_entity_id,
                })?;

        if src_entity.is_destroyed() {
            return Err(EntityCallError::TargetDestroyed {
                entity_id: self.src_entity_id,
            });
        }

        let witness = src_entity
            .witness()
            .ok_or(EntityCallError::NoClientChannel {
                entity_id: self.src_entity_id,
            })?;

        if !witness.visible(self.client_entity_id) {
            return Err(EntityCallError::ViewNotEstablished {
                src_entity_id: self.src_entity_id,
                viewed_entity_id: self.client_entity_id,
            });
        }

        // the ref is only an id; a viewed entity gone from the registry is a
        // stale view the gate has not observed yet
        registry
            .find_entity(self.client_entity_id)
            .ok_or(EntityCallError::ViewNotEstablished {
                src_entity_id: self.src_entity_id,
                viewed_entity_id: self.client_entity_id,
            })
    }
}

impl EntityCall for ClientCall {
    fn call_class(&self) -> CallClass {
        CallClass::Client
    }

    fn target_entity_id(&self) -> EntityId {
        self.client_entity_id
    }

    fn describe(&self) -> String {
        format!(
            "clientEntity id:{}, srcEntityID={}.",
            self.client_entity_id, self.src_entity_id
        )
    }

    fn route(&self) -> CallRoute {
        CallRoute::Client {
            src_entity_id: self.src_entity_id,
        }
    }

    fn resolve_target(
        &self,
        registry: &dyn EntityRegistry,
    ) -> Result<Arc<SchemaModule>, EntityCallError> {
        let viewed = self.resolve_viewed(registry)?;
        Ok(viewed.schema().clone())
    }

    fn method_exposure(&self) -> MethodExposure {
        MethodExposure::Client
    }

    fn create_remote_method(&self, method: &Arc<MethodDescription>) -> RemoteEntityMethod {
        RemoteEntityMethod::new(method.clone(), self.boxed_clone())
    }

    fn component_call(&self, property: &Arc<PropertyDescription>) -> Option<Box<dyn EntityCall>> {
        Some(Box::new(ClientComponentCall::new(
            self.clone(),
            property.clone(),
        )))
    }

    fn begin_message(&self, bundle: &mut Bundle) {
        bundle.write_entity_id(self.client_entity_id);
    }

    fn boxed_clone(&self) -> Box<dyn EntityCall> {
        Box::new(self.clone())
    }
}

/// Client call scoped to one component slot of the viewed entity.
#[derive(Clone)]
pub struct ClientComponentCall {
    owner: ClientCall,
    property: Arc<PropertyDescription>,
}

impl ClientComponentCall {
    pub fn new(owner: ClientCall, property: Arc<PropertyDescription>) -> Self {
        Self { owner, property }
    }

    pub fn property(&self) -> &Arc<PropertyDescription> {
        &self.property
    }
}

impl EntityCall for ClientComponentCall {
    fn call_class(&self) -> CallClass {
        CallClass::ClientComponent
    }

    fn target_entity_id(&self) -> EntityId {
        self.owner.client_entity_id()
    }

    fn describe(&self) -> String {
        format!(
            "clientEntityComponent id:{}, srcEntityID={}.",
            self.owner.client_entity_id(),
            self.owner.src_entity_id()
        )
    }

    fn route(&self) -> CallRoute {
        self.owner.route()
    }

    fn resolve_target(
        &self,
        registry: &dyn EntityRegistry,
    ) -> Result<Arc<SchemaModule>, EntityCallError> {
        self.owner.resolve_viewed(registry)?;
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
        bundle.write_entity_id(self.owner.client_entity_id());
        bundle.write_component_slot_id(self.property.id());
    }

    fn boxed_clone(&self) -> Box<dyn EntityCall> {
        Box::new(self.clone())
    }
}
