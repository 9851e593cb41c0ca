use std::sync::Arc;

use farcall_shared::{
    Bundle, EntityId, MethodDescription, MethodExposure, PropertyDescription, RoleKind,
    SchemaModule,
};

use crate::{entity::EntityRegistry, error::EntityCallError};

use super::{
    component::ComponentCall,
    entity_call::EntityCall,
    method::RemoteEntityMethod,
    target::{CallClass, CallRoute},
};

/// Call addressed to the cell or base part of a remote entity.
#[derive(Clone)]
pub struct RoleCall {
    role: RoleKind,
    entity_id: EntityId,
    module: Arc<SchemaModule>,
}

impl RoleCall {
    pub fn cell(entity_id: EntityId, module: Arc<SchemaModule>) -> Self {
        Self {
            role: RoleKind::Cell,
            entity_id,
            module,
        }
    }

    pub fn base(entity_id: EntityId, module: Arc<SchemaModule>) -> Self {
        Self {
            role: RoleKind::Base,
            entity_id,
            module,
        }
    }

    pub fn role(&self) -> RoleKind {
        self.role
    }
}

impl EntityCall for RoleCall {
    fn call_class(&self) -> CallClass {
        match self.role {
            RoleKind::Cell => CallClass::Cell,
            RoleKind::Base => CallClass::Base,
        }
    }

    fn target_entity_id(&self) -> EntityId {
        self.entity_id
    }

    fn describe(&self) -> String {
        format!("{} id:{}.", self.call_class().as_str(), self.entity_id)
    }

    fn route(&self) -> CallRoute {
        CallRoute::Role {
            kind: self.role,
            entity_id: self.entity_id,
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

        Ok(self.module.clone())
    }

    fn method_exposure(&self) -> MethodExposure {
        match self.role {
            RoleKind::Cell => MethodExposure::Cell,
            RoleKind::Base => MethodExposure::Base,
        }
    }

    fn create_remote_method(&self, method: &Arc<MethodDescription>) -> RemoteEntityMethod {
        RemoteEntityMethod::new(method.clone(), self.boxed_clone())
    }

    fn component_call(&self, property: &Arc<PropertyDescription>) -> Option<Box<dyn EntityCall>> {
        Some(Box::new(ComponentCall::new(self.clone(), property.clone())))
    }

    fn begin_message(&self, bundle: &mut Bundle) {
        bundle.write_entity_id(self.entity_id);
    }

    fn boxed_clone(&self) -> Box<dyn EntityCall> {
        Box::new(self.clone())
    }
}
