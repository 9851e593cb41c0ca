use std::sync::Arc;

use farcall_shared::{
    Bundle, EntityId, MethodDescription, MethodExposure, PropertyDescription, SchemaModule,
};

use crate::{entity::EntityRegistry, error::EntityCallError};

use super::{
    method::RemoteEntityMethod,
    target::{CallClass, CallRoute},
};

/// Outcome of a schema lookup on a call object.
pub enum Resolved {
    /// The name is a remotely invokable method, bound to this call's target
    Method(RemoteEntityMethod),
    /// The name is a component slot; the returned call is scoped to it
    Component(Box<dyn EntityCall>),
    /// Neither; the caller should consult the generic attribute fallback
    Miss,
}

/// A local proxy for an entity instance that lives on another role or on a
/// connected client.
///
/// Attribute access resolves a name against the target's schema and yields a
/// bound callable that serializes the invocation into a routed message. The
/// variants differ only in target-resolution policy; the resolution
/// algorithm itself is shared.
pub trait EntityCall {
    fn call_class(&self) -> CallClass;

    /// The entity any produced message is addressed to.
    fn target_entity_id(&self) -> EntityId;

    /// Stable human-readable identity of this call's target.
    fn describe(&self) -> String;

    /// Route of any message produced by this call.
    fn route(&self) -> CallRoute;

    /// Applies this variant's target-resolution policy and returns the
    /// schema module that attribute lookup is restricted to.
    fn resolve_target(
        &self,
        registry: &dyn EntityRegistry,
    ) -> Result<Arc<SchemaModule>, EntityCallError>;

    /// Which method table of the schema this call searches.
    fn method_exposure(&self) -> MethodExposure;

    /// Binds `method` to this call's target, producing a callable that is
    /// consumed by at most one invocation.
    fn create_remote_method(&self, method: &Arc<MethodDescription>) -> RemoteEntityMethod;

    /// Component-scoped sub-call for `property`, for variants that chain.
    /// Already-component-scoped calls return `None`.
    fn component_call(&self, property: &Arc<PropertyDescription>) -> Option<Box<dyn EntityCall>>;

    /// Writes the routing header: the target entity id, then for
    /// component-scoped calls the owning entity id followed by the component
    /// slot id. Always written ahead of the method id and argument payload.
    fn begin_message(&self, bundle: &mut Bundle);

    fn boxed_clone(&self) -> Box<dyn EntityCall>;

    /// Looks `name` up against the target's schema, after validating the
    /// target itself.
    fn resolve_attribute(
        &self,
        registry: &dyn EntityRegistry,
        name: &str,
    ) -> Result<Resolved, EntityCallError> {
        let module = self.resolve_target(registry)?;

        if let Some(method) = module.find_method_by_name(name, self.method_exposure()) {
            return Ok(Resolved::Method(self.create_remote_method(method)));
        }

        if let Some(property) = module.find_component_property_by_name(name) {
            if let Some(call) = self.component_call(property) {
                return Ok(Resolved::Component(call));
            }
        }

        Ok(Resolved::Miss)
    }
}
