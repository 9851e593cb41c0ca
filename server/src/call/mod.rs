pub(crate) mod all_clients;
pub(crate) mod client;
pub(crate) mod component;
pub(crate) mod entity_call;
pub(crate) mod method;
pub(crate) mod role_call;
pub(crate) mod target;

pub use all_clients::{BroadcastClientsCall, BroadcastClientsComponentCall};
pub use client::{ClientCall, ClientComponentCall};
pub use component::ComponentCall;
pub use entity_call::{EntityCall, Resolved};
pub use method::RemoteEntityMethod;
pub use role_call::RoleCall;
pub use target::{CallClass, CallRoute};

use farcall_shared::Value;

use crate::{entity::EntityRegistry, error::EntityCallError, script::GenericAttributes};

/// A fully resolved attribute, after schema lookup and generic fallback.
pub enum Attribute {
    Method(RemoteEntityMethod),
    Component(Box<dyn EntityCall>),
    Value(Value),
}

/// Two-stage attribute dispatch: typed schema lookup first, the scripting
/// layer's generic object-attribute fallback only on a miss.
pub fn resolve_attribute(
    call: &dyn EntityCall,
    registry: &dyn EntityRegistry,
    fallback: &dyn GenericAttributes,
    name: &str,
) -> Result<Attribute, EntityCallError> {
    match call.resolve_attribute(registry, name)? {
        Resolved::Method(method) => Ok(Attribute::Method(method)),
        Resolved::Component(component) => Ok(Attribute::Component(component)),
        Resolved::Miss => {
            if let Some(value) = fallback.generic_get_attribute(name) {
                return Ok(Attribute::Value(value));
            }
            let module = call.resolve_target(registry)?;
            Err(EntityCallError::AttributeNotFound {
                module: module.name().to_string(),
                attribute: name.to_string(),
            })
        }
    }
}
