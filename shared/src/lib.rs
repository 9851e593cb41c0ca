//! # Farcall Shared
//! Common types shared between the farcall server roles: entity and schema
//! identifiers, the entity schema model, typed call arguments, and the
//! outbound message bundle.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod bundle;
mod schema;
mod types;

pub use bundle::Bundle;
pub use schema::{
    DataType, MethodDescription, MethodExposure, PropertyDescription, SchemaError, SchemaModule,
    SchemaRegistry, Value,
};
pub use types::{ComponentSlotId, EntityId, MethodId, RoleKind};
