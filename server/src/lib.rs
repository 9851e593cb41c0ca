//! # Farcall Server
//! Server-side proxy layer for invoking methods on entity instances that
//! live on another role or on a connected client: attribute access on a
//! call object resolves against the target's schema, is gated on target
//! liveness and client visibility, and serializes into a routed message.
//! Also hosts the time-sliced archiver that spreads entity persistence
//! evenly over the configured archive period.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use farcall_shared::{
        Bundle, ComponentSlotId, DataType, EntityId, MethodDescription, MethodExposure, MethodId,
        PropertyDescription, RoleKind, SchemaError, SchemaModule, SchemaRegistry, Value,
    };
}

mod archiver;
mod call;
mod entity;
mod error;
mod script;
mod server_config;
mod transport;
mod witness;

pub use archiver::Archiver;
pub use call::{
    resolve_attribute, Attribute, BroadcastClientsCall, BroadcastClientsComponentCall, CallClass,
    CallRoute, ClientCall, ClientComponentCall, ComponentCall, EntityCall, RemoteEntityMethod,
    Resolved, RoleCall,
};
pub use entity::{AutoArchive, Entity, EntityRegistry};
pub use error::EntityCallError;
pub use script::GenericAttributes;
pub use server_config::ServerConfig;
pub use transport::{ChannelFinder, ChannelId, NetworkSink};
pub use witness::{EntityRef, EntityRefFlags, Witness};
