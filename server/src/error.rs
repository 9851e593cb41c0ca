use thiserror::Error;

use farcall_shared::{EntityId, SchemaError};

/// Errors that can occur while resolving or invoking a remote entity call.
///
/// Every variant is recoverable and local: the offending call is dropped and
/// the error is reported to the invoking script context. None of these
/// terminate the process or corrupt registry state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityCallError {
    /// Target entity is absent from the registry
    #[error("entity({entity_id}) not found")]
    TargetNotFound { entity_id: EntityId },

    /// Target entity exists but has been destroyed
    #[error("entity({entity_id}) is destroyed")]
    TargetDestroyed { entity_id: EntityId },

    /// Broadcast requested on a cached shadow instead of the real instance
    #[error("entity({entity_id}) is not the real entity")]
    TargetNotAuthoritative { entity_id: EntityId },

    /// Viewing entity has no client attached, so no witness to consult
    #[error("no client, srcEntityID({entity_id})")]
    NoClientChannel { entity_id: EntityId },

    /// Viewed entity is not (yet) part of the client's acknowledged view
    #[error("entity({viewed_entity_id}) is not in the client view of entity({src_entity_id})")]
    ViewNotEstablished {
        src_entity_id: EntityId,
        viewed_entity_id: EntityId,
    },

    /// Neither the schema nor the generic attribute fallback knows the name
    #[error("attribute `{attribute}` not found on module `{module}`")]
    AttributeNotFound { module: String, attribute: String },

    /// The call's route resolves to no live channel
    #[error("no channel for call to entity({entity_id})")]
    ChannelNotFound { entity_id: EntityId },

    /// Arguments did not match the method's parameter schema
    #[error(transparent)]
    Arguments(#[from] SchemaError),
}
