use farcall_shared::{EntityId, RoleKind};

/// Discriminates the call variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallClass {
    Cell,
    Base,
    Client,
    EntityComponent,
    ClientComponent,
    ClientBroadcast,
    ClientBroadcastComponent,
}

impl CallClass {
    /// Stable name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            CallClass::Cell => "cell",
            CallClass::Base => "base",
            CallClass::Client => "clientEntity",
            CallClass::EntityComponent => "component",
            CallClass::ClientComponent => "clientEntityComponent",
            CallClass::ClientBroadcast => "clients",
            CallClass::ClientBroadcastComponent => "component_clients",
        }
    }
}

/// Where a finished call is routed.
///
/// The core stamps the route and hands one serialized message to the network
/// layer; fan-out for broadcasts is that layer's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallRoute {
    /// To the server role currently hosting the entity
    Role {
        kind: RoleKind,
        entity_id: EntityId,
    },
    /// Down the client channel owned by the viewing entity
    Client { src_entity_id: EntityId },
    /// To every client that currently has the entity in view;
    /// `other_clients` excludes the entity's own controlling client
    Broadcast {
        entity_id: EntityId,
        other_clients: bool,
    },
}
