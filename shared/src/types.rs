pub type EntityId = i32;
pub type MethodId = u16;
pub type ComponentSlotId = u16;

/// Which server role a call or a channel is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoleKind {
    /// Spatial/logic role
    Cell,
    /// Persistence/client-facing role
    Base,
}

impl RoleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleKind::Cell => "cell",
            RoleKind::Base => "base",
        }
    }
}
