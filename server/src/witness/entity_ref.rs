use bitflags::bitflags;

use farcall_shared::EntityId;

bitflags! {
    /// Handshake state of one viewed entity within a witness.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EntityRefFlags: u32 {
        /// Entered the view server-side; the client has not acknowledged yet
        const ENTER_CLIENT_PENDING = 1 << 0;
        /// Scheduled to leave the view; the client has not been told yet
        const LEAVE_CLIENT_PENDING = 1 << 1;
    }
}

/// One entity currently inside a viewer's area of interest.
///
/// Holds the viewed entity's id only, never a pointer; liveness is
/// re-checked against the registry at use time.
#[derive(Clone, Debug)]
pub struct EntityRef {
    entity_id: EntityId,
    flags: EntityRefFlags,
}

impl EntityRef {
    /// A ref starts mid-handshake: the client has not been told about the
    /// entity yet.
    pub(crate) fn new(entity_id: EntityId) -> Self {
        Self {
            entity_id,
            flags: EntityRefFlags::ENTER_CLIENT_PENDING,
        }
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn flags(&self) -> EntityRefFlags {
        self.flags
    }

    pub fn is_enter_pending(&self) -> bool {
        self.flags.contains(EntityRefFlags::ENTER_CLIENT_PENDING)
    }

    pub fn is_leave_pending(&self) -> bool {
        self.flags.contains(EntityRefFlags::LEAVE_CLIENT_PENDING)
    }

    pub(crate) fn clear_enter_pending(&mut self) {
        self.flags.remove(EntityRefFlags::ENTER_CLIENT_PENDING);
    }

    pub(crate) fn set_leave_pending(&mut self) {
        self.flags.insert(EntityRefFlags::LEAVE_CLIENT_PENDING);
    }
}
