//! Seam to the network substrate. The call layer resolves a channel for a
//! route, serializes into a bundle, and hands the result off; everything
//! past the send queue belongs to the network layer.

use farcall_shared::Bundle;

use crate::call::CallRoute;

/// Identifies one live channel to a peer role or a connected client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(pub u32);

/// Resolves the channel a finished call should travel on.
pub trait ChannelFinder {
    /// Returns `None` when the route has no live channel, e.g. the peer
    /// role is gone or the client has disconnected.
    fn find_channel(&self, route: &CallRoute) -> Option<ChannelId>;
}

/// Opaque send queue of the network layer.
///
/// Ownership of delivery passes here; a handed-off message cannot be
/// recalled.
pub trait NetworkSink {
    fn open_message(&mut self, channel: ChannelId) -> Bundle;

    fn send(&mut self, channel: ChannelId, bundle: Bundle);
}
