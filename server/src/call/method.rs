use std::sync::Arc;

use log::warn;

use farcall_shared::{MethodDescription, Value};

use crate::{
    entity::EntityRegistry,
    error::EntityCallError,
    transport::{ChannelFinder, NetworkSink},
};

use super::entity_call::EntityCall;

/// A method description bound to a concrete call target.
///
/// Created fresh by each successful attribute resolution and consumed by at
/// most one invocation. Holds ids only; it never owns the target entity.
pub struct RemoteEntityMethod {
    method: Arc<MethodDescription>,
    call: Box<dyn EntityCall>,
}

impl RemoteEntityMethod {
    pub(crate) fn new(method: Arc<MethodDescription>, call: Box<dyn EntityCall>) -> Self {
        Self { method, call }
    }

    pub fn method(&self) -> &MethodDescription {
        &self.method
    }

    pub fn describe(&self) -> String {
        format!("{} method:{}", self.call.describe(), self.method.name())
    }

    /// Serializes this call into a routed message and hands it to the
    /// network layer's send queue. Delivery is fire-and-forget from here on.
    ///
    /// The target is re-resolved first: a target that has died or left the
    /// client's view since resolution fails here instead of producing a
    /// misrouted message. On any failure the call is dropped and nothing is
    /// sent.
    pub fn invoke(
        self,
        args: &[Value],
        registry: &dyn EntityRegistry,
        channels: &dyn ChannelFinder,
        net: &mut dyn NetworkSink,
    ) -> Result<(), EntityCallError> {
        self.call.resolve_target(registry)?;
        self.method.check_args(args)?;

        let route = self.call.route();
        let Some(channel) = channels.find_channel(&route) else {
            warn!("dropping {}: no channel for route", self.describe());
            return Err(EntityCallError::ChannelNotFound {
                entity_id: self.call.target_entity_id(),
            });
        };

        let mut bundle = net.open_message(channel);
        self.call.begin_message(&mut bundle);
        bundle.write_method_id(self.method.id());
        self.method.write_args(args, &mut bundle);
        net.send(channel, bundle);

        Ok(())
    }
}
