//! One-shot hand-off of command dispatch to an external bridge.

use tracing::{debug, info, warn};

use asfutils_protocols::{BridgeRegistration, CommandBridge};

use crate::langs;

/// Who owns command dispatch for the rest of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// The bridge accepted the registration and routes commands itself.
    Bridged,
    /// No bridge, or it refused; commands are routed locally.
    Standalone,
}

impl BridgeState {
    pub fn is_bridged(&self) -> bool {
        matches!(self, BridgeState::Bridged)
    }
}

pub struct BridgeAdapter;

impl BridgeAdapter {
    /// Offer `registration` to the bridge, if there is one. No retries.
    pub fn try_register(
        bridge: Option<&dyn CommandBridge>,
        registration: BridgeRegistration,
    ) -> BridgeState {
        let accepted = match bridge {
            Some(bridge) => bridge.register(registration),
            None => false,
        };

        if accepted {
            debug!("{}", langs::BRIDGE_REGISTER_SUCCESS);
            BridgeState::Bridged
        } else {
            info!("{}", langs::BRIDGE_REGISTER_FAILED);
            warn!("{}", langs::STANDALONE_MODE);
            BridgeState::Standalone
        }
    }
}
