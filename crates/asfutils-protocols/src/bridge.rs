//! Hand-off point for an external module that takes over command dispatch.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::access::AccessLevel;
use crate::error::PluginError;
use crate::session::Session;

/// Entry point a bridge calls to run one of this plugin's commands.
#[async_trait]
pub trait CommandDispatch: Send + Sync {
    /// Run `command` for `session`.
    ///
    /// Returns `Ok(None)` when the command is not handled here.
    async fn dispatch(
        &self,
        session: Arc<dyn Session>,
        access: AccessLevel,
        command: &str,
        args: &[String],
    ) -> Result<Option<String>, PluginError>;
}

/// Everything a bridge needs to route commands to this plugin.
#[derive(Clone)]
pub struct BridgeRegistration {
    pub display_name: String,
    pub plugin_id: String,
    pub command_prefix: String,
    pub repo_name: String,
    pub handler: Arc<dyn CommandDispatch>,
}

impl fmt::Debug for BridgeRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeRegistration")
            .field("display_name", &self.display_name)
            .field("plugin_id", &self.plugin_id)
            .field("command_prefix", &self.command_prefix)
            .field("repo_name", &self.repo_name)
            .finish_non_exhaustive()
    }
}

/// An optionally present external module that can own command dispatch.
pub trait CommandBridge: Send + Sync {
    /// Offer the registration. `true` means the bridge now owns dispatch.
    fn register(&self, registration: BridgeRegistration) -> bool;
}
