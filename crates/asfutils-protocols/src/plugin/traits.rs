//! Plugin trait definitions.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ConfigProperties, PluginManifest};
use crate::error::PluginError;
use crate::session::Session;

/// Core trait every plugin implements.
#[async_trait]
pub trait Plugin: Send + Sync + 'static {
    /// Returns the plugin manifest.
    fn manifest(&self) -> &PluginManifest;

    /// Called once when the host starts, with its extra config properties.
    async fn on_init(&self, properties: Option<&ConfigProperties>) -> Result<(), PluginError>;

    /// Called once after every plugin has been initialized.
    async fn on_loaded(&self) -> Result<(), PluginError>;
}

/// Plugins that answer operator commands.
#[async_trait]
pub trait BotCommand: Plugin {
    /// Handle a command issued to `session`.
    ///
    /// `access` is the raw host value and is validated before anything else.
    /// `args[0]` is the command token. `Ok(None)` means "not handled here".
    async fn on_command(
        &self,
        session: Arc<dyn Session>,
        access: i32,
        message: &str,
        args: &[String],
        caller_id: u64,
    ) -> Result<Option<String>, PluginError>;
}

/// Plugins that follow card-farming cycles.
#[async_trait]
pub trait FarmingObserver: Plugin {
    async fn on_farming_finished(
        &self,
        session: Arc<dyn Session>,
        produced_something: bool,
    ) -> Result<(), PluginError>;

    async fn on_farming_started(&self, _session: Arc<dyn Session>) -> Result<(), PluginError> {
        Ok(())
    }

    async fn on_farming_stopped(&self, _session: Arc<dyn Session>) -> Result<(), PluginError> {
        Ok(())
    }
}

/// Plugins that follow session connectivity.
#[async_trait]
pub trait ConnectionObserver: Plugin {
    async fn on_logged_on(&self, session: Arc<dyn Session>) -> Result<(), PluginError>;

    async fn on_disconnected(
        &self,
        _session: Arc<dyn Session>,
        _reason: DisconnectReason,
    ) -> Result<(), PluginError> {
        Ok(())
    }
}

/// Why the host lost a session's connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisconnectReason {
    Ok,
    NoConnection,
    LoggedInElsewhere,
    ServiceUnavailable,
    Other(i32),
}

impl fmt::Display for DisconnectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisconnectReason::Ok => f.write_str("OK"),
            DisconnectReason::NoConnection => f.write_str("NoConnection"),
            DisconnectReason::LoggedInElsewhere => f.write_str("LoggedInElsewhere"),
            DisconnectReason::ServiceUnavailable => f.write_str("ServiceUnavailable"),
            DisconnectReason::Other(code) => write!(f, "Other({})", code),
        }
    }
}
