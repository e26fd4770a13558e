//! Host services handed to the plugin at construction.

use std::sync::Arc;

use crate::bridge::CommandBridge;
use crate::session::{ArtifactStore, SessionRegistry};

/// Untyped configuration bag passed by the host at init.
pub type ConfigProperties = serde_json::Map<String, serde_json::Value>;

/// Host collaborators the plugin depends on.
#[derive(Clone)]
pub struct HostContext {
    /// Session lookup by name pattern.
    pub sessions: Arc<dyn SessionRegistry>,

    /// Per-session file locations.
    pub artifacts: Arc<dyn ArtifactStore>,

    /// External command owner, when one is installed.
    pub bridge: Option<Arc<dyn CommandBridge>>,
}

impl HostContext {
    pub fn new(sessions: Arc<dyn SessionRegistry>, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self {
            sessions,
            artifacts,
            bridge: None,
        }
    }

    pub fn with_bridge(mut self, bridge: Arc<dyn CommandBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }
}
