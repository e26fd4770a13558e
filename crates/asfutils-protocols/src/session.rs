//! Bot sessions and their persisted artifacts, as seen from the plugin.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// A logged-in bot session owned by the host.
///
/// The plugin only ever reads the name and asks the host to pause farming.
#[async_trait]
pub trait Session: Send + Sync {
    /// Unique session name.
    fn name(&self) -> &str;

    /// Ask the host to pause card farming for this session.
    async fn pause_farming(&self, user_initiated: bool) -> Result<(), HostError>;
}

/// Host lookup of sessions by name pattern.
pub trait SessionRegistry: Send + Sync {
    /// Resolve a pattern to zero or more sessions.
    fn find(&self, pattern: &str) -> Vec<Arc<dyn Session>>;
}

/// Category of a per-session file kept by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    Config,
    Database,
    KeysToRedeem,
    KeysToRedeemUsed,
    KeysToRedeemUnused,
    MobileAuthenticator,
}

impl ArtifactKind {
    /// Every artifact kind, in deletion order.
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::Config,
        ArtifactKind::Database,
        ArtifactKind::KeysToRedeem,
        ArtifactKind::KeysToRedeemUsed,
        ArtifactKind::KeysToRedeemUnused,
        ArtifactKind::MobileAuthenticator,
    ];
}

/// Resolves canonical file paths for session artifacts.
pub trait ArtifactStore: Send + Sync {
    /// Canonical path of `kind` for the named session.
    ///
    /// The staging variant lives next to it with a `.new` suffix.
    fn artifact_path(&self, session: &str, kind: ArtifactKind) -> PathBuf;

    /// Staging path written by the host before it swaps files in.
    fn staging_path(&self, session: &str, kind: ArtifactKind) -> PathBuf {
        let mut path = self.artifact_path(session, kind).into_os_string();
        path.push(".new");
        PathBuf::from(path)
    }
}
