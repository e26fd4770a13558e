//! Artifact locations inside the host config directory.

use std::path::{Path, PathBuf};

use asfutils_protocols::{ArtifactKind, ArtifactStore};

/// Lays out every artifact as `<config_dir>/<session><suffix>`.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    config_dir: PathBuf,
}

impl FsArtifactStore {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// File suffix used for each artifact kind.
    pub fn suffix(kind: ArtifactKind) -> &'static str {
        match kind {
            ArtifactKind::Config => ".json",
            ArtifactKind::Database => ".db",
            ArtifactKind::KeysToRedeem => ".keys",
            ArtifactKind::KeysToRedeemUsed => ".keys.used",
            ArtifactKind::KeysToRedeemUnused => ".keys.unused",
            ArtifactKind::MobileAuthenticator => ".maFile",
        }
    }
}

impl ArtifactStore for FsArtifactStore {
    fn artifact_path(&self, session: &str, kind: ArtifactKind) -> PathBuf {
        self.config_dir
            .join(format!("{}{}", session, Self::suffix(kind)))
    }
}
