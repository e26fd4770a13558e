//! Shared test doubles for host collaborators.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use asfutils_protocols::{
    ArtifactKind, ArtifactStore, BridgeRegistration, CommandBridge, HostError, Session,
    SessionRegistry,
};

pub struct MockSession {
    name: String,
    fail_pause: bool,
    pub pause_calls: AtomicUsize,
    pub paused_by_user: AtomicBool,
}

impl MockSession {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            fail_pause: false,
            pause_calls: AtomicUsize::new(0),
            paused_by_user: AtomicBool::new(false),
        })
    }

    pub fn failing(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            fail_pause: true,
            pause_calls: AtomicUsize::new(0),
            paused_by_user: AtomicBool::new(false),
        })
    }

    pub fn pauses(&self) -> usize {
        self.pause_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Session for MockSession {
    fn name(&self) -> &str {
        &self.name
    }

    async fn pause_farming(&self, user_initiated: bool) -> Result<(), HostError> {
        self.pause_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_pause {
            return Err(HostError::ActionFailed {
                session: self.name.clone(),
                message: "pause rejected".to_string(),
            });
        }
        self.paused_by_user.store(user_initiated, Ordering::SeqCst);
        Ok(())
    }
}

/// Registry matching comma-separated exact names.
#[derive(Default)]
pub struct MockRegistry {
    sessions: Vec<Arc<MockSession>>,
}

impl MockRegistry {
    pub fn with(sessions: Vec<Arc<MockSession>>) -> Arc<Self> {
        Arc::new(Self { sessions })
    }
}

impl SessionRegistry for MockRegistry {
    fn find(&self, pattern: &str) -> Vec<Arc<dyn Session>> {
        pattern
            .split(',')
            .filter_map(|name| self.sessions.iter().find(|s| s.name == name.trim()))
            .map(|s| s.clone() as Arc<dyn Session>)
            .collect()
    }
}

/// Store laying artifacts out flat in one directory.
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: &Path) -> Arc<Self> {
        Arc::new(Self {
            dir: dir.to_path_buf(),
        })
    }
}

impl ArtifactStore for DirStore {
    fn artifact_path(&self, session: &str, kind: ArtifactKind) -> PathBuf {
        self.dir.join(format!("{}.{:?}", session, kind))
    }
}

/// Write every canonical artifact and its staging variant for `session`.
pub fn seed_artifacts(store: &dyn ArtifactStore, session: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for kind in ArtifactKind::ALL {
        for path in [store.artifact_path(session, kind), store.staging_path(session, kind)] {
            std::fs::write(&path, b"data").unwrap();
            paths.push(path);
        }
    }
    paths
}

pub struct MockBridge {
    accept: bool,
    pub registrations: Mutex<Vec<BridgeRegistration>>,
}

impl MockBridge {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            accept: true,
            registrations: Mutex::new(Vec::new()),
        })
    }

    pub fn refusing() -> Arc<Self> {
        Arc::new(Self {
            accept: false,
            registrations: Mutex::new(Vec::new()),
        })
    }
}

impl CommandBridge for MockBridge {
    fn register(&self, registration: BridgeRegistration) -> bool {
        self.registrations.lock().push(registration);
        self.accept
    }
}

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
