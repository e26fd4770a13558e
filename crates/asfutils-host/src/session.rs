//! In-memory bot session.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::info;

use asfutils_protocols::{HostError, Session};

/// A session known to the local host. Farming state is only a flag.
#[derive(Debug)]
pub struct LocalSession {
    name: String,
    paused: AtomicBool,
    paused_by_user: AtomicBool,
}

impl LocalSession {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paused: AtomicBool::new(false),
            paused_by_user: AtomicBool::new(false),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn is_paused_by_user(&self) -> bool {
        self.paused_by_user.load(Ordering::SeqCst)
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
        self.paused_by_user.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl Session for LocalSession {
    fn name(&self) -> &str {
        &self.name
    }

    async fn pause_farming(&self, user_initiated: bool) -> Result<(), HostError> {
        if self.paused.swap(true, Ordering::SeqCst) {
            return Err(HostError::ActionFailed {
                session: self.name.clone(),
                message: "farming is already paused".to_string(),
            });
        }
        self.paused_by_user.store(user_initiated, Ordering::SeqCst);
        info!(session = %self.name, user_initiated, "Farming paused");
        Ok(())
    }
}
