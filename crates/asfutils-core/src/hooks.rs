//! Automation rules applied to host session events.

use std::time::Duration;

use tracing::{debug, info};

use asfutils_config::PluginConfig;
use asfutils_protocols::{PluginError, Session};

use crate::deletion::{DeletionJob, DeletionScheduler};

/// Wait before deleting the files of a bot that ran out of cards to farm.
pub const DEFAULT_DELETION_DELAY: Duration = Duration::from_millis(3000);

/// Per-session automation driven by host events.
pub struct LifecycleHooks {
    deletions: DeletionScheduler,
    deletion_delay: Duration,
}

impl LifecycleHooks {
    pub fn new(deletions: DeletionScheduler, deletion_delay: Duration) -> Self {
        Self {
            deletions,
            deletion_delay,
        }
    }

    pub fn deletions(&self) -> &DeletionScheduler {
        &self.deletions
    }

    /// A farming cycle ended.
    ///
    /// With `DeleteWhenFarmed` on and nothing produced, the session's files
    /// are scheduled for deletion. The schedule is not debounced: a session
    /// that resumes before the delay elapses is still deleted.
    pub fn farming_finished(
        &self,
        config: &PluginConfig,
        session: &dyn Session,
        produced_something: bool,
    ) -> Option<DeletionJob> {
        if !config.delete_when_farmed || produced_something {
            return None;
        }

        debug!(session = %session.name(), "Farming finished with nothing produced");
        self.deletions.schedule(session.name(), self.deletion_delay)
    }

    /// A session logged on. With `DisableFarming` on, farming is paused.
    ///
    /// A pause failure is returned to the host.
    pub async fn logged_on(
        &self,
        config: &PluginConfig,
        session: &dyn Session,
    ) -> Result<(), PluginError> {
        if !config.disable_farming {
            return Ok(());
        }

        info!(session = %session.name(), "Pausing farming on logon");
        session.pause_farming(true).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
