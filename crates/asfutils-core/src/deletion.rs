//! Deferred deletion of a session's persisted files.
//!
//! A job waits out its delay, then tries every artifact kind in order,
//! canonical file first and `.new` staging file second. Each file is handled
//! on its own: a failure is logged and the remaining files are still tried.
//! Jobs cannot be cancelled. At most one job per session is in flight.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};
use uuid::Uuid;

use asfutils_protocols::{ArtifactKind, ArtifactStore};

use crate::langs;

/// Identity of a scheduled deletion job.
pub type JobId = Uuid;

/// Outcome of one deletion job.
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub session: String,
    /// Files that existed and were removed.
    pub removed: Vec<PathBuf>,
    /// Files that could not be removed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl DeletionReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Handle to a scheduled job. Dropping it leaves the job running.
#[derive(Debug)]
pub struct DeletionJob {
    id: JobId,
    session: String,
    handle: JoinHandle<DeletionReport>,
}

impl DeletionJob {
    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    /// Wait for the job and return its report.
    pub async fn join(self) -> Option<DeletionReport> {
        self.handle.await.ok()
    }
}

/// Schedules deletion jobs and tracks which sessions have one in flight.
pub struct DeletionScheduler {
    artifacts: Arc<dyn ArtifactStore>,
    in_flight: Arc<DashMap<String, JobId>>,
    tracker: TaskTracker,
}

impl DeletionScheduler {
    pub fn new(artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self {
            artifacts,
            in_flight: Arc::new(DashMap::new()),
            tracker: TaskTracker::new(),
        }
    }

    /// Schedule deletion of `session`'s files after `delay`.
    ///
    /// Returns `None` when a job for the same session is still in flight.
    pub fn schedule(&self, session: &str, delay: Duration) -> Option<DeletionJob> {
        let id = Uuid::new_v4();

        match self.in_flight.entry(session.to_string()) {
            Entry::Occupied(existing) => {
                debug!(session = %session, job = %existing.get(), "Deletion already in flight");
                return None;
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        debug!(session = %session, job = %id, delay_ms = delay.as_millis() as u64, "Deletion scheduled");

        let artifacts = self.artifacts.clone();
        let in_flight = self.in_flight.clone();
        let name = session.to_string();

        let handle = self.tracker.spawn(async move {
            let _release = InFlightGuard {
                in_flight,
                session: name.clone(),
                id,
            };
            tokio::time::sleep(delay).await;

            let report = delete_artifacts(artifacts.as_ref(), &name).await;

            warn!(
                session = %name,
                removed = report.removed.len(),
                failed = report.failed.len(),
                "{}",
                langs::SESSION_DELETED
            );
            report
        });

        Some(DeletionJob {
            id,
            session: session.to_string(),
            handle,
        })
    }

    pub fn is_in_flight(&self, session: &str) -> bool {
        self.in_flight.contains_key(session)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Wait until every job scheduled so far has finished.
    pub async fn wait_idle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}

/// Clears a job's in-flight entry when the job ends, including by panic.
struct InFlightGuard {
    in_flight: Arc<DashMap<String, JobId>>,
    session: String,
    id: JobId,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.remove_if(&self.session, |_, job| *job == self.id);
    }
}

/// Delete every artifact of `session` right away.
pub async fn delete_artifacts(artifacts: &dyn ArtifactStore, session: &str) -> DeletionReport {
    let mut report = DeletionReport {
        session: session.to_string(),
        ..Default::default()
    };

    for kind in ArtifactKind::ALL {
        let canonical = artifacts.artifact_path(session, kind);
        let staging = artifacts.staging_path(session, kind);

        for path in [canonical, staging] {
            match remove_if_exists(&path).await {
                Ok(true) => report.removed.push(path),
                Ok(false) => {}
                Err(e) => {
                    warn!(session = %session, kind = ?kind, path = %path.display(), error = %e, "Failed to delete artifact");
                    report.failed.push((path, e.to_string()));
                }
            }
        }
    }

    report
}

/// Remove a file, treating "already gone" as success. Returns whether it existed.
async fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "deletion_tests.rs"]
mod tests;
