//! Errors raised by host-side collaborators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Action failed for {session}: {message}")]
    ActionFailed { session: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
