//! Plugin-level errors.

use thiserror::Error;

use super::HostError;

#[derive(Debug, Error)]
pub enum PluginError {
    /// The host passed an access value outside the known enumeration.
    #[error("Invalid access level: {0}")]
    InvalidAccessLevel(i32),

    /// A command arrived without even the command token in `args[0]`.
    #[error("Command dispatched with no arguments")]
    EmptyArguments,

    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl PluginError {
    /// Whether this error means the host broke its own calling contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidAccessLevel(_) | Self::EmptyArguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_access_level_error() {
        let err = PluginError::InvalidAccessLevel(42);
        let display = err.to_string();
        assert!(display.contains("Invalid access level"));
        assert!(display.contains("42"));
    }

    #[test]
    fn test_empty_arguments_error() {
        let err = PluginError::EmptyArguments;
        assert!(err.to_string().contains("no arguments"));
    }

    #[test]
    fn test_host_error_from() {
        let err = PluginError::from(HostError::SessionNotFound("bot".to_string()));
        assert!(matches!(err, PluginError::Host(_)));
        assert!(err.to_string().contains("bot"));
    }

    #[test]
    fn test_contract_violations() {
        assert!(PluginError::InvalidAccessLevel(-1).is_contract_violation());
        assert!(PluginError::EmptyArguments.is_contract_violation());
        assert!(!PluginError::CommandFailed("x".to_string()).is_contract_violation());
        assert!(!PluginError::from(HostError::SessionNotFound("x".to_string())).is_contract_violation());
    }
}
