//! Access-level validation at the host boundary.

use asfutils_protocols::{AccessLevel, PluginError};

/// Gate every command passes before lookup.
pub struct AccessGate;

impl AccessGate {
    /// Convert the raw host value, failing on anything outside [`AccessLevel`].
    pub fn validate(raw: i32) -> Result<AccessLevel, PluginError> {
        AccessLevel::try_from(raw)
    }
}
