//! Operator access levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PluginError;

/// Access level of the caller issuing a command, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AccessLevel {
    Guest = 0,
    FamilySharing = 1,
    Operator = 2,
    Master = 3,
    Owner = 4,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 5] = [
        AccessLevel::Guest,
        AccessLevel::FamilySharing,
        AccessLevel::Operator,
        AccessLevel::Master,
        AccessLevel::Owner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Guest => "Guest",
            AccessLevel::FamilySharing => "FamilySharing",
            AccessLevel::Operator => "Operator",
            AccessLevel::Master => "Master",
            AccessLevel::Owner => "Owner",
        }
    }
}

/// Out-of-range values are rejected, never clamped to the lowest level.
impl TryFrom<i32> for AccessLevel {
    type Error = PluginError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccessLevel::Guest),
            1 => Ok(AccessLevel::FamilySharing),
            2 => Ok(AccessLevel::Operator),
            3 => Ok(AccessLevel::Master),
            4 => Ok(AccessLevel::Owner),
            other => Err(PluginError::InvalidAccessLevel(other)),
        }
    }
}

impl From<AccessLevel> for i32 {
    fn from(level: AccessLevel) -> Self {
        level as i32
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown access level: {}", s))
    }
}
