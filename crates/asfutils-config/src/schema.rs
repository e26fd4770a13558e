//! Plugin configuration schema.

use serde::{Deserialize, Serialize};

/// Automation switches read from the `ASFEnhance` block of the host config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Operator accepted the usage terms.
    #[serde(rename = "EULA", default)]
    pub eula: bool,

    /// Usage statistics reporting.
    #[serde(rename = "Statistic", default = "default_true")]
    pub statistic: bool,

    /// Delete a bot's files once farming finishes with nothing left to farm.
    #[serde(rename = "DeleteWhenFarmed", default)]
    pub delete_when_farmed: bool,

    /// Pause farming as soon as a bot logs on.
    #[serde(rename = "DisableFarming", default)]
    pub disable_farming: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            eula: false,
            statistic: true,
            delete_when_farmed: false,
            disable_farming: false,
        }
    }
}
