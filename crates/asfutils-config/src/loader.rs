//! Configuration loader.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::schema::PluginConfig;

/// Top-level key of the plugin block inside the host config.
pub const CONFIG_KEY: &str = "ASFEnhance";

/// Resolves [`PluginConfig`] from host-provided properties.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the plugin config from the host property bag.
    ///
    /// Only an object under [`CONFIG_KEY`] is considered. A block that fails
    /// to deserialize is logged and skipped; the result is never an error.
    pub fn from_properties(properties: Option<&Map<String, Value>>) -> PluginConfig {
        let Some(properties) = properties else {
            return PluginConfig::default();
        };

        for (key, value) in properties {
            if key != CONFIG_KEY || !value.is_object() {
                continue;
            }

            match serde_json::from_value::<PluginConfig>(value.clone()) {
                Ok(config) => {
                    debug!(key = %key, "Plugin config resolved");
                    return config;
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Malformed plugin config, using defaults");
                }
            }
        }

        PluginConfig::default()
    }

    /// Read a host global config file into a property bag.
    pub fn load_properties(path: &Path) -> Result<Map<String, Value>, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse_properties(&content)
    }

    /// Parse a property bag from JSON text.
    pub fn parse_properties(content: &str) -> Result<Map<String, Value>, ConfigError> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(map) => Ok(map),
            other => Err(ConfigError::InvalidFormat(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn props(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test properties must be an object"),
        }
    }

    #[test]
    fn test_absent_properties_use_defaults() {
        assert_eq!(ConfigLoader::from_properties(None), PluginConfig::default());
    }

    #[test]
    fn test_resolves_plugin_block() {
        let bag = props(json!({
            "SteamOwnerID": "123",
            "ASFEnhance": { "EULA": true, "DeleteWhenFarmed": true }
        }));
        let config = ConfigLoader::from_properties(Some(&bag));
        assert!(config.eula);
        assert!(config.delete_when_farmed);
        assert!(config.statistic);
        assert!(!config.disable_farming);
    }

    #[test]
    fn test_non_object_block_ignored() {
        let bag = props(json!({ "ASFEnhance": [true, false] }));
        assert_eq!(ConfigLoader::from_properties(Some(&bag)), PluginConfig::default());
    }

    #[test]
    fn test_malformed_block_falls_back() {
        let bag = props(json!({ "ASFEnhance": { "DisableFarming": "yes" } }));
        assert_eq!(ConfigLoader::from_properties(Some(&bag)), PluginConfig::default());
    }

    #[test]
    fn test_other_keys_ignored() {
        let bag = props(json!({ "ASFUtils": { "DisableFarming": true } }));
        assert!(!ConfigLoader::from_properties(Some(&bag)).disable_farming);
    }

    #[test]
    fn test_parse_properties_rejects_non_object() {
        let result = ConfigLoader::parse_properties("[1, 2]");
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_properties_invalid_json() {
        let result = ConfigLoader::parse_properties("{ unclosed");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"ASFEnhance": {{"DisableFarming": true}}}}"#).unwrap();

        let bag = ConfigLoader::load_properties(file.path()).unwrap();
        assert!(ConfigLoader::from_properties(Some(&bag)).disable_farming);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_properties(Path::new("/nonexistent/path/ASF.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
