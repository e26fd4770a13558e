//! # ASF Utils Config
//!
//! Plugin configuration and its resolution from the host property bag.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::{ConfigLoader, CONFIG_KEY};
pub use schema::PluginConfig;
