//! # ASF Utils Host
//!
//! A small, local stand-in for the bot host: sessions discovered from a
//! config directory, artifacts stored next to them, and a [`Host`] driver
//! that forwards commands and events to a plugin.

mod host;
mod registry;
mod session;
mod store;

pub use host::{Host, GLOBAL_CONFIG_FILE};
pub use registry::LocalRegistry;
pub use session::LocalSession;
pub use store::FsArtifactStore;
