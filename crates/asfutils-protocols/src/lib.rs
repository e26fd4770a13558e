//! # ASF Utils Protocols
//!
//! Contract between the ASF Utils plugin and the bot host it is attached to.
//! Contains only interface definitions - no implementations.
//!
//! ## Inbound (host calls the plugin)
//!
//! - [`Plugin`] - Init and load notifications
//! - [`BotCommand`] - Operator command text
//! - [`FarmingObserver`] - Farming cycle events
//! - [`ConnectionObserver`] - Logon and disconnect events
//!
//! ## Outbound (plugin calls the host)
//!
//! - [`Session`] / [`SessionRegistry`] - Bot sessions
//! - [`ArtifactStore`] - Per-session file locations
//! - [`CommandBridge`] - Optional external command owner

pub mod access;
pub mod bridge;
pub mod error;
pub mod plugin;
pub mod session;

pub use access::AccessLevel;
pub use bridge::{BridgeRegistration, CommandBridge, CommandDispatch};
pub use error::{HostError, PluginError};
pub use plugin::{
    BotCommand, ConfigProperties, ConnectionObserver, DisconnectReason, FarmingObserver,
    HostContext, Plugin, PluginManifest,
};
pub use session::{ArtifactKind, ArtifactStore, Session, SessionRegistry};
