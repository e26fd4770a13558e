//! Inbound plugin protocol: what the host calls on the plugin.

mod context;
mod manifest;
mod traits;

pub use context::*;
pub use manifest::*;
pub use traits::*;
