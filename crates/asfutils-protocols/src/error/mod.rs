//! Error types shared across the host boundary.

mod host;
mod plugin;

pub use host::*;
pub use plugin::*;
