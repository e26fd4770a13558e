//! # ASF Utils Core
//!
//! Command dispatch and lifecycle automation for the ASF Utils plugin.
//!
//! ## Components
//!
//! - [`AccessGate`] - Rejects access values outside the known levels
//! - [`CommandRouter`] - Table-driven command lookup
//! - [`Dispatcher`] - Runs routed handlers with failure isolation
//! - [`BridgeAdapter`] - One-shot hand-off of dispatch to an external bridge
//! - [`LifecycleHooks`] - Automation rules for host session events
//! - [`DeletionScheduler`] - Deferred, per-artifact deletion of session files
//! - [`ErrorReporter`] - Out-of-band error logging channel
//! - [`AsfUtils`] - The plugin wiring all of the above to the host traits

pub mod access;
pub mod bridge;
pub mod commands;
pub mod deletion;
pub mod dispatcher;
pub mod hooks;
pub mod langs;
pub mod plugin;
pub mod reporter;
pub mod response;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use access::AccessGate;
pub use bridge::{BridgeAdapter, BridgeState};
pub use deletion::{DeletionJob, DeletionReport, DeletionScheduler, JobId};
pub use dispatcher::Dispatcher;
pub use hooks::{LifecycleHooks, DEFAULT_DELETION_DELAY};
pub use plugin::AsfUtils;
pub use reporter::{ErrorReport, ErrorReporter, ReportDrain};
pub use router::{Arity, CommandFuture, CommandInvocation, CommandRouter, CommandSpec};
