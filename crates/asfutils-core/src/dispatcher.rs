//! Routed command execution with failure isolation.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use asfutils_protocols::{AccessLevel, CommandDispatch, PluginError, Session};

use crate::reporter::{diagnostic, ErrorReporter};
use crate::router::CommandRouter;

/// Runs routed handlers so that their failures never reach the host.
///
/// Shared by the plugin's own command entry point and by a bridge.
pub struct Dispatcher {
    router: CommandRouter,
    reporter: ErrorReporter,
}

impl Dispatcher {
    pub fn new(router: CommandRouter, reporter: ErrorReporter) -> Self {
        Self { router, reporter }
    }

    /// Route and run a command.
    ///
    /// Contract violations come back as `Err`. A handler error or panic is
    /// queued on the reporter and returned as a diagnostic reply.
    pub async fn execute(
        &self,
        session: Arc<dyn Session>,
        access: AccessLevel,
        command: &str,
        args: &[String],
    ) -> Result<Option<String>, PluginError> {
        let Some(handler) = self.router.route(session, access, command, args)? else {
            debug!(command = %command, access = %access, "Command not handled");
            return Ok(None);
        };

        let failure = match tokio::spawn(handler).await {
            Ok(Ok(reply)) => return Ok(Some(reply)),
            Ok(Err(e)) => diagnostic(&e),
            Err(join_err) if join_err.is_panic() => {
                format!("Command panicked: {}", panic_message(join_err.into_panic()))
            }
            Err(join_err) => format!("Command aborted: {}", join_err),
        };

        self.reporter.report(command.to_uppercase(), failure.clone());
        Ok(Some(failure))
    }
}

#[async_trait]
impl CommandDispatch for Dispatcher {
    async fn dispatch(
        &self,
        session: Arc<dyn Session>,
        access: AccessLevel,
        command: &str,
        args: &[String],
    ) -> Result<Option<String>, PluginError> {
        self.execute(session, access, command, args).await
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
