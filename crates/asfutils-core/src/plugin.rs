//! The ASF Utils plugin.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use asfutils_config::{ConfigLoader, PluginConfig};
use asfutils_protocols::{
    BotCommand, BridgeRegistration, CommandDispatch, ConfigProperties, ConnectionObserver,
    DisconnectReason, FarmingObserver, HostContext, Plugin, PluginError, PluginManifest, Session,
};

use crate::access::AccessGate;
use crate::bridge::{BridgeAdapter, BridgeState};
use crate::commands::{builtin_router, COMMAND_PREFIX};
use crate::deletion::DeletionScheduler;
use crate::dispatcher::Dispatcher;
use crate::hooks::{LifecycleHooks, DEFAULT_DELETION_DELAY};
use crate::langs;
use crate::reporter::{ErrorReporter, ReportDrain};
use crate::router::CommandRouter;

pub const PLUGIN_ID: &str = "ASFUtils";
pub const PLUGIN_NAME: &str = "ASF Utils";
pub const REPO_NAME: &str = "ASFUtils";

/// Command routing plus farming automation for bot sessions.
///
/// Configuration and bridge ownership are each decided once, at `on_init`
/// and `on_loaded` respectively, and never change afterwards.
pub struct AsfUtils {
    manifest: PluginManifest,
    context: HostContext,
    config: OnceLock<PluginConfig>,
    bridge_state: OnceLock<BridgeState>,
    dispatcher: Arc<Dispatcher>,
    hooks: LifecycleHooks,
    report_drain: Mutex<Option<ReportDrain>>,
}

impl AsfUtils {
    pub fn new(context: HostContext) -> Self {
        let manifest = PluginManifest::new(PLUGIN_ID, PLUGIN_NAME, env!("CARGO_PKG_VERSION"))
            .with_description("Command routing and farming automation for ASF bots");
        let router = builtin_router(&manifest, context.sessions.clone());
        Self::with_router(context, manifest, router)
    }

    /// Build the plugin around an explicit command table.
    pub(crate) fn with_router(
        context: HostContext,
        manifest: PluginManifest,
        router: CommandRouter,
    ) -> Self {
        let (reporter, drain) = ErrorReporter::channel();
        let hooks = LifecycleHooks::new(
            DeletionScheduler::new(context.artifacts.clone()),
            DEFAULT_DELETION_DELAY,
        );

        Self {
            manifest,
            context,
            config: OnceLock::new(),
            bridge_state: OnceLock::new(),
            dispatcher: Arc::new(Dispatcher::new(router, reporter)),
            hooks,
            report_drain: Mutex::new(Some(drain)),
        }
    }

    /// Override how long deletion waits after an empty farming cycle.
    pub fn with_deletion_delay(mut self, delay: Duration) -> Self {
        self.hooks = LifecycleHooks::new(
            DeletionScheduler::new(self.context.artifacts.clone()),
            delay,
        );
        self
    }

    /// Active configuration; defaults until `on_init` has run.
    pub fn config(&self) -> PluginConfig {
        self.config.get().copied().unwrap_or_default()
    }

    /// `None` until `on_loaded` has run.
    pub fn bridge_state(&self) -> Option<BridgeState> {
        self.bridge_state.get().copied()
    }

    pub fn is_bridged(&self) -> bool {
        self.bridge_state().is_some_and(|state| state.is_bridged())
    }

    pub fn hooks(&self) -> &LifecycleHooks {
        &self.hooks
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        self.dispatcher.clone()
    }

    /// Startup warning shown while usage terms are not accepted.
    fn eula_warning(&self, config: &PluginConfig) -> Option<String> {
        (!config.eula).then(|| langs::eula_warning(&self.manifest.name))
    }

    async fn run_command(
        &self,
        session: Arc<dyn Session>,
        access: i32,
        args: &[String],
    ) -> Result<Option<String>, PluginError> {
        let access = AccessGate::validate(access)?;
        let command = args.first().map(String::as_str).unwrap_or_default();

        self.dispatcher.execute(session, access, command, args).await
    }

    fn registration(&self) -> BridgeRegistration {
        BridgeRegistration {
            display_name: self.manifest.name.clone(),
            plugin_id: PLUGIN_ID.to_string(),
            command_prefix: COMMAND_PREFIX.to_string(),
            repo_name: REPO_NAME.to_string(),
            handler: self.dispatcher.clone() as Arc<dyn CommandDispatch>,
        }
    }
}

#[async_trait]
impl Plugin for AsfUtils {
    fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    async fn on_init(&self, properties: Option<&ConfigProperties>) -> Result<(), PluginError> {
        let drain = self.report_drain.lock().take();
        if let Some(drain) = drain {
            tokio::spawn(drain.run());
        }

        let resolved = ConfigLoader::from_properties(properties);
        if self.config.set(resolved).is_err() {
            debug!("Configuration already resolved, ignoring repeated init");
            return Ok(());
        }

        let config = self.config();
        if let Some(warning) = self.eula_warning(&config) {
            warn!("{}", langs::LINE);
            warn!("{}", warning);
            warn!("{}", langs::LINE);
        }
        debug!(
            statistic = config.statistic,
            delete_when_farmed = config.delete_when_farmed,
            disable_farming = config.disable_farming,
            "Configuration resolved"
        );

        Ok(())
    }

    async fn on_loaded(&self) -> Result<(), PluginError> {
        info!("{}", langs::PLUGIN_CONTACT);
        info!("{}", langs::PLUGIN_INFO);

        if self.bridge_state.get().is_some() {
            debug!("Bridge registration already attempted");
            return Ok(());
        }

        let state = BridgeAdapter::try_register(self.context.bridge.as_deref(), self.registration());
        let _ = self.bridge_state.set(state);
        Ok(())
    }
}

#[async_trait]
impl BotCommand for AsfUtils {
    async fn on_command(
        &self,
        session: Arc<dyn Session>,
        access: i32,
        _message: &str,
        args: &[String],
        _caller_id: u64,
    ) -> Result<Option<String>, PluginError> {
        if self.is_bridged() {
            return Ok(None);
        }

        let result = self.run_command(session, access, args).await;
        if let Err(e) = &result {
            if e.is_contract_violation() {
                warn!(access, error = %e, "Host sent a malformed command");
            }
        }
        result
    }
}

#[async_trait]
impl FarmingObserver for AsfUtils {
    async fn on_farming_finished(
        &self,
        session: Arc<dyn Session>,
        produced_something: bool,
    ) -> Result<(), PluginError> {
        // The job runs detached; the host must get control back right away.
        let _ = self
            .hooks
            .farming_finished(&self.config(), &*session, produced_something);
        Ok(())
    }

    async fn on_farming_started(&self, session: Arc<dyn Session>) -> Result<(), PluginError> {
        debug!(session = %session.name(), "Farming started");
        Ok(())
    }

    async fn on_farming_stopped(&self, session: Arc<dyn Session>) -> Result<(), PluginError> {
        debug!(session = %session.name(), "Farming stopped");
        Ok(())
    }
}

#[async_trait]
impl ConnectionObserver for AsfUtils {
    async fn on_logged_on(&self, session: Arc<dyn Session>) -> Result<(), PluginError> {
        self.hooks.logged_on(&self.config(), &*session).await
    }

    async fn on_disconnected(
        &self,
        session: Arc<dyn Session>,
        reason: DisconnectReason,
    ) -> Result<(), PluginError> {
        debug!(session = %session.name(), reason = %reason, "Session disconnected");
        Ok(())
    }
}

#[cfg(test)]
#[path = "plugin_tests.rs"]
mod tests;
