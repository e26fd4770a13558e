//! Local host driver: owns the sessions and forwards host events to a plugin.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use asfutils_protocols::{
    AccessLevel, BotCommand, CommandBridge, ConfigProperties, ConnectionObserver,
    DisconnectReason, FarmingObserver, HostContext, HostError, Plugin, PluginError, Session,
};

use crate::registry::LocalRegistry;
use crate::session::LocalSession;
use crate::store::FsArtifactStore;

/// Host-wide config file living next to the bot configs.
pub const GLOBAL_CONFIG_FILE: &str = "ASF.json";

/// Minimal bot host backed by a config directory.
pub struct Host {
    registry: Arc<LocalRegistry>,
    store: Arc<FsArtifactStore>,
    bridge: Option<Arc<dyn CommandBridge>>,
}

impl Host {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry: Arc::new(LocalRegistry::new()),
            store: Arc::new(FsArtifactStore::new(config_dir)),
            bridge: None,
        }
    }

    /// Install an external command bridge offered to plugins on load.
    pub fn with_bridge(mut self, bridge: Arc<dyn CommandBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn config_dir(&self) -> &Path {
        self.store.config_dir()
    }

    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir().join(GLOBAL_CONFIG_FILE)
    }

    pub fn registry(&self) -> &Arc<LocalRegistry> {
        &self.registry
    }

    pub fn store(&self) -> &Arc<FsArtifactStore> {
        &self.store
    }

    /// Register the sessions found in the config directory.
    pub fn discover(&self) -> Result<usize, HostError> {
        self.registry.discover(self.store.config_dir())
    }

    /// Collaborators handed to a plugin at construction.
    pub fn context(&self) -> HostContext {
        let context = HostContext::new(self.registry.clone(), self.store.clone());
        match &self.bridge {
            Some(bridge) => context.with_bridge(bridge.clone()),
            None => context,
        }
    }

    /// Run the init and load notifications.
    pub async fn load<P>(&self, plugin: &P, properties: Option<&ConfigProperties>) -> Result<(), PluginError>
    where
        P: Plugin + ?Sized,
    {
        let manifest = plugin.manifest();
        info!("Loading plugin: {} v{}", manifest.name, manifest.version);

        plugin.on_init(properties).await?;
        plugin.on_loaded().await?;

        info!("Plugin loaded: {}", manifest.id);
        Ok(())
    }

    /// Issue operator command `text` to session `bot`.
    pub async fn command<P>(
        &self,
        plugin: &P,
        bot: &str,
        access: AccessLevel,
        text: &str,
    ) -> Result<Option<String>, PluginError>
    where
        P: BotCommand + ?Sized,
    {
        let session = self.session(bot)?;
        let args: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        debug!(bot = %bot, access = %access, command = %text, "Dispatching command");
        plugin.on_command(session, access as i32, text, &args, 0).await
    }

    pub async fn farming_finished<P>(
        &self,
        plugin: &P,
        bot: &str,
        produced_something: bool,
    ) -> Result<(), PluginError>
    where
        P: FarmingObserver + ?Sized,
    {
        let session = self.session(bot)?;
        plugin.on_farming_finished(session, produced_something).await
    }

    pub async fn logged_on<P>(&self, plugin: &P, bot: &str) -> Result<(), PluginError>
    where
        P: ConnectionObserver + ?Sized,
    {
        let session = self.session(bot)?;
        plugin.on_logged_on(session).await
    }

    pub async fn disconnected<P>(
        &self,
        plugin: &P,
        bot: &str,
        reason: DisconnectReason,
    ) -> Result<(), PluginError>
    where
        P: ConnectionObserver + ?Sized,
    {
        let session = self.session(bot)?;
        plugin.on_disconnected(session, reason).await
    }

    /// Look up a session by exact name.
    pub fn local_session(&self, bot: &str) -> Option<Arc<LocalSession>> {
        self.registry.get(bot)
    }

    fn session(&self, bot: &str) -> Result<Arc<dyn Session>, HostError> {
        self.registry
            .get(bot)
            .map(|s| s as Arc<dyn Session>)
            .ok_or_else(|| HostError::SessionNotFound(bot.to_string()))
    }
}
