//! ASF Utils harness
//!
//! Runs the plugin against a local bot config directory: one host event or
//! operator command per invocation.

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use asfutils_config::ConfigLoader;
use asfutils_core::{langs, response::format_static, AsfUtils};
use asfutils_host::Host;
use asfutils_protocols::DisconnectReason;

use cli::{Cli, Commands};

/// Initialize tracing with console output and, if asked, daily log files.
fn init_tracing(log_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("asfutils")
                .filename_suffix("log")
                .max_log_files(30)
                .build(dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            // Keep the writer alive for the whole process.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_dir.as_deref())?;

    let host = Host::new(&cli.config_dir);
    let sessions = host
        .discover()
        .with_context(|| format!("reading bot configs from {}", cli.config_dir.display()))?;
    info!(sessions, dir = %cli.config_dir.display(), "Host ready");

    let global_config = host.global_config_path();
    let properties = if global_config.exists() {
        Some(
            ConfigLoader::load_properties(&global_config)
                .with_context(|| format!("loading {}", global_config.display()))?,
        )
    } else {
        None
    };

    let plugin = AsfUtils::new(host.context());
    host.load(&plugin, properties.as_ref()).await?;

    match cli.command {
        Commands::Command { bot, access, text } => {
            let reply = host.command(&plugin, &bot, access, &text.join(" ")).await?;
            println!(
                "{}",
                reply.unwrap_or_else(|| format_static(langs::UNKNOWN_COMMAND))
            );
        }
        Commands::FarmingFinished { bot, produced } => {
            host.farming_finished(&plugin, &bot, produced).await?;
            plugin.hooks().deletions().wait_idle().await;
        }
        Commands::LoggedOn { bot } => {
            host.logged_on(&plugin, &bot).await?;
            let paused = host.local_session(&bot).is_some_and(|s| s.is_paused());
            println!("{}: farming {}", bot, if paused { "paused" } else { "running" });
        }
        Commands::Disconnected { bot } => {
            host.disconnected(&plugin, &bot, DisconnectReason::Ok).await?;
        }
    }

    Ok(())
}
