//! CLI definitions for the ASF Utils harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use asfutils_protocols::AccessLevel;

/// Drive the ASF Utils plugin against a local bot config directory.
#[derive(Parser)]
#[command(name = "asfutils")]
#[command(about = "Command routing and farming automation harness for ASF bots")]
#[command(version)]
pub(crate) struct Cli {
    /// Directory holding ASF.json and the bot files
    #[arg(short, long, default_value = "config", global = true, env = "ASFUTILS_CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Also write logs to daily rolling files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Send an operator command to a bot
    Command {
        /// Bot name
        bot: String,

        /// Access level of the caller
        #[arg(long, default_value_t = AccessLevel::Owner)]
        access: AccessLevel,

        /// Command and its arguments
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Report that a bot finished a farming cycle
    FarmingFinished {
        /// Bot name
        bot: String,

        /// The cycle produced something
        #[arg(long)]
        produced: bool,
    },

    /// Report that a bot logged on
    LoggedOn {
        /// Bot name
        bot: String,
    },

    /// Report that a bot disconnected
    Disconnected {
        /// Bot name
        bot: String,
    },
}
