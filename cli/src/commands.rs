pub mod notify;
pub mod scan;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use ipnotify_common::config::{Config, ConfigError, DEFAULT_CONFIG_PATH};
use tracing::debug;

#[derive(Parser)]
#[command(name = "ipnotify", version)]
#[command(about = "Reports this machine's LAN address to a Gotify server.")]
pub struct CommandLine {
    /// INI file holding the [gotify] and [discovery] sections
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print results, warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wait for a LAN address (up to one minute) and send one notification
    #[command(alias = "n")]
    Notify {
        /// Print the notification instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Scan the interfaces once and print the qualifying addresses
    #[command(alias = "s")]
    Scan {
        /// Address prefix to look for, overriding discovery.subnet_prefix
        #[arg(short, long)]
        prefix: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Loads the config file; with `optional`, a missing file yields the defaults.
pub fn load_config(path: &Path, optional: bool) -> Result<Config, ConfigError> {
    if optional && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    Config::load(path)
}
