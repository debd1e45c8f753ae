//! Runtime configuration.
//!
//! Values come from an INI file (`config.ini` by default) and can be
//! overridden by `IPNOTIFY_`-prefixed environment variables, using `__` to
//! separate the section from the key:
//!
//! ```ini
//! [gotify]
//! server_url = http://gotify.lan
//! token = AbCdEf
//!
//! [discovery]
//! subnet_prefix = 192.168
//! ```
//!
//! `IPNOTIFY_GOTIFY__TOKEN=...` overrides `gotify.token`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::network::subnet::{DEFAULT_SUBNET_PREFIX, SubnetFilter};

pub const DEFAULT_CONFIG_PATH: &str = "config.ini";
pub const ENV_PREFIX: &str = "IPNOTIFY";
pub const DEFAULT_PRIORITY: u8 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration from {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ::config::ConfigError,
    },
    #[error("missing required configuration value `{0}`")]
    MissingValue(&'static str),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gotify: GotifyConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GotifyConfig {
    /// Base URL of the Gotify server, without the `/message` path.
    #[serde(default)]
    pub server_url: String,
    /// Application token used to post messages.
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_subnet_prefix")]
    pub subnet_prefix: String,
}

fn default_priority() -> u8 {
    DEFAULT_PRIORITY
}

fn default_subnet_prefix() -> String {
    DEFAULT_SUBNET_PREFIX.to_string()
}

impl Default for GotifyConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            token: String::new(),
            priority: DEFAULT_PRIORITY,
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            subnet_prefix: default_subnet_prefix(),
        }
    }
}

impl DiscoveryConfig {
    pub fn subnet_filter(&self) -> SubnetFilter {
        SubnetFilter::new(self.subnet_prefix.clone())
    }
}

fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl Config {
    /// Reads `path` and the process environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: &Path, env: ::config::Environment) -> Result<Self, ConfigError> {
        let load_err = |source: ::config::ConfigError| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        };

        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Ini)
                    .required(true),
            )
            .add_source(env)
            .build()
            .map_err(load_err)?;

        let cfg: Config = settings.try_deserialize().map_err(load_err)?;
        debug!(path = %path.display(), server = %cfg.gotify.server_url, "configuration loaded");
        Ok(cfg)
    }

    /// Checks the values needed to send a notification.
    ///
    /// An empty server URL or token would otherwise only surface as an
    /// obscure HTTP failure after the discovery budget has been spent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gotify.server_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("gotify.server_url"));
        }
        if self.gotify.token.trim().is_empty() {
            return Err(ConfigError::MissingValue("gotify.token"));
        }
        self.validate_discovery()
    }

    /// Checks only the discovery settings, for commands that never notify.
    pub fn validate_discovery(&self) -> Result<(), ConfigError> {
        if self.discovery.subnet_prefix.trim().is_empty() {
            return Err(ConfigError::MissingValue("discovery.subnet_prefix"));
        }
        Ok(())
    }
}
