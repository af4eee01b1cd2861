//! Configuration management module
//!
//! Layers built-in defaults, an optional YAML/TOML file and `MUI_SELECT__*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use custom_select::SelectMarkers;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "MUI_SELECT";
const LOCAL_CONFIG: &str = "config/mui-select";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub markers: SelectMarkers,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, or from `config/mui-select.*` and the
    /// user config directory when no path is given. Environment variables
    /// override both, e.g. `MUI_SELECT__MARKERS__MULTIPLE=.multi`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(user) = user_config_path() {
                    builder = builder.add_source(File::from(user).required(false));
                }
                builder = builder.add_source(File::with_name(LOCAL_CONFIG).required(false));
            }
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        let settings = builder
            .build()
            .with_context(|| match path {
                Some(path) => format!("failed to read config from {}", path.display()),
                None => "failed to assemble default configuration".to_string(),
            })?;
        settings
            .try_deserialize()
            .context("invalid mui-select configuration")
    }
}

/// `~/.config/mui-select/config.yaml` on Linux, the platform equivalent
/// elsewhere.
pub fn user_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("mui-select");
    path.push("config.yaml");
    Some(path)
}
