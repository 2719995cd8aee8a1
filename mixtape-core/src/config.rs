use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::InvalidInput;
use crate::output::OutputFormat;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default report format: "summary", "table", or "json"
    #[serde(default = "default_report")]
    pub report_format: String,

    /// Indentation width of the written dataset (0 = compact)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            report_format: default_report(),
            indent: default_indent(),
            use_color: None,
        }
    }
}

fn default_report() -> String {
    "summary".to_string()
}

fn default_indent() -> usize {
    4
}

impl Config {
    /// Load config from `.mixtape/config.toml`, falling back to the user
    /// config directory, then to defaults
    pub fn load() -> Result<Self> {
        let local = std::env::current_dir()
            .ok()
            .map(|cwd| cwd.join(".mixtape").join("config.toml"));

        for path in local.into_iter().chain(global_config_path()) {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| {
            InvalidInput(format!("Failed to read config from {}", path.display()))
        })?;
        let config: Self = toml::from_str(&content).with_context(|| {
            InvalidInput(format!("Failed to parse config from {}", path.display()))
        })?;
        config.report_format().with_context(|| {
            InvalidInput(format!("Invalid config in {}", path.display()))
        })?;
        Ok(config)
    }

    /// The configured default report format
    pub fn report_format(&self) -> Result<OutputFormat> {
        self.defaults
            .report_format
            .parse()
            .map_err(|e: String| anyhow!(e))
    }
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mixtape").join("config.toml"))
}
