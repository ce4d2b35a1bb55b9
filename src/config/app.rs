// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use tracing::{debug, warn};

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_email")]
    pub email: EmailConfig,
    #[serde(default = "default_cleanup")]
    pub cleanup: CleanupConfig,
    #[serde(default = "default_obfuscation")]
    pub obfuscation: ObfuscationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub frontend_url: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    pub temp_file_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObfuscationConfig {
    pub key: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            email: default_email(),
            cleanup: default_cleanup(),
            obfuscation: default_obfuscation(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        default_email()
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        default_cleanup()
    }
}

impl Default for ObfuscationConfig {
    fn default() -> Self {
        default_obfuscation()
    }
}

impl CleanupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.temp_file_timeout_secs)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

/// Candidate config files, most specific first
fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(explicit));
    }
    paths.push(PathBuf::from(DEFAULT_CONFIG_FILE));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("engagement-helpers").join("config.toml"));
    }
    paths
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| load_from(&config_paths()))
}

/// First candidate that exists and parses, else built-in defaults
pub fn load_from(paths: &[PathBuf]) -> Config {
    for path in paths.iter().filter(|p| p.exists()) {
        match Config::from_file(path) {
            Ok(conf) => {
                debug!(path = %path.display(), "loaded config");
                return conf;
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable config");
            }
        }
    }
    warn!("no usable config file, using built-in defaults");
    Config::default()
}
