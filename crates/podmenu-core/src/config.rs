use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::MenuError;

/// Top-level configuration for Podmenu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Directory holding one sub-directory per page or section
    pub content_root: PathBuf,
    /// Hand-editable order file, created on first use if missing
    pub order_file: PathBuf,
    /// File name that makes a directory an addressable page
    pub index_file: String,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (e.g. "info", "podmenu_core=debug")
    pub level: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("web/content"),
            order_file: PathBuf::from("menuindex.yml"),
            index_file: "index.html".to_string(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl MenuConfig {
    /// Load config from YAML; missing fields take their defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load config from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, MenuError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::from_yaml(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(MenuError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
