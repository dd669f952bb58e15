use chatmark_engine::FormatOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid marker {marker:?} in {config_path}: {reason}")]
    InvalidMarker {
        config_path: PathBuf,
        marker: String,
        reason: &'static str,
    },
}

/// Contents of `config.toml`.
///
/// ```toml
/// messages_path = "~/chatmark/messages"
///
/// [format]
/// link_policy = "trim-trailing-punctuation"
/// extra_markers = ["🦉"]
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory browsed by `chatmark browse` when no path is given.
    pub messages_path: PathBuf,
    /// The `[format]` table; every key is optional.
    #[serde(default)]
    pub format: FormatOptions,
}

impl Config {
    /// A config for `messages_path` with default formatting.
    pub fn new(messages_path: PathBuf) -> Self {
        Self {
            messages_path,
            format: FormatOptions::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chatmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Loads and validates the config at `config_path`. A missing file is
    /// `Ok(None)`, not an error.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        Self::parse(&content, config_path).map(Some)
    }

    /// Parses `content`, checks the marker list and expands `messages_path`.
    /// `config_path` is only used in error messages.
    pub fn parse(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        for marker in &config.format.extra_markers {
            if let Some(reason) = marker_problem(marker) {
                return Err(ConfigError::InvalidMarker {
                    config_path: config_path.to_path_buf(),
                    marker: marker.clone(),
                    reason,
                });
            }
        }

        if let Ok(expanded) = shellexpand::full(&config.messages_path.to_string_lossy()) {
            config.messages_path = PathBuf::from(expanded.as_ref());
        }

        Ok(config)
    }

    /// Writes the config as TOML, creating parent directories. Used by
    /// `chatmark init`.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Why `marker` can never match the start of a trimmed line, if it can't.
fn marker_problem(marker: &str) -> Option<&'static str> {
    if marker.is_empty() {
        Some("marker is empty")
    } else if marker.chars().any(char::is_whitespace) {
        Some("marker contains whitespace or a line break")
    } else if marker.chars().any(char::is_control) {
        Some("marker contains a control character")
    } else {
        None
    }
}
