use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application directory name under the platform config and data dirs.
const APP_DIR: &str = "ttrpg-codex";

/// A config file that exists but cannot be used.
///
/// Callers fall back to [`AppConfig::default`] and report the error once
/// logging is up.
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", .path.display())]
    #[diagnostic(code("CODEX::CONFIG_IO"))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config at {}: {source}", .path.display())]
    #[diagnostic(
        code("CODEX::CONFIG_PARSE"),
        help("Fix or delete the file to use the built-in defaults")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

/// Reference data location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
    /// Class-description document, relative to the data directory.
    pub class_descriptions_file: String,
    /// Class-feature document, relative to the data directory.
    pub class_features_file: String,
    /// Race document, relative to the data directory.
    pub races_file: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter level when `RUST_LOG` is unset.
    pub level: String,
    /// Override the default log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            class_descriptions_file: "02 classes.json".to_string(),
            class_features_file: "features_class.json".to_string(),
            races_file: "features_race.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/ttrpg-codex/config.toml`.
    ///
    /// A missing file yields `Default`. An unreadable or malformed file is
    /// an error; the caller decides whether to fall back.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, with the same missing-file
    /// behavior as [`AppConfig::load`].
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config file at {}, using defaults", config_path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config_path.to_path_buf(),
                    source,
                })
            }
        };

        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Resolved data directory (override or platform default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir()
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl DataConfig {
    /// Resolved data directory (override or platform default).
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join(APP_DIR).join("reference"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    pub fn class_descriptions_path(&self) -> PathBuf {
        self.data_dir().join(&self.class_descriptions_file)
    }

    pub fn class_features_path(&self) -> PathBuf {
        self.data_dir().join(&self.class_features_file)
    }

    pub fn races_path(&self) -> PathBuf {
        self.data_dir().join(&self.races_file)
    }
}

impl LoggingConfig {
    /// Resolved log directory (override or `<data dir>/ttrpg-codex/logs`).
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .map(|d| d.join(APP_DIR).join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }
}
