use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://matreq.db";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    database: FileDatabase,
    #[serde(default)]
    logging: FileLogging,
}

#[derive(Debug, Default, Deserialize)]
struct FileDatabase {
    url: Option<String>,
    max_connections: Option<u32>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileLogging {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_owned(),
                max_connections: 5,
                timeout_secs: 30,
            },
            logging: LoggingConfig { level: "info".to_owned(), format: LogFormat::Compact },
        }
    }
}

impl AppConfig {
    /// File values override the defaults, environment variables override
    /// the file. A missing config file is fine; an unreadable or malformed
    /// one is an error.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = options.config_path {
            if path.exists() {
                config.apply_file(&read_file(&path)?);
            }
        }

        if let Ok(url) = env::var("MATREQ_DATABASE_URL") {
            if !url.is_empty() {
                config.database.url = url;
            }
        }
        if let Ok(level) = env::var("MATREQ_LOG_LEVEL") {
            if !level.is_empty() {
                config.logging.level = level;
            }
        }

        Ok(config)
    }

    fn apply_file(&mut self, file: &FileConfig) {
        if let Some(url) = &file.database.url {
            self.database.url = url.clone();
        }
        if let Some(max) = file.database.max_connections {
            self.database.max_connections = max;
        }
        if let Some(timeout) = file.database.timeout_secs {
            self.database.timeout_secs = timeout;
        }
        if let Some(level) = &file.logging.level {
            self.logging.level = level.clone();
        }
        if let Some(format) = file.logging.format {
            self.logging.format = format;
        }
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: display.clone(), source })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse { path: display, source })
}
