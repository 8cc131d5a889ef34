//! Application configuration. Store location, backend and log level.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Which ProjectRepo implementation backs the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    #[default]
    Sqlite,
    Json,
    Memory,
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "json" => Ok(Self::Json),
            "memory" => Ok(Self::Memory),
            other => Err(format!(
                "unknown storage backend '{}' (expected sqlite, json or memory)",
                other
            )),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sqlite => "sqlite",
            Self::Json => "json",
            Self::Memory => "memory",
        })
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding projects.db / projects.json. Read from PROJECTS_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Storage backend name. Read from PROJECTS_STORAGE.
    #[serde(default)]
    pub storage: Option<String>,

    /// Log filter used when RUST_LOG is unset. Read from PROJECTS_LOG_LEVEL.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Whether to print the startup banner. Read from PROJECTS_BANNER.
    #[serde(default)]
    pub banner: Option<bool>,
}

impl AppConfig {
    /// Environment (prefix `PROJECTS_`) plus the optional file named by `PROJECTS_CONFIG`.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("PROJECTS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("PROJECTS").try_parsing(true));
        c.build()?.try_deserialize()
    }

    pub fn data_dir_or_default(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    /// Parsed storage backend. Defaults to SQLite when unset.
    pub fn storage_kind(&self) -> Result<StorageKind, String> {
        self.storage
            .as_deref()
            .map(str::parse::<StorageKind>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn banner_enabled(&self) -> bool {
        self.banner.unwrap_or(true)
    }
}
