//! Configuration for a logging run.
//!
//! The configuration is a JSON document loaded once at startup and passed
//! by reference to everything that needs it. It never changes during a run.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "company": "acme",
//!   "key": "twp_xxxxxxxx",
//!   "personId": "1234",
//!   "map": {
//!     "csv": {
//!       "date": "Date",
//!       "notes": "Notes",
//!       "project": "Project",
//!       "task": "Task",
//!       "time": "Duration"
//!     },
//!     "project": {
//!       "Internal": 500,
//!       "Acme Website": { "id": "600", "task": { "Development": 61001 } }
//!     }
//!   }
//! }
//! ```
//!
//! A project mapped to a bare ID is shorthand for `{ "id": <ID>, "task": {} }`
//! and is normalized while loading. IDs may be written as numbers or strings.
//!
//! ## File Location
//!
//! Unless `--config` is given, the file is read from the per-user data
//! directory:
//! - **Windows**: `%LOCALAPPDATA%\twlog\log.config.json`
//! - **macOS**: `~/Library/Application Support/twlog/log.config.json`
//! - **Linux**: `~/.local/share/twlog/log.config.json`
//!
//! The API key can be supplied through `TWLOG_API_KEY` (also read from a
//! `.env` file) instead of the `key` field.

use super::data_storage::DataStorage;
use super::error::ConfigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "log.config.json";

/// Environment variable overriding the configured API key.
pub const API_KEY_ENV: &str = "TWLOG_API_KEY";

/// Names of the CSV columns holding each logical field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CsvColumns {
    pub date: String,
    pub notes: String,
    pub project: String,
    pub task: String,
    pub time: String,
}

impl Default for CsvColumns {
    /// Column names used by Tyme CSV exports.
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            notes: "Notes".to_string(),
            project: "Project".to_string(),
            task: "Task".to_string(),
            time: "Duration".to_string(),
        }
    }
}

/// A Teamwork project and the tasks known by name within it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ProjectConfig {
    pub id: String,
    pub task: BTreeMap<String, String>,
}

impl ProjectConfig {
    /// Teamwork ID of the task called `name`, if configured.
    pub fn task_id(&self, name: &str) -> Option<&str> {
        self.task.get(name).map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for ProjectConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Entry {
            Full {
                #[serde(deserialize_with = "deserialize_id")]
                id: String,
                #[serde(default, deserialize_with = "deserialize_id_map")]
                task: BTreeMap<String, String>,
            },
            Bare(#[serde(deserialize_with = "deserialize_id")] String),
        }

        Ok(match Entry::deserialize(deserializer)? {
            Entry::Full { id, task } => ProjectConfig { id, task },
            Entry::Bare(id) => ProjectConfig { id, task: BTreeMap::new() },
        })
    }
}

/// Column and project mappings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MapConfig {
    #[serde(default)]
    pub csv: CsvColumns,
    #[serde(default)]
    pub project: BTreeMap<String, ProjectConfig>,
}

/// Root configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Teamwork site name, as in `https://<company>.teamworkpm.net`.
    pub company: String,

    /// Teamwork API key.
    #[serde(default)]
    pub key: String,

    /// Teamwork person the entries are logged for.
    #[serde(rename = "personId", deserialize_with = "deserialize_id")]
    pub person_id: String,

    /// Base URL override, mostly useful against a staging site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    pub map: MapConfig,
}

impl Config {
    /// Default configuration path in the per-user data directory.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads and validates the configuration at `path`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Unreadable`] when the file cannot be read
    /// - [`ConfigError::Empty`] when it holds no settings at all
    /// - [`ConfigError::Malformed`] when it is not a valid configuration
    pub fn read(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            return Err(ConfigError::Empty(path.to_path_buf()));
        }

        let value: serde_json::Value = serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        // `{}` is as good as no file at all
        if value.as_object().is_some_and(|object| object.is_empty()) {
            return Err(ConfigError::Empty(path.to_path_buf()));
        }

        let config: Config = serde_json::from_value(value).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), projects = config.map.project.len(), "configuration loaded");
        Ok(config)
    }

    /// Replaces the API key when `key` holds a non-empty value.
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|key| !key.trim().is_empty()) {
            self.key = key;
        }
        self
    }

    /// Base URL of the Teamwork API for this site.
    pub fn base_url(&self) -> String {
        match &self.host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => format!("https://{}.teamworkpm.net", self.company),
        }
    }

    pub fn project(&self, name: &str) -> Option<&ProjectConfig> {
        self.map.project.get(name)
    }
}

/// Accepts an ID written either as a JSON string or a JSON number.
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Number(number) => number.to_string(),
        Id::Text(text) => text,
    })
}

fn deserialize_id_map<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error> {
    #[derive(Deserialize)]
    struct Id(#[serde(deserialize_with = "deserialize_id")] String);

    let map = BTreeMap::<String, Id>::deserialize(deserializer)?;
    Ok(map.into_iter().map(|(name, Id(id))| (name, id)).collect())
}
