//! Per-user data directory for twlog files.
//!
//! The directory holds `log.config.json` unless `--config` points elsewhere.
//! Its location follows each platform's convention for application data:
//!
//! - **Windows**: `%LOCALAPPDATA%\twlog`
//! - **macOS**: `~/Library/Application Support/twlog`
//! - **Linux and other Unix**: `~/.local/share/twlog`
//!
//! An unset `HOME`/`LOCALAPPDATA` falls back to the working directory.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "twlog";

/// Resolved data directory. Nothing is created until [`DataStorage::get_path`].
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => env_dir("LOCALAPPDATA"),
            "macos" => env_dir("HOME").join("Library").join("Application Support"),
            _ => env_dir("HOME").join(".local").join("share"),
        };

        Self {
            base_path: base_path.join(APP_NAME),
        }
    }

    /// Path of `file_name` inside the data directory, creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn env_dir(name: &str) -> PathBuf {
    var(name).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."))
}
