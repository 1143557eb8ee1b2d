// src/config.rs
//
// Storage configuration
//
// Everything the app needs to find its data lives here.
// Defaults resolve to the per-user data directory; tests point it elsewhere.

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Directory name under the platform data dir
pub const APP_DIR_NAME: &str = "planet-log";

pub const DEFAULT_DATABASE_FILE: &str = "planet-log.db";

/// Key under which the serialized log is stored
pub const DEFAULT_STORAGE_KEY: &str = "planets";

pub const DEFAULT_POOL_SIZE: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub database_file: String,
    pub storage_key: String,
    pub pool_size: u32,
}

impl StorageConfig {
    /// Configuration rooted at an explicit directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Configuration rooted at {APP_DATA}/planet-log
    pub fn for_current_user() -> AppResult<Self> {
        let app_data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;
        Ok(Self::new(app_data_dir.join(APP_DIR_NAME)))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the database file
    /// Creates the data directory if it does not exist yet
    pub fn database_path(&self) -> AppResult<PathBuf> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(self.data_dir.join(&self.database_file))
    }
}
