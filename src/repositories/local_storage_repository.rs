// src/repositories/local_storage_repository.rs
//
// Key-value persistence with browser local-storage semantics:
// string keys, string values, whole-value overwrite.

use std::sync::Arc;
use chrono::Utc;
use rusqlite::params;

use crate::db::{get_connection, ConnectionPool};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait LocalStorageRepository: Send + Sync {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
}

pub struct SqliteLocalStorageRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteLocalStorageRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl LocalStorageRepository for SqliteLocalStorageRepository {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare("SELECT value FROM local_storage WHERE key = ?1")?;

        match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}
