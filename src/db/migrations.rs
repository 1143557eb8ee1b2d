// src/db/migrations.rs
//
// Storage layout setup
//
// The only table is `local_storage`. Its layout version is kept in SQLite's
// `user_version` header field: 0 for a file this app never touched,
// STORAGE_VERSION once the table exists.

use rusqlite::Connection;

use crate::error::{AppError, AppResult};

const STORAGE_VERSION: i32 = 1;

/// Create the key-value table if needed and stamp the layout version
///
/// A database stamped by a newer build is refused rather than overwritten.
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let found = storage_version(conn)?;
    if found > STORAGE_VERSION {
        return Err(AppError::Other(format!(
            "Storage layout {} is newer than supported {}. Update the application.",
            found, STORAGE_VERSION
        )));
    }

    conn.execute_batch(include_str!("../../schema.sql"))?;

    if found < STORAGE_VERSION {
        log::info!("Stamping storage layout version {}", STORAGE_VERSION);
        conn.pragma_update(None, "user_version", STORAGE_VERSION)?;
    }
    Ok(())
}

fn storage_version(conn: &Connection) -> AppResult<i32> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

/// Run SQLite's integrity check on the opened file
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    if result != "ok" {
        return Err(AppError::Other(format!(
            "Database integrity check failed: {}",
            result
        )));
    }
    Ok(())
}
