// src/db/connection.rs
//
// r2d2 pool over the planet-log SQLite file
//
// Every pooled connection runs in WAL mode with a busy timeout, so a save
// racing a load waits instead of failing with SQLITE_BUSY.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::StorageConfig;
use crate::error::{AppError, AppResult};

pub type ConnectionPool = Pool<SqliteConnectionManager>;

pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Open (creating if needed) the database file named by `config`
pub fn create_connection_pool(config: &StorageConfig) -> AppResult<ConnectionPool> {
    let db_path = config.database_path()?;
    log::debug!("Opening planet log database at {}", db_path.display());

    let manager = SqliteConnectionManager::file(&db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )
    });

    Pool::builder()
        .max_size(config.pool_size)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Could not open {}: {}", db_path.display(), e)))
}

pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("No database connection available: {}", e)))
}
