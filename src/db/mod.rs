// src/db/mod.rs
//
// SQLite access: the connection pool and the storage layout

pub mod connection;
pub mod migrations;

pub use connection::{create_connection_pool, get_connection, ConnectionPool, PooledConn};

pub use migrations::{initialize_database, verify_database_integrity};
