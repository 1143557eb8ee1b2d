// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO event emission
// - Explicit SQL only

pub mod local_storage_repository;

pub use local_storage_repository::{LocalStorageRepository, SqliteLocalStorageRepository};

#[cfg(test)]
pub use local_storage_repository::MockLocalStorageRepository;
