// src/lib.rs
// Planet Log - Local-first exploration log
//
// Architecture:
// - Domain-centric: validation and list rules live in the domain
// - Explicit state: the service owns the draft, the edit mode and the log
// - Local-first: the log is one JSON snapshot in a local SQLite key-value table
// - Application Layer: Tauri boundary (feature `desktop`)

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_collection,
    validate_entry,
    DomainError,
    DomainResult,
    EditMode,
    Entry,
    EntryCollection,
    EntryDraft,
    EntryField,
    EntryViolation,
    ImageUpload,
    ValidationResult,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::StorageConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DomainEvent,
    EventBus,
    PlanetDeleted,
    PlanetDescriptionUpdated,
    PlanetLogged,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use infrastructure::PlanetStore;
pub use repositories::{LocalStorageRepository, SqliteLocalStorageRepository};

// ============================================================================
// PUBLIC API - Services & Application
// ============================================================================

pub use services::{LogState, PlanetLogService, SubmitOutcome};

pub use application::dto;
pub use application::AppState;

#[cfg(feature = "desktop")]
pub use application::commands;
