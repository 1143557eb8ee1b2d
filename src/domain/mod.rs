// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod collection;
pub mod entry;
pub mod form;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Entry Domain
pub use entry::{
    validate_entry, Entry, EntryField, EntryViolation, ImageUpload, ValidationResult,
};

// Collection Domain
pub use collection::{validate_collection, EntryCollection};

// Form state (draft + per-row edit mode)
pub use form::{EditMode, EntryDraft};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Position {index} is out of bounds for a log of {len} entries")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
