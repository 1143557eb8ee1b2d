//! Critical Collection Invariants:
//!
//! 1. Insertion order is display order
//! 2. No two entries share a name under case-insensitive trimmed comparison
//! 3. Every mutation yields a new value; callers replace what they hold
//! 4. Out-of-range positions are rejected without touching the entries

pub mod entity;

pub use entity::EntryCollection;

use crate::domain::{DomainError, DomainResult};

/// Validates that names are unique across the collection
/// Used on data coming back from storage, which never went through the form
pub fn validate_collection(collection: &EntryCollection) -> DomainResult<()> {
    let entries = collection.entries();
    for (index, entry) in entries.iter().enumerate() {
        if entries[..index].iter().any(|earlier| earlier.has_name(&entry.name)) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate planet name '{}' at position {}",
                entry.name, index
            )));
        }
    }
    Ok(())
}
