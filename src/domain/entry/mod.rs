pub mod entity;
pub mod invariants;
pub mod validation;

pub use entity::{Entry, ImageUpload};
pub use invariants::{
    validate_entry, ALLOWED_IMAGE_TYPES, DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS,
    MAX_IMAGE_BYTES, NAME_MAX_CHARS, NAME_MIN_CHARS,
};
pub use validation::{EntryField, EntryViolation, ValidationResult};
