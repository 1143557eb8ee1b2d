use super::entity::{Entry, ImageUpload};
use super::validation::{EntryField, ValidationResult};

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MIN_CHARS: usize = 5;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// MIME types accepted by the image input
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// 2 MiB
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

pub const DUPLICATE_NAME_MESSAGE: &str = "A planet with this name already exists.";
pub const NAME_LENGTH_MESSAGE: &str = "Name must be between 3 and 50 characters.";
pub const DESCRIPTION_LENGTH_MESSAGE: &str = "Description must be between 5 and 500 characters.";
pub const IMAGE_TYPE_MESSAGE: &str = "Only JPG, PNG or WEBP images are allowed.";
pub const IMAGE_SIZE_MESSAGE: &str = "Image must not exceed 2MB.";

/// Validates a candidate entry against the current log
///
/// Checks run in a fixed order and later checks overwrite earlier messages
/// for the same field: uniqueness then length for the name, type then size
/// for the image. A missing image is always valid.
pub fn validate_entry(
    name: &str,
    description: &str,
    image: Option<&ImageUpload>,
    existing: &[Entry],
) -> ValidationResult {
    let mut result = ValidationResult::new();

    if existing.iter().any(|entry| entry.has_name(name)) {
        result.set(EntryField::Name, DUPLICATE_NAME_MESSAGE);
    }
    if !within(name, NAME_MIN_CHARS, NAME_MAX_CHARS) {
        result.set(EntryField::Name, NAME_LENGTH_MESSAGE);
    }

    if !within(description, DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS) {
        result.set(EntryField::Description, DESCRIPTION_LENGTH_MESSAGE);
    }

    if let Some(image) = image {
        if !ALLOWED_IMAGE_TYPES.contains(&image.mime_type.as_str()) {
            result.set(EntryField::Image, IMAGE_TYPE_MESSAGE);
        }
        if image.size() > MAX_IMAGE_BYTES {
            result.set(EntryField::Image, IMAGE_SIZE_MESSAGE);
        }
    }

    result
}

/// Trimmed length in characters, inclusive bounds
fn within(text: &str, min: usize, max: usize) -> bool {
    let len = text.trim().chars().count();
    (min..=max).contains(&len)
}
