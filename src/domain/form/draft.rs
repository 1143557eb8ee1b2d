use crate::domain::entry::{validate_entry, Entry, EntryField, ImageUpload, ValidationResult};

/// Uncommitted input held by the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub description: String,
    pub image: Option<ImageUpload>,
    pub errors: ValidationResult,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typing in a field clears the message shown next to it
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.errors.clear(EntryField::Name);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.errors.clear(EntryField::Description);
    }

    pub fn set_image(&mut self, image: Option<ImageUpload>) {
        self.image = image;
        self.errors.clear(EntryField::Image);
    }

    /// Run validation against the current log and keep the result
    /// Returns the entry to append when the draft is valid
    pub fn check(&mut self, existing: &[Entry]) -> Option<Entry> {
        self.errors = validate_entry(&self.name, &self.description, self.image.as_ref(), existing);
        if !self.errors.is_valid() {
            return None;
        }
        Some(Entry::from_draft(&self.name, &self.description, self.image.as_ref()))
    }

    /// Reset every field and message after a successful submit
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
