use serde::{Deserialize, Serialize};

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    Name,
    Description,
    Image,
}

/// Error taxonomy for rejected input
/// Every violation is recoverable: it only blocks the submission in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryViolation {
    /// Duplicate name or length out of range
    NameInvalid,
    /// Length out of range
    DescriptionInvalid,
    /// Disallowed type or oversize
    ImageInvalid,
}

impl EntryField {
    pub fn violation(self) -> EntryViolation {
        match self {
            EntryField::Name => EntryViolation::NameInvalid,
            EntryField::Description => EntryViolation::DescriptionInvalid,
            EntryField::Image => EntryViolation::ImageInvalid,
        }
    }
}

/// Per-field validation messages
///
/// A `None` slot means the field is valid. Setting a slot twice keeps the
/// last message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field carries a message
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.image.is_none()
    }

    pub fn get(&self, field: EntryField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: EntryField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: EntryField) {
        *self.slot_mut(field) = None;
    }

    pub fn has(&self, violation: EntryViolation) -> bool {
        self.violations().any(|v| v == violation)
    }

    pub fn violations(&self) -> impl Iterator<Item = EntryViolation> + '_ {
        [EntryField::Name, EntryField::Description, EntryField::Image]
            .into_iter()
            .filter(|field| self.slot(*field).is_some())
            .map(EntryField::violation)
    }

    fn slot(&self, field: EntryField) -> &Option<String> {
        match field {
            EntryField::Name => &self.name,
            EntryField::Description => &self.description,
            EntryField::Image => &self.image,
        }
    }

    fn slot_mut(&mut self, field: EntryField) -> &mut Option<String> {
        match field {
            EntryField::Name => &mut self.name,
            EntryField::Description => &mut self.description,
            EntryField::Image => &mut self.image,
        }
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = [&self.name, &self.description, &self.image]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}
