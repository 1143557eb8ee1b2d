use serde::{Deserialize, Serialize};

use crate::domain::entry::Entry;
use crate::domain::{DomainError, DomainResult};

/// Ordered list of logged planets
/// Insertion order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: Vec<Entry>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry at the end
    /// The entry must already have passed validation against this collection
    pub fn append(mut self, entry: Entry) -> DomainResult<Self> {
        self.entries.push(entry);
        Ok(self)
    }

    /// Remove exactly the entry at `index`, keeping the order of the rest
    pub fn delete_at(mut self, index: usize) -> DomainResult<Self> {
        self.check_index(index)?;
        self.entries.remove(index);
        Ok(self)
    }

    /// Replace only the description of the entry at `index`
    /// The new text is stored as given, without length or trim checks
    pub fn update_description_at(
        mut self,
        index: usize,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        self.check_index(index)?;
        self.entries[index].description = description.into();
        Ok(self)
    }

    fn check_index(&self, index: usize) -> DomainResult<()> {
        if index >= self.entries.len() {
            return Err(DomainError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<Entry>> for EntryCollection {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}
