// src/infrastructure/planet_store.rs
//
// Persistent Store Adapter
//
// CRITICAL RULES:
// - The whole log is one JSON array under one key
// - Every save overwrites the previous snapshot
// - Loading never fails: missing, unreadable or corrupt data means an empty log
// - The store keeps no copy of the log between calls

use std::sync::Arc;

use crate::domain::{validate_collection, EntryCollection};
use crate::error::AppResult;
use crate::repositories::LocalStorageRepository;

pub struct PlanetStore {
    storage: Arc<dyn LocalStorageRepository>,
    key: String,
}

impl PlanetStore {
    pub fn new(storage: Arc<dyn LocalStorageRepository>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Read the stored log
    pub fn load(&self) -> EntryCollection {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored log under '{}', starting empty", self.key);
                return EntryCollection::new();
            }
            Err(e) => {
                log::warn!("Could not read stored log '{}': {}", self.key, e);
                return EntryCollection::new();
            }
        };

        let collection: EntryCollection = match serde_json::from_str(&raw) {
            Ok(collection) => collection,
            Err(e) => {
                log::warn!("Stored log '{}' is not valid JSON, starting empty: {}", self.key, e);
                return EntryCollection::new();
            }
        };

        // Data written by older builds may predate the uniqueness rule
        if let Err(e) = validate_collection(&collection) {
            log::warn!("Stored log '{}' loaded with a violation: {}", self.key, e);
        }

        log::debug!("Loaded {} planets from '{}'", collection.len(), self.key);
        collection
    }

    /// Overwrite the stored log with `collection`
    pub fn save(&self, collection: &EntryCollection) -> AppResult<()> {
        let raw = serde_json::to_string(collection)?;
        self.storage.set_item(&self.key, &raw)?;
        log::debug!("Saved {} planets to '{}'", collection.len(), self.key);
        Ok(())
    }
}
