// src/services/planet_log_service.rs
//
// Form/List Controller
//
// Owns the draft, the per-row edit mode and the in-memory log.
// Every successful mutation of the log is written back through the store
// before the matching event is emitted.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{
    DomainError, EditMode, EntryCollection, EntryDraft, ImageUpload, ValidationResult,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, PlanetDeleted, PlanetDescriptionUpdated, PlanetLogged};
use crate::infrastructure::PlanetStore;

/// Everything the list and the form render from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogState {
    pub entries: EntryCollection,
    pub draft: EntryDraft,
    pub edit: EditMode,
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was valid and now sits at `index`
    Appended { index: usize },
    /// Nothing was stored; the messages are also kept on the draft
    Rejected(ValidationResult),
}

pub struct PlanetLogService {
    state: Mutex<LogState>,
    store: PlanetStore,
    event_bus: Arc<EventBus>,
}

impl PlanetLogService {
    /// Start a session from whatever the store holds
    pub fn load(store: PlanetStore, event_bus: Arc<EventBus>) -> Self {
        let entries = store.load();
        log::info!("Planet log ready with {} entries", entries.len());

        Self {
            state: Mutex::new(LogState {
                entries,
                ..LogState::default()
            }),
            store,
            event_bus,
        }
    }

    /// Full copy of the render state, entries included
    pub fn snapshot(&self) -> LogState {
        self.lock().clone()
    }

    /// The form alone, for callers that only touched the draft
    pub fn draft(&self) -> EntryDraft {
        self.lock().draft.clone()
    }

    pub fn edit_mode(&self) -> EditMode {
        self.lock().edit.clone()
    }

    pub fn set_name(&self, name: String) {
        self.lock().draft.set_name(name);
    }

    pub fn set_description(&self, description: String) {
        self.lock().draft.set_description(description);
    }

    pub fn set_image(&self, image: Option<ImageUpload>) {
        self.lock().draft.set_image(image);
    }

    /// Validate the draft and append it when valid
    pub fn submit(&self) -> AppResult<SubmitOutcome> {
        let (index, name) = {
            let mut state = self.lock();
            let LogState { entries, draft, .. } = &mut *state;

            let entry = match draft.check(entries.entries()) {
                Some(entry) => entry,
                None => {
                    log::debug!("Submission rejected: {}", draft.errors);
                    return Ok(SubmitOutcome::Rejected(draft.errors.clone()));
                }
            };

            let name = entry.name.clone();
            let entries = std::mem::take(&mut state.entries);
            state.entries = entries.append(entry)?;
            state.draft.clear();
            self.persist(&state.entries);

            (state.entries.len() - 1, name)
        };

        log::debug!("Logged planet '{}' at {}", name, index);
        self.event_bus.emit(PlanetLogged::new(index, name));
        Ok(SubmitOutcome::Appended { index })
    }

    /// Remove the planet at `index`
    pub fn delete(&self, index: usize) -> AppResult<()> {
        let name = {
            let mut state = self.lock();
            let name = match state.entries.get(index) {
                Some(entry) => entry.name.clone(),
                None => return Err(out_of_bounds(&state.entries, index)),
            };

            let entries = std::mem::take(&mut state.entries);
            state.entries = entries.delete_at(index)?;
            state.edit.on_row_deleted(index);
            self.persist(&state.entries);
            name
        };

        log::debug!("Deleted planet '{}' at {}", name, index);
        self.event_bus.emit(PlanetDeleted::new(index, name));
        Ok(())
    }

    /// Open the inline editor on row `index`
    pub fn begin_edit(&self, index: usize) -> AppResult<()> {
        let mut state = self.lock();
        let LogState { entries, edit, .. } = &mut *state;

        let entry = entries
            .get(index)
            .ok_or_else(|| out_of_bounds(entries, index))?;
        edit.begin(index, &entry.description);
        Ok(())
    }

    pub fn set_edit_description(&self, text: String) -> AppResult<()> {
        self.lock().edit.set_draft(text)?;
        Ok(())
    }

    /// Store the edited description of row `index` and leave edit mode
    ///
    /// The text is stored as typed: no trim, no length check.
    pub fn save_edit(&self, index: usize) -> AppResult<()> {
        {
            let mut state = self.lock();
            if state.edit.editing_index() != Some(index) {
                return Err(AppError::Domain(DomainError::InvalidStateTransition(
                    format!("Row {} is not being edited", index),
                )));
            }

            if state.entries.get(index).is_none() {
                return Err(out_of_bounds(&state.entries, index));
            }

            let (_, text) = state.edit.finish()?;
            let entries = std::mem::take(&mut state.entries);
            state.entries = entries.update_description_at(index, text)?;
            self.persist(&state.entries);
        }

        log::debug!("Updated description of planet at {}", index);
        self.event_bus.emit(PlanetDescriptionUpdated::new(index));
        Ok(())
    }

    /// Persistence failures never undo or block the mutation
    fn persist(&self, entries: &EntryCollection) {
        if let Err(e) = self.store.save(entries) {
            log::error!("Failed to persist planet log: {}", e);
        }
    }

    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Checked before a transform takes the entries out of the state
fn out_of_bounds(entries: &EntryCollection, index: usize) -> AppError {
    AppError::Domain(DomainError::IndexOutOfBounds {
        index,
        len: entries.len(),
    })
}
