use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Per-row edit state of the list
///
/// `Viewing -> Editing(i)` on edit click, `Editing(i) -> Viewing` on save.
/// There is no cancel: an open edit is left only by saving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Viewing,
    Editing {
        index: usize,
        draft_description: String,
    },
}

impl EditMode {
    /// Start editing row `index`, seeded with its current description
    /// Clicking edit on another row while editing re-targets the edit
    pub fn begin(&mut self, index: usize, current_description: &str) {
        *self = EditMode::Editing {
            index,
            draft_description: current_description.to_string(),
        };
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> DomainResult<()> {
        match self {
            EditMode::Editing {
                draft_description, ..
            } => {
                *draft_description = text.into();
                Ok(())
            }
            EditMode::Viewing => Err(DomainError::InvalidStateTransition(
                "No row is being edited".to_string(),
            )),
        }
    }

    /// Leave edit mode, handing back the row and the text to store
    pub fn finish(&mut self) -> DomainResult<(usize, String)> {
        match std::mem::take(self) {
            EditMode::Editing {
                index,
                draft_description,
            } => Ok((index, draft_description)),
            EditMode::Viewing => Err(DomainError::InvalidStateTransition(
                "Cannot save: no row is being edited".to_string(),
            )),
        }
    }

    pub fn editing_index(&self) -> Option<usize> {
        match self {
            EditMode::Editing { index, .. } => Some(*index),
            EditMode::Viewing => None,
        }
    }

    /// Keep the edit pointed at the same entry after row `removed` is deleted
    pub fn on_row_deleted(&mut self, removed: usize) {
        match self.editing_index() {
            Some(current) if current == removed => *self = EditMode::Viewing,
            Some(current) if current > removed => {
                if let EditMode::Editing { index, .. } = self {
                    *index -= 1;
                }
            }
            _ => {}
        }
    }
}
