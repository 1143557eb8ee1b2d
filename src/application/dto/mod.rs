// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain values, except uploads coming in from the webview

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::{EditMode, Entry, EntryDraft, ImageUpload, ValidationResult};
use crate::error::{AppError, AppResult};
use crate::services::{LogState, SubmitOutcome};

// ============================================================================
// ENTRY DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDto {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
}

/// File picked in the image input, bytes base64-encoded by the webview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUploadDto {
    pub file_name: String,
    pub mime_type: String,
    pub data_base64: String,
}

// ============================================================================
// FORM DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftDto {
    pub name: String,
    pub description: String,
    pub image_name: Option<String>,
    pub image_size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorsDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditingDto {
    pub index: usize,
    pub draft_description: String,
}

/// Form-only render state, returned while the user is typing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftStateDto {
    pub draft: DraftDto,
    pub errors: FieldErrorsDto,
}

/// Full render state for the webview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetLogDto {
    pub entries: Vec<EntryDto>,
    pub draft: DraftDto,
    pub errors: FieldErrorsDto,
    pub editing: Option<EditingDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResultDto {
    pub accepted: bool,
    pub index: Option<usize>,
    pub log: PlanetLogDto,
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&Entry> for EntryDto {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            description: entry.description.clone(),
            image: entry.image.clone(),
        }
    }
}

impl From<&EntryDraft> for DraftDto {
    fn from(draft: &EntryDraft) -> Self {
        Self {
            name: draft.name.clone(),
            description: draft.description.clone(),
            image_name: draft.image.as_ref().map(|i| i.file_name.clone()),
            image_size: draft.image.as_ref().map(ImageUpload::size),
        }
    }
}

impl From<&ValidationResult> for FieldErrorsDto {
    fn from(errors: &ValidationResult) -> Self {
        Self {
            name: errors.name.clone(),
            description: errors.description.clone(),
            image: errors.image.clone(),
        }
    }
}

impl From<&EntryDraft> for DraftStateDto {
    fn from(draft: &EntryDraft) -> Self {
        Self {
            draft: DraftDto::from(draft),
            errors: FieldErrorsDto::from(&draft.errors),
        }
    }
}

impl EditingDto {
    pub fn from_mode(mode: EditMode) -> Option<Self> {
        match mode {
            EditMode::Viewing => None,
            EditMode::Editing {
                index,
                draft_description,
            } => Some(Self {
                index,
                draft_description,
            }),
        }
    }
}

impl From<LogState> for PlanetLogDto {
    fn from(state: LogState) -> Self {
        Self {
            entries: state.entries.entries().iter().map(EntryDto::from).collect(),
            draft: DraftDto::from(&state.draft),
            errors: FieldErrorsDto::from(&state.draft.errors),
            editing: EditingDto::from_mode(state.edit),
        }
    }
}

impl SubmitResultDto {
    pub fn new(outcome: SubmitOutcome, state: LogState) -> Self {
        let index = match outcome {
            SubmitOutcome::Appended { index } => Some(index),
            SubmitOutcome::Rejected(_) => None,
        };
        Self {
            accepted: index.is_some(),
            index,
            log: PlanetLogDto::from(state),
        }
    }
}

impl TryFrom<ImageUploadDto> for ImageUpload {
    type Error = AppError;

    fn try_from(dto: ImageUploadDto) -> AppResult<Self> {
        let bytes = STANDARD
            .decode(dto.data_base64.as_bytes())
            .map_err(|e| AppError::Other(format!("Invalid image data: {}", e)))?;
        Ok(ImageUpload::new(dto.file_name, dto.mime_type, bytes))
    }
}
