// src/application/commands/planet_commands.rs
//
// Planet Log Command Handlers
//
// RULES:
// - Accept DTOs
// - Call the service
// - Return only what the call could have changed: typing in the form
//   answers with the draft, list mutations answer with the whole log

use tauri::State;

use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::{dto::*, state::AppState};
use crate::domain::ImageUpload;

/// Current entries, draft, messages and edit mode
#[tauri::command]
pub async fn get_planet_log(state: State<'_, AppState>) -> Result<PlanetLogDto, String> {
    Ok(PlanetLogDto::from(state.planet_log_service.snapshot()))
}

#[tauri::command]
pub async fn set_planet_name(
    name: String,
    state: State<'_, AppState>,
) -> Result<DraftStateDto, String> {
    state.planet_log_service.set_name(name);
    Ok(DraftStateDto::from(&state.planet_log_service.draft()))
}

#[tauri::command]
pub async fn set_planet_description(
    description: String,
    state: State<'_, AppState>,
) -> Result<DraftStateDto, String> {
    state.planet_log_service.set_description(description);
    Ok(DraftStateDto::from(&state.planet_log_service.draft()))
}

/// Pick (or clear, with `null`) the image of the draft
#[tauri::command]
pub async fn set_planet_image(
    image: Option<ImageUploadDto>,
    state: State<'_, AppState>,
) -> Result<DraftStateDto, String> {
    let upload = image
        .map(ImageUpload::try_from)
        .transpose()
        .map_err(|e| {
            serde_json::to_string(&ErrorResponse::validation(e.to_string()))
                .unwrap_or_else(|_| "Invalid image".to_string())
        })?;

    state.planet_log_service.set_image(upload);
    Ok(DraftStateDto::from(&state.planet_log_service.draft()))
}

/// Validate the draft and log it when valid
#[tauri::command]
pub async fn submit_planet(state: State<'_, AppState>) -> Result<SubmitResultDto, String> {
    let outcome = state.planet_log_service.submit().to_error_response()?;
    Ok(SubmitResultDto::new(outcome, state.planet_log_service.snapshot()))
}

#[tauri::command]
pub async fn delete_planet(
    index: usize,
    state: State<'_, AppState>,
) -> Result<PlanetLogDto, String> {
    state.planet_log_service.delete(index).to_error_response()?;
    Ok(PlanetLogDto::from(state.planet_log_service.snapshot()))
}

#[tauri::command]
pub async fn begin_edit_planet(
    index: usize,
    state: State<'_, AppState>,
) -> Result<Option<EditingDto>, String> {
    state.planet_log_service.begin_edit(index).to_error_response()?;
    Ok(EditingDto::from_mode(state.planet_log_service.edit_mode()))
}

/// Keystroke in the inline editor; answers with the edit state alone
#[tauri::command]
pub async fn set_edit_description(
    description: String,
    state: State<'_, AppState>,
) -> Result<Option<EditingDto>, String> {
    state
        .planet_log_service
        .set_edit_description(description)
        .to_error_response()?;
    Ok(EditingDto::from_mode(state.planet_log_service.edit_mode()))
}

#[tauri::command]
pub async fn save_planet_edit(
    index: usize,
    state: State<'_, AppState>,
) -> Result<PlanetLogDto, String> {
    state.planet_log_service.save_edit(index).to_error_response()?;
    Ok(PlanetLogDto::from(state.planet_log_service.snapshot()))
}
