// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::services::PlanetLogService;

/// Application state managed by Tauri.
/// Built once in main.rs after the stored log has been loaded.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub planet_log_service: Arc<PlanetLogService>,
}
