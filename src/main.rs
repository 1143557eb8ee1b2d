// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use tauri::{Emitter, Manager};

use planet_log::application::commands::*;
use planet_log::application::state::AppState;
use planet_log::config::StorageConfig;
use planet_log::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
};
use planet_log::events::{EventBus, PlanetDeleted, PlanetDescriptionUpdated, PlanetLogged};
use planet_log::infrastructure::PlanetStore;
use planet_log::repositories::{LocalStorageRepository, SqliteLocalStorageRepository};
use planet_log::services::PlanetLogService;

/// Webview event fired after every persisted change to the log
const ENTRIES_CHANGED: &str = "entries-changed";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .target(tauri_plugin_log::Target::new(
                    tauri_plugin_log::TargetKind::Webview,
                ))
                .build(),
        )
        .setup(|app| {
            // 1. INFRASTRUCTURE
            let config = StorageConfig::for_current_user()?;
            let event_bus = Arc::new(EventBus::new());
            let pool = Arc::new(create_connection_pool(&config)?);

            // Initialize schema (idempotent)
            {
                let conn = get_connection(&pool)?;
                initialize_database(&conn)?;
                if let Err(e) = verify_database_integrity(&conn) {
                    log::warn!("{}", e);
                }
            }

            // 2. REPOSITORIES
            let storage: Arc<dyn LocalStorageRepository> =
                Arc::new(SqliteLocalStorageRepository::new(pool.clone()));

            // 3. SERVICE (loads the stored log once)
            let store = PlanetStore::new(storage, config.storage_key.clone());
            let planet_log_service = Arc::new(PlanetLogService::load(store, event_bus.clone()));

            // 4. EVENT FORWARDING
            let handle = app.handle().clone();
            event_bus.subscribe::<PlanetLogged, _>(move |event| {
                if let Err(e) = handle.emit(ENTRIES_CHANGED, event) {
                    log::warn!("Could not notify webview: {}", e);
                }
            });
            let handle = app.handle().clone();
            event_bus.subscribe::<PlanetDeleted, _>(move |event| {
                if let Err(e) = handle.emit(ENTRIES_CHANGED, event) {
                    log::warn!("Could not notify webview: {}", e);
                }
            });
            let handle = app.handle().clone();
            event_bus.subscribe::<PlanetDescriptionUpdated, _>(move |event| {
                if let Err(e) = handle.emit(ENTRIES_CHANGED, event) {
                    log::warn!("Could not notify webview: {}", e);
                }
            });

            // 5. APPLICATION STATE
            app.manage(AppState {
                event_bus,
                planet_log_service,
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_planet_log,
            set_planet_name,
            set_planet_description,
            set_planet_image,
            submit_planet,
            delete_planet,
            begin_edit_planet,
            set_edit_description,
            save_planet_edit,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
