// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - It provides the boundary between UI (Tauri) and the service
// - It translates between DTOs and domain values

pub mod dto;
pub mod error_handling;
pub mod state;

#[cfg(feature = "desktop")]
pub mod commands;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;

#[cfg(feature = "desktop")]
pub use commands::*;
