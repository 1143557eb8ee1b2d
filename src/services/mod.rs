// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod planet_log_service;

#[cfg(test)]
mod planet_log_service_tests;

pub use planet_log_service::{LogState, PlanetLogService, SubmitOutcome};
