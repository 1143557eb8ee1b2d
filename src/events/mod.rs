// src/events/mod.rs
//
// Internal Event System - Public API
//
// The type-erased handler alias stays private to the bus

pub mod bus;
pub mod types;

pub use bus::EventBus;
pub use types::{DomainEvent, PlanetDeleted, PlanetDescriptionUpdated, PlanetLogged};
