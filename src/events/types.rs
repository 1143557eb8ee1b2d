// events/types.rs
//
// Domain events of the planet log.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// Emitted when a validated planet is appended to the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetLogged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub index: usize,
    pub name: String,
}

impl PlanetLogged {
    pub fn new(index: usize, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            index,
            name,
        }
    }
}

impl DomainEvent for PlanetLogged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PlanetLogged" }
}

/// Emitted when a planet is removed from the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub index: usize,
    pub name: String,
}

impl PlanetDeleted {
    pub fn new(index: usize, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            index,
            name,
        }
    }
}

impl DomainEvent for PlanetDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PlanetDeleted" }
}

/// Emitted when an edited description is saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetDescriptionUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub index: usize,
}

impl PlanetDescriptionUpdated {
    pub fn new(index: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            index,
        }
    }
}

impl DomainEvent for PlanetDescriptionUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PlanetDescriptionUpdated" }
}
