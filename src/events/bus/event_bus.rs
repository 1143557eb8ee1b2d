// events/bus/event_bus.rs
//
// In-process publish/subscribe for log changes.
//
// Handlers run synchronously on the emitting thread, in subscription order.
// The registry lock is released before any handler runs, so a handler may
// subscribe or emit without deadlocking.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::types::DomainEvent;

type EventHandler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// Services emit after a mutation has been applied and persisted;
/// the desktop shell subscribes to forward changes to the webview.
/// A panicking handler is logged and does not stop the others.
#[derive(Clone, Default)]
pub struct EventBus {
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every future `E`
    ///
    /// ```ignore
    /// bus.subscribe::<PlanetLogged, _>(|event| {
    ///     log::info!("Planet logged: {}", event.name);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: EventHandler = Arc::new(move |event: &dyn Any| {
            match event.downcast_ref::<E>() {
                Some(event) => handler(event),
                None => log::error!(
                    "Handler for {} received a different event type",
                    std::any::type_name::<E>()
                ),
            }
        });

        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        // Snapshot so handlers run without the registry lock
        let handlers: Vec<EventHandler> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();

        log::debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            handlers.len()
        );

        for (position, handler) in handlers.iter().enumerate() {
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any)
            }));
            if let Err(panic) = outcome {
                log::error!(
                    "Handler {} for {} panicked: {:?}",
                    position,
                    event.event_type(),
                    panic
                );
            }
        }
    }

    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}
