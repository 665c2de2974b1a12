use std::cell::RefCell;

use log::warn;

use crate::event::{EventHandler, SessionEvent};

/// Fan-out of session events to the handlers subscribed to one session.
///
/// Handlers run synchronously in subscription order. An event emitted while
/// another emission is still running is dropped rather than re-entered.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

// Subscriptions are tied to the session that made them
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        match self.handlers.try_borrow_mut() {
            Ok(mut handlers) => handlers.push(handler),
            Err(_) => warn!("Cannot subscribe while an event is being dispatched"),
        }
    }

    /// Number of subscribed handlers; zero while an emission is in flight.
    pub fn len(&self) -> usize {
        self.handlers.try_borrow().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn emit(&self, event: SessionEvent) {
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            warn!("Dropped nested event: {}", event.describe());
            return;
        };
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
    }
}
