use std::cell::RefCell;
use crate::event::{EventHandler, PadEvent};

/// A simple event bus for broadcasting pad events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        // When cloning, create a new empty event bus
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Number of subscribed handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: PadEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Counter(Arc<Mutex<usize>>);

    impl EventHandler for Counter {
        fn handle_event(&mut self, event: &PadEvent) {
            if *event == PadEvent::RepaintRequested {
                *self.0.lock().unwrap() += 1;
            }
        }
    }

    #[test]
    fn test_emit_reaches_every_handler() {
        let count = Arc::new(Mutex::new(0));
        let bus = EventBus::new();
        bus.subscribe(Box::new(Counter(count.clone())));
        bus.subscribe(Box::new(Counter(count.clone())));

        bus.emit(PadEvent::RepaintRequested);
        bus.emit(PadEvent::Cleared);

        assert_eq!(*count.lock().unwrap(), 2);
    }

    #[test]
    fn test_clone_drops_handlers() {
        let bus = EventBus::new();
        bus.subscribe(Box::new(Counter(Arc::new(Mutex::new(0)))));
        assert_eq!(bus.clone().handler_count(), 0);
    }
}
