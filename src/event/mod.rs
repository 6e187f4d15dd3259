mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::PadEvent;
pub use handlers::RepaintHandler;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &PadEvent);
}
