mod bus;
mod events;

pub use bus::EventBus;
pub use events::SessionEvent;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &SessionEvent);
}
