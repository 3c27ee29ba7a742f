//! Change notifications for client-side stores.
//!
//! Stores publish a message per effective mutation; display code subscribes
//! and re-reads whatever it needs.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
