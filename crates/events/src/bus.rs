//! Publish/subscribe abstraction (mechanics only).
//!
//! The bus distributes change notifications from a store to any number of
//! readers. It makes minimal assumptions:
//!
//! - **Broadcast**: each subscription gets its own copy of every message
//!   published after it was created.
//! - **No replay**: late subscribers read current state from the store
//!   itself, not from the bus.
//! - **No persistence**: the store is the source of truth.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

/// A subscription to a message stream.
///
/// ```ignore
/// let subscription = cart.subscribe();
/// cart.add(product_id, 1);
///
/// while let Ok(event) = subscription.try_recv() {
///     redraw_badge(event);
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain everything published so far.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Message bus (pub/sub abstraction).
///
/// `publish()` may fail (e.g. lock poisoning); the caller decides whether that
/// matters. Stores treat notification failures as non-fatal because their
/// state has already changed.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
