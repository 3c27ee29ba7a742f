use chrono::{DateTime, Utc};

/// A store change notification.
///
/// Events are facts about a mutation that already happened; they are never
/// edited after being published.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "cart.item.added").
    fn event_type(&self) -> &'static str;

    /// When the mutation happened.
    fn occurred_at(&self) -> DateTime<Utc>;
}
