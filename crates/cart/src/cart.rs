use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::{Catalog, Product};
use storefront_core::{Price, ProductId};
use storefront_events::{Event, EventBus, InMemoryEventBus, Subscription};

/// One cart row: a product reference and a quantity (always >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Cart row joined with its catalog product, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub subtotal: Price,
}

/// Notification published after every effective cart mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded {
        product_id: ProductId,
        added: u32,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
    QuantityChanged {
        product_id: ProductId,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
    ItemRemoved {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    Cleared {
        occurred_at: DateTime<Utc>,
    },
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "cart.item.added",
            CartEvent::QuantityChanged { .. } => "cart.item.quantity_changed",
            CartEvent::ItemRemoved { .. } => "cart.item.removed",
            CartEvent::Cleared { .. } => "cart.cleared",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded { occurred_at, .. }
            | CartEvent::QuantityChanged { occurred_at, .. }
            | CartEvent::ItemRemoved { occurred_at, .. }
            | CartEvent::Cleared { occurred_at } => *occurred_at,
        }
    }
}

/// Session-scoped cart state.
///
/// Owned explicitly by whoever drives the UI and lent out by reference; there
/// is no global instance. Readers can either borrow the store or subscribe to
/// change notifications.
///
/// Invariant: every stored quantity is >= 1. Anything that would bring an
/// entry to zero removes it instead.
#[derive(Debug)]
pub struct CartStore<B = InMemoryEventBus<CartEvent>>
where
    B: EventBus<CartEvent>,
{
    entries: HashMap<ProductId, u32>,
    bus: B,
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_bus(InMemoryEventBus::new())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> CartStore<B>
where
    B: EventBus<CartEvent>,
{
    pub fn with_bus(bus: B) -> Self {
        Self {
            entries: HashMap::new(),
            bus,
        }
    }

    /// Subscribe to change notifications published from now on.
    ///
    /// Each subscription buffers without bound until read. Drain it
    /// regularly or drop it once no longer interested.
    pub fn subscribe(&self) -> Subscription<CartEvent> {
        self.bus.subscribe()
    }

    /// Add `quantity` units of a product, creating the entry if needed.
    ///
    /// Non-positive quantities are ignored; callers validate input.
    pub fn add(&mut self, product_id: ProductId, quantity: i64) {
        let Some(added) = positive_quantity(quantity) else {
            tracing::debug!(%product_id, quantity, "ignoring non-positive cart add");
            return;
        };

        let entry = self.entries.entry(product_id).or_insert(0);
        *entry = entry.saturating_add(added);
        let quantity = *entry;

        tracing::debug!(%product_id, added, quantity, "cart item added");
        self.notify(CartEvent::ItemAdded {
            product_id,
            added,
            quantity,
            occurred_at: Utc::now(),
        });
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product_id: ProductId) {
        self.add(product_id, 1);
    }

    /// Delete an entry. Removing an absent product is a no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        if self.entries.remove(&product_id).is_none() {
            return;
        }

        tracing::debug!(%product_id, "cart item removed");
        self.notify(CartEvent::ItemRemoved {
            product_id,
            occurred_at: Utc::now(),
        });
    }

    /// Replace an entry's quantity; zero or less removes the entry.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        let Some(quantity) = positive_quantity(quantity) else {
            self.remove(product_id);
            return;
        };

        if self.entries.insert(product_id, quantity) == Some(quantity) {
            return;
        }

        tracing::debug!(%product_id, quantity, "cart quantity changed");
        self.notify(CartEvent::QuantityChanged {
            product_id,
            quantity,
            occurred_at: Utc::now(),
        });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        self.entries.clear();
        tracing::debug!("cart cleared");
        self.notify(CartEvent::Cleared {
            occurred_at: Utc::now(),
        });
    }

    pub fn quantity(&self, product_id: ProductId) -> Option<u32> {
        self.entries.get(&product_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of quantities (the header badge count).
    pub fn item_count(&self) -> u64 {
        self.entries.values().map(|&q| u64::from(q)).sum()
    }

    /// All entries, ordered by product id.
    pub fn entries(&self) -> Vec<CartEntry> {
        let mut entries: Vec<CartEntry> = self
            .entries
            .iter()
            .map(|(&product_id, &quantity)| CartEntry {
                product_id,
                quantity,
            })
            .collect();
        entries.sort_by_key(|e| e.product_id);
        entries
    }

    /// Sum of price x quantity, joined against `catalog` by product id.
    ///
    /// Entries whose product is missing from the catalog contribute nothing.
    pub fn total(&self, catalog: &Catalog) -> Price {
        self.entries
            .iter()
            .filter_map(|(&id, &quantity)| catalog.get(id).map(|p| p.price.times(quantity)))
            .sum()
    }

    /// Cart rows joined with their products, in catalog order.
    ///
    /// Stale entries are skipped; see [`CartStore::stale_entries`].
    pub fn lines(&self, catalog: &Catalog) -> Vec<CartLine> {
        catalog
            .iter()
            .filter_map(|product| {
                self.entries.get(&product.id).map(|&quantity| CartLine {
                    product: product.clone(),
                    quantity,
                    subtotal: product.price.times(quantity),
                })
            })
            .collect()
    }

    /// Ids of entries whose product is not in `catalog`, ordered by id.
    pub fn stale_entries(&self, catalog: &Catalog) -> Vec<ProductId> {
        let mut stale: Vec<ProductId> = self
            .entries
            .keys()
            .copied()
            .filter(|&id| !catalog.contains(id))
            .collect();
        stale.sort();
        stale
    }

    /// Remove every stale entry and return the removed ids.
    pub fn prune_stale(&mut self, catalog: &Catalog) -> Vec<ProductId> {
        let stale = self.stale_entries(catalog);
        for &id in &stale {
            self.remove(id);
        }
        if !stale.is_empty() {
            tracing::info!(count = stale.len(), "pruned stale cart entries");
        }
        stale
    }

    fn notify(&self, event: CartEvent) {
        // State has already changed; a failed notification is not fatal.
        if let Err(err) = self.bus.publish(event) {
            tracing::warn!(?err, "failed to publish cart event");
        }
    }
}

fn positive_quantity(quantity: i64) -> Option<u32> {
    if quantity <= 0 {
        return None;
    }
    Some(u32::try_from(quantity).unwrap_or(u32::MAX))
}
