//! Owned application state and the display snapshot derived from it.

use serde::{Deserialize, Serialize};

use storefront_cart::{CartLine, CartStore};
use storefront_catalog::{Catalog, FilterConfig, Product, SortOrder, apply, categories};
use storefront_core::{Price, ProductId};

use crate::source::{CatalogLoad, CatalogSource, load_or_fallback};

/// User input coming back from the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    SearchChanged { search: String },
    CategorySelected { category: String },
    SortSelected { sort: SortOrder },
    FiltersReplaced { filters: FilterConfig },
    AddToCart { product_id: ProductId, quantity: i64 },
    RemoveFromCart { product_id: ProductId },
    SetCartQuantity { product_id: ProductId, quantity: i64 },
    ClearCart,
    ToggleCart,
}

/// Everything the display layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontView {
    pub loading: bool,
    /// Fallback notice, already phrased for display.
    pub notice: Option<String>,
    pub categories: Vec<String>,
    pub filters: FilterConfig,
    pub products: Vec<Product>,
    pub product_count_label: String,
    pub cart_open: bool,
    pub cart_lines: Vec<CartLine>,
    pub cart_total: Price,
    pub cart_item_count: u64,
}

/// The storefront's state: catalog, filters, cart and panel toggle.
///
/// Derived data (categories, filtered products) is recomputed from the
/// current state on every [`Storefront::view`] call and never cached.
#[derive(Debug)]
pub struct Storefront {
    loading: bool,
    error: Option<String>,
    catalog: Catalog,
    filters: FilterConfig,
    cart_open: bool,
    cart: CartStore,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    /// A storefront waiting for its catalog.
    pub fn new() -> Self {
        Self {
            loading: true,
            error: None,
            catalog: Catalog::empty(),
            filters: FilterConfig::default(),
            cart_open: false,
            cart: CartStore::new(),
        }
    }

    /// Run the single startup load and install its result.
    pub async fn load(&mut self, source: &dyn CatalogSource) {
        self.loading = true;
        let load = load_or_fallback(source).await;
        self.finish_load(load);
    }

    /// Install the outcome of a catalog load; both outcomes end loading.
    pub fn finish_load(&mut self, load: CatalogLoad) {
        self.catalog = load.catalog;
        self.error = load.notice;
        self.loading = false;
    }

    pub fn handle(&mut self, event: UiEvent) {
        tracing::debug!(?event, "ui event");
        match event {
            UiEvent::SearchChanged { search } => {
                self.filters = FilterConfig {
                    search,
                    ..self.filters.clone()
                };
            }
            UiEvent::CategorySelected { category } => {
                self.filters = FilterConfig {
                    category,
                    ..self.filters.clone()
                };
            }
            UiEvent::SortSelected { sort } => {
                self.filters = FilterConfig {
                    sort,
                    ..self.filters.clone()
                };
            }
            UiEvent::FiltersReplaced { filters } => self.filters = filters,
            UiEvent::AddToCart {
                product_id,
                quantity,
            } => self.cart.add(product_id, quantity),
            UiEvent::RemoveFromCart { product_id } => self.cart.remove(product_id),
            UiEvent::SetCartQuantity {
                product_id,
                quantity,
            } => self.cart.set_quantity(product_id, quantity),
            UiEvent::ClearCart => self.cart.clear(),
            UiEvent::ToggleCart => self.cart_open = !self.cart_open,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The error phrased for display, if any.
    pub fn notice(&self) -> Option<String> {
        self.error
            .as_ref()
            .map(|e| format!("{e} - Showing demo products instead"))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Products matching the current filters, in display order.
    pub fn visible_products(&self) -> Vec<&Product> {
        apply(self.catalog.products(), &self.filters)
    }

    pub fn view(&self) -> StorefrontView {
        let products: Vec<Product> = if self.loading {
            Vec::new()
        } else {
            self.visible_products().into_iter().cloned().collect()
        };

        StorefrontView {
            loading: self.loading,
            notice: self.notice(),
            categories: categories(self.catalog.products())
                .into_iter()
                .map(str::to_owned)
                .collect(),
            filters: self.filters.clone(),
            product_count_label: product_count_label(products.len()),
            products,
            cart_open: self.cart_open,
            cart_lines: self.cart.lines(&self.catalog),
            cart_total: self.cart.total(&self.catalog),
            cart_item_count: self.cart.item_count(),
        }
    }
}

/// Events that bring a freshly loaded storefront to a requested starting
/// state: the filters replaced wholesale, then one unit of each listed
/// product added. The cart panel opens only if something was added.
pub fn startup_events(filters: FilterConfig, add: &[ProductId]) -> Vec<UiEvent> {
    let mut events = vec![UiEvent::FiltersReplaced { filters }];
    events.extend(add.iter().map(|&product_id| UiEvent::AddToCart {
        product_id,
        quantity: 1,
    }));
    if !add.is_empty() {
        events.push(UiEvent::ToggleCart);
    }
    events
}

/// "1 product found" / "N products found".
pub fn product_count_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} product{suffix} found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{CatalogLoadFailure, StaticCatalogSource};
    use storefront_catalog::fallback_products;

    struct FailingSource;

    #[async_trait::async_trait]
    impl CatalogSource for FailingSource {
        async fn load(&self) -> Result<Catalog, CatalogLoadFailure> {
            Err(CatalogLoadFailure::Status(503))
        }
    }

    fn shoe_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "Red Shoe", "shoes", Price::from_cents(5000)),
            Product::new(2, "Blue Shoe", "shoes", Price::from_cents(3000)),
            Product::new(3, "Hat", "hats", Price::from_cents(2000)),
        ])
        .unwrap()
    }

    fn loaded() -> Storefront {
        let mut storefront = Storefront::new();
        storefront.finish_load(CatalogLoad::remote(shoe_catalog()));
        storefront
    }

    fn ids(view: &StorefrontView) -> Vec<u64> {
        view.products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn starts_loading_with_nothing_to_show() {
        let storefront = Storefront::new();
        let view = storefront.view();
        assert!(view.loading);
        assert!(view.products.is_empty());
        assert!(view.notice.is_none());
    }

    #[tokio::test]
    async fn successful_load_shows_catalog() {
        let mut storefront = Storefront::new();
        storefront.load(&StaticCatalogSource::new(shoe_catalog())).await;

        let view = storefront.view();
        assert!(!view.loading);
        assert!(view.notice.is_none());
        assert_eq!(ids(&view), vec![1, 2, 3]);
        assert_eq!(view.categories, vec!["shoes", "hats"]);
        assert_eq!(view.product_count_label, "3 products found");
    }

    #[tokio::test]
    async fn failed_load_shows_fallback_and_notice() {
        let mut storefront = Storefront::new();
        storefront.load(&FailingSource).await;

        let view = storefront.view();
        assert!(!view.loading);
        assert_eq!(view.products, fallback_products());
        assert_eq!(
            view.notice.as_deref(),
            Some("Failed to load products - Showing demo products instead")
        );
        assert_eq!(storefront.error(), Some("Failed to load products"));
    }

    #[test]
    fn search_and_sort_events_drive_the_listing() {
        let mut storefront = loaded();
        storefront.handle(UiEvent::SearchChanged {
            search: "shoe".to_string(),
        });
        storefront.handle(UiEvent::SortSelected {
            sort: SortOrder::PriceAscending,
        });

        let view = storefront.view();
        assert_eq!(ids(&view), vec![2, 1]);
        assert_eq!(view.filters.search, "shoe");
    }

    #[test]
    fn category_event_keeps_other_filters() {
        let mut storefront = loaded();
        storefront.handle(UiEvent::SearchChanged {
            search: "a".to_string(),
        });
        storefront.handle(UiEvent::CategorySelected {
            category: "hats".to_string(),
        });

        assert_eq!(storefront.filters().search, "a");
        assert_eq!(ids(&storefront.view()), vec![3]);
        assert_eq!(storefront.view().product_count_label, "1 product found");
    }

    #[test]
    fn filters_replaced_wholesale() {
        let mut storefront = loaded();
        storefront.handle(UiEvent::SearchChanged {
            search: "hat".to_string(),
        });
        storefront.handle(UiEvent::FiltersReplaced {
            filters: FilterConfig::new().with_sort(SortOrder::PriceDescending),
        });

        assert_eq!(ids(&storefront.view()), vec![1, 2, 3]);
    }

    #[test]
    fn no_matches_reports_zero() {
        let mut storefront = loaded();
        storefront.handle(UiEvent::SearchChanged {
            search: "sock".to_string(),
        });
        assert_eq!(storefront.view().product_count_label, "0 products found");
    }

    #[test]
    fn cart_events_update_cart_view() {
        let mut storefront = loaded();
        storefront.handle(UiEvent::AddToCart {
            product_id: ProductId::new(1),
            quantity: 1,
        });
        storefront.handle(UiEvent::AddToCart {
            product_id: ProductId::new(1),
            quantity: 1,
        });
        storefront.handle(UiEvent::SetCartQuantity {
            product_id: ProductId::new(3),
            quantity: 2,
        });

        let view = storefront.view();
        assert_eq!(view.cart_item_count, 4);
        assert_eq!(view.cart_total, Price::from_cents(14000));
        assert_eq!(view.cart_lines.len(), 2);

        storefront.handle(UiEvent::SetCartQuantity {
            product_id: ProductId::new(1),
            quantity: 0,
        });
        storefront.handle(UiEvent::RemoveFromCart {
            product_id: ProductId::new(99),
        });
        assert_eq!(storefront.cart().quantity(ProductId::new(1)), None);
        assert_eq!(storefront.view().cart_total, Price::from_cents(4000));

        storefront.handle(UiEvent::ClearCart);
        assert!(storefront.cart().is_empty());
    }

    #[test]
    fn cart_is_independent_of_filters() {
        let mut storefront = loaded();
        storefront.handle(UiEvent::AddToCart {
            product_id: ProductId::new(3),
            quantity: 1,
        });
        storefront.handle(UiEvent::CategorySelected {
            category: "shoes".to_string(),
        });

        let view = storefront.view();
        assert_eq!(ids(&view), vec![1, 2]);
        assert_eq!(view.cart_lines[0].product.id, ProductId::new(3));
    }

    #[test]
    fn toggle_cart_flips_panel() {
        let mut storefront = loaded();
        assert!(!storefront.is_cart_open());
        storefront.handle(UiEvent::ToggleCart);
        assert!(storefront.view().cart_open);
        storefront.handle(UiEvent::ToggleCart);
        assert!(!storefront.is_cart_open());
    }

    #[test]
    fn ui_events_decode_from_json() {
        let event: UiEvent =
            serde_json::from_str(r#"{"type":"add_to_cart","product_id":5,"quantity":2}"#).unwrap();
        assert_eq!(
            event,
            UiEvent::AddToCart {
                product_id: ProductId::new(5),
                quantity: 2,
            }
        );

        let event: UiEvent = serde_json::from_str(r#"{"type":"sort_selected","sort":"high-low"}"#).unwrap();
        assert_eq!(
            event,
            UiEvent::SortSelected {
                sort: SortOrder::PriceDescending,
            }
        );
    }

    #[test]
    fn startup_events_without_additions_only_set_filters() {
        let filters = FilterConfig::new().with_search("shoe");
        let events = startup_events(filters.clone(), &[]);
        assert_eq!(events, vec![UiEvent::FiltersReplaced { filters }]);
    }

    #[test]
    fn startup_events_fill_cart_and_open_panel() {
        let filters = FilterConfig::new()
            .with_category("shoes")
            .with_sort(SortOrder::from_label("high-low"));
        let events = startup_events(filters, &[ProductId::new(3), ProductId::new(3), ProductId::new(2)]);
        assert_eq!(events.len(), 5);
        assert_eq!(events[4], UiEvent::ToggleCart);

        let mut storefront = loaded();
        for event in events {
            storefront.handle(event);
        }

        let view = storefront.view();
        assert_eq!(ids(&view), vec![1, 2]);
        assert!(view.cart_open);
        assert_eq!(view.cart_item_count, 3);
        assert_eq!(view.cart_total, Price::from_cents(7000));
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(product_count_label(0), "0 products found");
        assert_eq!(product_count_label(1), "1 product found");
        assert_eq!(product_count_label(2), "2 products found");
    }
}
