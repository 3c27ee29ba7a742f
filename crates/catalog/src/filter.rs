//! Filter/sort pipeline.
//!
//! `apply` is pure and cheap enough to rerun on every state change; derived
//! listings are never patched incrementally.

use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

use crate::product::Product;

/// Price ordering selected by the user.
///
/// Wire labels are the ones the storefront UI emits: `""`, `"low-high"` and
/// `"high-low"`. Unknown labels mean "no sort".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SortOrder {
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    /// Lenient parse: anything other than an exact label is `SortOrder::None`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "low-high" => SortOrder::PriceAscending,
            "high-low" => SortOrder::PriceDescending,
            _ => SortOrder::None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            SortOrder::None => "",
            SortOrder::PriceAscending => "low-high",
            SortOrder::PriceDescending => "high-low",
        }
    }
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        SortOrder::from_label(&value)
    }
}

impl From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        SortOrder::from_label(value)
    }
}

impl From<SortOrder> for &'static str {
    fn from(value: SortOrder) -> Self {
        value.as_label()
    }
}

/// Current search/category/sort criteria.
///
/// Empty `search` or `category` means "no filter", not "match the empty
/// string".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub search: String,
    pub category: String,
    pub sort: SortOrder,
}

impl ValueObject for FilterConfig {}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// True when `apply` would return the catalog unchanged.
    pub fn is_noop(&self) -> bool {
        self.search.is_empty() && self.category.is_empty() && self.sort == SortOrder::None
    }
}

/// Products to display for `config`, in display order.
///
/// Stages run in a fixed order: title search (case-insensitive substring),
/// exact category match, then a stable price sort. The result borrows from
/// `products` and keeps catalog order unless a sort is active.
pub fn apply<'a>(products: &'a [Product], config: &FilterConfig) -> Vec<&'a Product> {
    let mut result: Vec<&Product> = products.iter().collect();

    if !config.search.is_empty() {
        let needle = config.search.to_lowercase();
        result.retain(|p| p.title.to_lowercase().contains(&needle));
    }

    if !config.category.is_empty() {
        result.retain(|p| p.category == config.category);
    }

    match config.sort {
        SortOrder::None => {}
        SortOrder::PriceAscending => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDescending => result.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    tracing::trace!(
        input = products.len(),
        output = result.len(),
        sort = config.sort.as_label(),
        "applied catalog filters"
    );

    result
}
