//! Category extraction.

use std::collections::HashSet;

use crate::product::Product;

/// Distinct category labels, in the order they first appear in `products`.
///
/// Order is first-seen rather than alphabetic so the list does not reshuffle
/// while a catalog is being displayed.
pub fn categories(products: &[Product]) -> Vec<&str> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(|p| p.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}
