//! Catalog domain module.
//!
//! Product records, the category extractor and the filter/sort pipeline,
//! implemented as deterministic domain logic (no IO, no HTTP, no storage).

pub mod categories;
pub mod fallback;
pub mod filter;
pub mod product;

pub use categories::categories;
pub use fallback::{fallback_catalog, fallback_products};
pub use filter::{FilterConfig, SortOrder, apply};
pub use product::{Catalog, Product, Rating};
