//! `storefront-client`
//!
//! **Responsibility:** the storefront as seen by a display layer.
//!
//! This crate provides:
//! - Catalog loading from the catalog API, with a bundled fallback
//! - The owned application state (catalog, filters, cart, panel toggle)
//! - A plain-text rendering of the current view for the CLI
//!
//! Filtering and cart rules live in the domain crates; this crate only wires
//! them to IO.

pub mod config;
pub mod render;
pub mod source;
pub mod state;

pub use config::StorefrontConfig;
pub use source::{
    CatalogLoad, CatalogLoadFailure, CatalogOrigin, CatalogSource, HttpCatalogSource,
    StaticCatalogSource, load_or_fallback,
};
pub use state::{Storefront, StorefrontView, UiEvent, startup_events};
