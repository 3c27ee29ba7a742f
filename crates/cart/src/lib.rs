//! Cart domain module.
//!
//! Quantity-by-product bookkeeping for a single shopping session. The cart is
//! independent of the catalog: it only stores product ids and joins against a
//! catalog when prices are needed.

pub mod cart;

pub use cart::{CartEntry, CartEvent, CartLine, CartStore};
