//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. A filter configuration or a price is a value object; a
//! product is an entity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one, build a
/// new one and replace the old value wholesale.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Discount {
///     percent: u8,
/// }
///
/// impl ValueObject for Discount {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
