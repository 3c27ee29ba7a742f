//! Monetary amounts.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Non-negative price, kept exactly as the catalog API sent it.
///
/// On the wire a price is a decimal number (`109.95`). The value is finite,
/// never negative and never `-0.0`, so ordering is total. Sums and
/// per-line subtotals are computed in whole cents.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents as f64 / 100.0)
    }

    /// The amount rounded to the nearest cent (saturating).
    pub fn cents(&self) -> u64 {
        (self.0 * 100.0).round() as u64
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Price of `quantity` units, in whole cents. Saturates instead of wrapping.
    pub fn times(self, quantity: u32) -> Price {
        Price::from_cents(self.cents().saturating_mul(u64::from(quantity)))
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        // Folds -0.0 into 0.0.
        Ok(Price(value + 0.0))
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::from_cents(self.cents().saturating_add(rhs.cents()))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cents = self.cents();
        write!(f, "${}.{:02}", cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_prices_match_cent_constructor() {
        assert_eq!(Price::try_from(109.95).unwrap(), Price::from_cents(10995));
        assert_eq!(Price::try_from(22.3).unwrap(), Price::from_cents(2230));
        assert_eq!(Price::try_from(0.1 + 0.2).unwrap().cents(), 30);
    }

    #[test]
    fn sub_cent_prices_stay_distinct() {
        let low = Price::try_from(0.001).unwrap();
        let high = Price::try_from(0.004).unwrap();
        assert!(low < high);
        assert_ne!(low, high);
        assert_eq!(low.cents(), 0);
        assert_eq!(serde_json::to_string(&high).unwrap(), "0.004");
    }

    #[test]
    fn negative_zero_equals_zero() {
        let price = Price::try_from(-0.0).unwrap();
        assert_eq!(price, Price::ZERO);
        assert!(price.amount().is_sign_positive());
    }

    #[test]
    fn negative_and_non_finite_prices_are_rejected() {
        assert!(matches!(Price::try_from(-1.0), Err(DomainError::Validation(_))));
        assert!(matches!(Price::try_from(-0.001), Err(DomainError::Validation(_))));
        assert!(matches!(Price::try_from(f64::NAN), Err(DomainError::Validation(_))));
        assert!(matches!(Price::try_from(f64::INFINITY), Err(DomainError::Validation(_))));
    }

    #[test]
    fn deserializes_from_json_number() {
        let price: Price = serde_json::from_str("55.99").unwrap();
        assert_eq!(price.cents(), 5599);

        let err = serde_json::from_str::<Price>("-3").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn serializes_as_decimal() {
        let json = serde_json::to_string(&Price::from_cents(1250)).unwrap();
        assert_eq!(json, "12.5");
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::from_cents(10995).to_string(), "$109.95");
        assert_eq!(Price::try_from(0.004).unwrap().to_string(), "$0.00");
    }

    #[test]
    fn sum_and_times_work_in_cents() {
        let total: Price = [Price::from_cents(100), Price::from_cents(250).times(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(600));

        let odd: Price = [Price::try_from(109.95).unwrap(), Price::try_from(22.3).unwrap()]
            .into_iter()
            .sum();
        assert_eq!(odd, Price::from_cents(13225));
        assert_eq!(Price::try_from(0.1).unwrap().times(3), Price::from_cents(30));
    }
}
