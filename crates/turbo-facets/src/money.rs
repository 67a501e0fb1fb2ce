//! Price types for filtering and sorting.
//!
//! Prices are stored as integers in the smallest currency unit (cents), which
//! keeps range checks and price sorting exact. The catalog and the wire format
//! carry prices as decimal numbers in major units, e.g. `25.40`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minor units per major unit.
const MINOR_PER_MAJOR: u64 = 100;

/// A non-negative product price in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

impl Price {
    /// Create a price from minor units.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The zero price.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The largest representable price.
    pub const fn max_value() -> Self {
        Self(u64::MAX)
    }

    /// Create a price from a decimal amount in major units, rounding to the nearest cent.
    pub fn from_decimal(amount: f64) -> Result<Self, String> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(format!("price must be a non-negative number, got {}", amount));
        }
        // `as` saturates, so out-of-range amounts clamp to `max_value`.
        Ok(Self((amount * MINOR_PER_MAJOR as f64).round() as u64))
    }

    /// Get the amount in minor units.
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Get the amount as a decimal in major units.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }
}

impl TryFrom<f64> for Price {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.to_decimal()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / MINOR_PER_MAJOR, self.0 % MINOR_PER_MAJOR)
    }
}

/// An inclusive price range with `min <= max`.
///
/// Construction swaps inverted bounds, so an invalid range can never be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPriceRange")]
pub struct PriceRange {
    min: Price,
    max: Price,
}

#[derive(Deserialize)]
struct RawPriceRange {
    min: Price,
    max: Price,
}

impl From<RawPriceRange> for PriceRange {
    fn from(raw: RawPriceRange) -> Self {
        PriceRange::new(raw.min, raw.max)
    }
}

impl PriceRange {
    /// Create a range, swapping the bounds if `min > max`.
    pub fn new(min: impl Into<Price>, max: impl Into<Price>) -> Self {
        let (min, max) = (min.into(), max.into());
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// A range that admits every price.
    pub fn unbounded() -> Self {
        Self {
            min: Price::zero(),
            max: Price::max_value(),
        }
    }

    pub fn min(&self) -> Price {
        self.min
    }

    pub fn max(&self) -> Price {
        self.max
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }

    /// Check whether `other` lies entirely within this range.
    pub fn encloses(&self, other: &PriceRange) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
