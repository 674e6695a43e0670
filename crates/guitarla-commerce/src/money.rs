//! Money type for representing prices.
//!
//! Amounts are held as integer cents so totals are exact. On the wire a price
//! is a plain number (`299`, `349.99`), which is what the persisted cart and
//! the catalog files contain. Amounts finer than a cent are rejected rather
//! than rounded, so every accepted price is written back exactly as read.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::error::CommerceError;

/// Slack allowed when scaling a decimal to cents, relative to the amount.
const CENT_TOLERANCE: f64 = 1e-6;

/// A non-negative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(try_from = "f64")]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// Fails for negative, non-finite or out-of-range amounts and for
    /// amounts with a fraction of a cent.
    ///
    /// ```
    /// use guitarla_commerce::Money;
    /// let price = Money::from_decimal(49.99).unwrap();
    /// assert_eq!(price.cents(), 4999);
    /// assert!(Money::from_decimal(19.999).is_err());
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, CommerceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        let scaled = amount * 100.0;
        let cents = scaled.round();
        if cents >= i64::MAX as f64 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        if (scaled - cents).abs() > CENT_TOLERANCE * scaled.max(1.0) {
            return Err(CommerceError::InvalidPrice(format!(
                "{amount} has a fraction of a cent"
            )));
        }
        Ok(Self::from_cents(cents as i64))
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Amount as a decimal number.
    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Add two amounts, returning `None` on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, quantity: u32) -> Option<Money> {
        self.cents
            .checked_mul(i64::from(quantity))
            .map(Money::from_cents)
    }

    /// Sum amounts, returning `None` on overflow.
    pub fn try_sum<'a>(amounts: impl IntoIterator<Item = &'a Money>) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }
}

impl TryFrom<f64> for Money {
    type Error = CommerceError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Money::from_decimal(amount)
    }
}

/// Whole amounts are written as integers, anything else as a decimal.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents % 100 == 0 {
            serializer.serialize_i64(self.cents / 100)
        } else {
            serializer.serialize_f64(self.as_decimal())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}
