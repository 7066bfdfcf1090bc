//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    49.99 + 49.99 + 5.99 = 105.97000000000001                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    4999 + 4999 + 599 = 10597 pence = £105.97                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tablebook_core::money::Money;
//!
//! let steak = Money::from_cents(4999); // £49.99
//! let coffee: Money = "5.99".parse().unwrap();
//! let total = steak.checked_add(steak).and_then(|t| t.checked_add(coffee));
//! assert_eq!(total.map(|t| t.cents()), Some(10597));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: parsing accepts a sign so validation can reject it
///   with a useful message instead of a format error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► Order.total() ──► surcharge ──► + tip ──► bill
///                                                      │
///                                                      └──► Table tip
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use tablebook_core::money::Money;
    ///
    /// let price = Money::from_cents(1499); // Represents £14.99
    /// assert_eq!(price.cents(), 1499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-pound portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that returns `None` instead of overflowing.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds a percentage surcharge and returns the surcharged amount, or
    /// `None` if the result does not fit.
    ///
    /// ## Arguments
    /// * `surcharge_bps` - Surcharge in basis points (1000 = 10%)
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount * bps + 5000) / 10000`.
    ///
    /// ## Example
    /// ```rust
    /// use tablebook_core::money::Money;
    ///
    /// let total = Money::from_cents(10000); // £100.00
    /// assert_eq!(total.apply_surcharge(1000), Some(Money::from_cents(11000)));
    ///
    /// // £105.97 × 10% = £10.597 → £10.60
    /// assert_eq!(Money::from_cents(10597).apply_surcharge(1000), Some(Money::from_cents(11657)));
    ///
    /// assert_eq!(Money::from_cents(i64::MAX).apply_surcharge(1000), None);
    /// ```
    pub fn apply_surcharge(&self, surcharge_bps: u32) -> Option<Money> {
        // i128 so large totals cannot overflow mid-calculation
        let amount = self.0 as i128;
        let surcharged = amount + (amount * surcharge_bps as i128 + 5000) / 10000;
        i64::try_from(surcharged).ok().map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays as pounds, e.g. "£49.99".
///
/// The console formats with its configured currency symbol instead; this is
/// the default rendering used in messages and `Display` of menu items.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Parses decimal text such as "5", "5.5", "12.34" or "£12.34".
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_amount("amount", s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
