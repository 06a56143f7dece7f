//! # Money Module
//!
//! Provides the `Money` type and the display-price codec.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    100.99 * 100 = 10098.999999999998  ❌ WRONG if truncated!            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + one conversion edge                      │
//! │    Store, services, arithmetic:   9999 cents                            │
//! │    HTTP JSON (admin SPA):         "99.99"                               │
//! │    Conversion happens ONCE, in the API DTO layer, both directions       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopdesk_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Display form for the SPA
//! assert_eq!(price.to_display(), Decimal::new(1099, 2));
//!
//! // Arithmetic is checked
//! let total = price.checked_add(Money::from_cents(500)); // $15.99
//! assert_eq!(total, Some(Money::from_cents(1599)));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Same width as the SQLite INTEGER column
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No operator impls**: every sum or product goes through a `checked_*`
///   method so overflow surfaces as `None`
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  POST /products {"price": "99.99"}                                     │
/// │        │ Money::from_display                                            │
/// │        ▼                                                                │
/// │  Product.price_cents = 9999 ──► Order.order_price_cents = 9999 × qty   │
/// │        │                                                                │
/// │        │ Money::to_display                                              │
/// │        ▼                                                                │
/// │  GET /products → {"price": "99.99"}                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopdesk_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a display price (e.g. `100.99`) into cents.
    ///
    /// Multiplies by 100 and rounds half away from zero. Truncating would
    /// turn `100.995` into 10099 and systematically underbill, so the
    /// fractional cent is always rounded.
    ///
    /// ## Example
    /// ```rust
    /// use shopdesk_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::from_display(Decimal::new(10099, 2)).unwrap().cents(), 10099);
    /// assert_eq!(Money::from_display(Decimal::new(100995, 3)).unwrap().cents(), 10100);
    /// assert_eq!(Money::from_display(Decimal::new(5, 0)).unwrap().cents(), 500);
    /// ```
    ///
    /// ## Errors
    /// `ValidationError::OutOfRange` when the value does not fit in i64 cents.
    pub fn from_display(display: Decimal) -> Result<Self, ValidationError> {
        let out_of_range = || ValidationError::OutOfRange {
            field: "price".to_string(),
            min: i64::MIN / 100,
            max: i64::MAX / 100,
        };

        let cents = display
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(out_of_range)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        cents.to_i64().map(Money).ok_or_else(out_of_range)
    }

    /// Converts cents into the display price with exactly two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use shopdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(10099).to_display().to_string(), "100.99");
    /// assert_eq!(Money::from_cents(500).to_display().to_string(), "5.00");
    /// ```
    #[inline]
    pub fn to_display(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use shopdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Adds two amounts, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use shopdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1000).checked_add(Money::from_cents(1)).unwrap().cents(), 1001);
    /// assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_none());
    /// ```
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Divides by a count, rounding half away from zero. `None` when `count`
    /// is not positive.
    ///
    /// ## Example
    /// ```rust
    /// use shopdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3501).checked_div_round(3).unwrap().cents(), 1167);
    /// assert_eq!(Money::from_cents(5).checked_div_round(2).unwrap().cents(), 3);
    /// assert!(Money::from_cents(5).checked_div_round(0).is_none());
    /// ```
    #[inline]
    pub const fn checked_div_round(&self, count: i64) -> Option<Self> {
        if count <= 0 {
            return None;
        }

        let quotient = self.0 / count;
        let remainder = self.0 % count;
        // 2|r| >= count, written without doubling
        let rounded = if remainder.abs() >= count - remainder.abs() {
            quotient + self.0.signum()
        } else {
            quotient
        };
        Some(Money(rounded))
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use shopdesk_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(9999);
    /// assert_eq!(unit_price.checked_multiply_quantity(3).unwrap().cents(), 29997);
    /// assert!(Money::from_cents(i64::MAX).checked_multiply_quantity(2).is_none());
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: $99.99, Order quantity: 3
    ///      │
    ///      ▼
    /// checked_multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Order price: $299.97
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Formats the amount compactly for dashboard cards.
    ///
    /// Below 1,000 the plain display value is shown; above it the value is
    /// scaled to `k`, `m` or `b` with at most one decimal.
    ///
    /// ## Example
    /// ```rust
    /// use shopdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(10099).format_compact(), "$100.99");
    /// assert_eq!(Money::from_cents(100_000).format_compact(), "$1k");
    /// assert_eq!(Money::from_cents(150_000_000).format_compact(), "$1.5m");
    /// ```
    pub fn format_compact(&self) -> String {
        let display = self.to_display();
        let sign = if display.is_sign_negative() { "-" } else { "" };
        let value = display.abs();

        let thousand = Decimal::from(1_000);
        let million = Decimal::from(1_000_000);
        let billion = Decimal::from(1_000_000_000);

        let (scaled, suffix) = if value < thousand {
            return format!("{}${}", sign, value.normalize());
        } else if value < million {
            (value / thousand, "k")
        } else if value < billion {
            (value / million, "m")
        } else {
            (value / billion, "b")
        };

        let scaled = if scaled.fract().is_zero() {
            scaled.normalize()
        } else {
            scaled.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        };

        format!("{}${}{}", sign, scaled, suffix)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and plain-text output. The SPA receives the decimal
/// display value and formats it itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_from_display_rounds_instead_of_truncating() {
        // 100.99 as f64 * 100 is 10098.999..., a truncating codec loses a cent
        assert_eq!(Money::from_display(dec("100.99")).unwrap().cents(), 10099);
        assert_eq!(Money::from_display(dec("0.005")).unwrap().cents(), 1);
        assert_eq!(Money::from_display(dec("0.004")).unwrap().cents(), 0);
        assert_eq!(Money::from_display(dec("-0.005")).unwrap().cents(), -1);
        assert_eq!(Money::from_display(dec("12")).unwrap().cents(), 1200);
    }

    #[test]
    fn test_from_display_rejects_overflow() {
        let huge = Decimal::MAX;
        assert!(Money::from_display(huge).is_err());
    }

    #[test]
    fn test_display_round_trip_for_two_decimal_values() {
        for cents in [0_i64, 1, 9, 10, 99, 100, 101, 9999, 10099, 123_456_789] {
            let display = Money::from_cents(cents).to_display();
            let back = Money::from_display(display).unwrap();
            assert_eq!(back.cents(), cents);
            assert_eq!(back.to_display(), display);
        }

        for s in ["0.01", "0.1", "1", "19.5", "99.99", "100.99", "12345.67"] {
            let x = dec(s);
            assert_eq!(Money::from_display(x).unwrap().to_display(), x, "{}", s);
        }
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_add(Money::from_cents(-1)), None);
    }

    #[test]
    fn test_checked_div_round() {
        assert_eq!(Money::from_cents(3000).checked_div_round(2), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(3501).checked_div_round(3), Some(Money::from_cents(1167)));
        assert_eq!(Money::from_cents(1001).checked_div_round(2), Some(Money::from_cents(501)));
        assert_eq!(Money::from_cents(-1001).checked_div_round(2), Some(Money::from_cents(-501)));
        assert_eq!(Money::from_cents(1).checked_div_round(3), Some(Money::zero()));
        // Near the limit the rounding must not overflow
        assert_eq!(
            Money::from_cents(i64::MAX).checked_div_round(2),
            Some(Money::from_cents(i64::MAX / 2 + 1))
        );
        assert_eq!(Money::from_cents(10).checked_div_round(0), None);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_checked_multiply_quantity() {
        assert_eq!(
            Money::from_cents(9999).checked_multiply_quantity(3),
            Some(Money::from_cents(29997))
        );
        assert_eq!(Money::from_cents(i64::MAX / 2 + 1).checked_multiply_quantity(2), None);
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(Money::from_cents(0).format_compact(), "$0");
        assert_eq!(Money::from_cents(99_999).format_compact(), "$999.99");
        assert_eq!(Money::from_cents(100_000).format_compact(), "$1k");
        assert_eq!(Money::from_cents(150_000).format_compact(), "$1.5k");
        assert_eq!(Money::from_cents(10_000_000).format_compact(), "$100k");
        assert_eq!(Money::from_cents(200_000_000).format_compact(), "$2m");
        assert_eq!(Money::from_cents(300_000_000_000).format_compact(), "$3b");
        assert_eq!(Money::from_cents(-150_000).format_compact(), "-$1.5k");
    }
}
