//! Monetary rounding helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to two decimal places, half-up.
///
/// Midpoints round away from zero, the standard financial convention.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("123.455").unwrap();
/// assert_eq!(round_half_up(value), Decimal::from_str("123.46").unwrap());
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
