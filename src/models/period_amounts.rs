//! Periodic amount breakdown model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An annual figure re-expressed per pay period.
///
/// Each field is derived from the annual amount by dividing by the period
/// count (52, 26, 12 and 1) and rounding independently, so the fields are
/// not proportionally consistent with each other beyond rounding.
///
/// # Example
///
/// ```
/// use budget_engine::models::PeriodAmounts;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amounts = PeriodAmounts {
///     weekly: Decimal::from_str("399.77").unwrap(),
///     fortnightly: Decimal::from_str("799.54").unwrap(),
///     monthly: Decimal::from_str("1732.33").unwrap(),
///     yearly: Decimal::from_str("20788.00").unwrap(),
/// };
/// assert_eq!(amounts.yearly, Decimal::from_str("20788.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodAmounts {
    /// The amount per week.
    pub weekly: Decimal,
    /// The amount per fortnight.
    pub fortnightly: Decimal,
    /// The amount per month.
    pub monthly: Decimal,
    /// The amount per year.
    pub yearly: Decimal,
}
