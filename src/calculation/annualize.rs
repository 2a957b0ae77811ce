//! Periodic amount annualization over a date window.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RecurrenceFrequency;

/// A periodic amount normalized over a date window.
///
/// `per_year` is the amount scaled by its frequency's occurrence count;
/// `per_day` spreads that across the window's inclusive day count, and the
/// week and fortnight figures are multiples of the day rate. Values are
/// unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmountBreakdown {
    /// The amount per day of the window.
    pub per_day: Decimal,
    /// Seven times the day rate.
    pub per_week: Decimal,
    /// Fourteen times the day rate.
    pub per_fortnight: Decimal,
    /// One twelfth of the yearly figure.
    pub per_month: Decimal,
    /// The annualized amount.
    pub per_year: Decimal,
}

/// Normalizes a periodic amount over a date window.
///
/// The amount is scaled to a yearly figure by its frequency (52, 26, 12, 4
/// or 1 occurrences; an unrecognized frequency contributes nothing and the
/// whole breakdown is zero). The window is inclusive of both bounds; a
/// zero-length or inverted window also yields an all-zero breakdown.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::annualized_breakdown;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
///
/// let breakdown = annualized_breakdown(Decimal::from(1000), "monthly", start, end);
/// assert_eq!(breakdown.per_year, Decimal::from(12000));
/// assert_eq!(breakdown.per_month, Decimal::from(1000));
/// ```
pub fn annualized_breakdown(
    amount: Decimal,
    frequency: &str,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> AmountBreakdown {
    let multiplier = RecurrenceFrequency::parse(frequency)
        .map(|f| f.occurrences_per_year())
        .unwrap_or(Decimal::ZERO);
    let per_year = amount * multiplier;

    let days = (range_end - range_start).num_days() + 1;
    if days <= 0 {
        return AmountBreakdown::default();
    }

    let per_day = per_year / Decimal::from(days);
    AmountBreakdown {
        per_day,
        per_week: per_day * Decimal::from(7),
        per_fortnight: per_day * Decimal::from(14),
        per_month: per_year / Decimal::from(12),
        per_year,
    }
}
