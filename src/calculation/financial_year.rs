//! Financial year window computation.
//!
//! A financial year is a fixed 12-month accounting window anchored to a
//! configurable start month and day. The Australian default is 1 July.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

use super::date_math::{add_years, days_in_month};

/// The month and day a financial year begins on.
///
/// Constructed through [`FinancialYearStart::new`], which validates the
/// month; the day is clamped per target month when the window is computed,
/// so day 29-31 anchors work in every year.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::FinancialYearStart;
///
/// let australian = FinancialYearStart::default();
/// assert_eq!(australian.month(), 7);
/// assert_eq!(australian.day(), 1);
///
/// assert!(FinancialYearStart::new(13, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialYearStart {
    month: u32,
    day: u32,
}

impl FinancialYearStart {
    /// Creates a financial year anchor.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFinancialYearStart`] when `month` is
    /// outside 1..=12 or `day` is outside 1..=31.
    pub fn new(month: u32, day: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(EngineError::InvalidFinancialYearStart { month, day });
        }
        Ok(Self { month, day })
    }

    /// The start month, 1-12.
    pub fn month(self) -> u32 {
        self.month
    }

    /// The start day-of-month, 1-31.
    pub fn day(self) -> u32 {
        self.day
    }

    /// The anchor date within a given calendar year, day clamped to the
    /// month's length.
    fn in_year(self, year: i32) -> NaiveDate {
        let day = self.day.min(days_in_month(year, self.month));
        // The month is validated and the day clamped, so this always exists.
        NaiveDate::from_ymd_opt(year, self.month, day).unwrap_or(NaiveDate::MIN)
    }
}

impl Default for FinancialYearStart {
    /// The Australian financial year, starting 1 July.
    fn default() -> Self {
        Self { month: 7, day: 1 }
    }
}

/// Computes the financial year window containing `today`.
///
/// The start is the most recent occurrence of the anchor on or before
/// `today`; the end is one year later minus a day. Both bounds are
/// inclusive.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::{financial_year_range, FinancialYearStart};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let (start, end) = financial_year_range(today, FinancialYearStart::default());
/// assert_eq!(start, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
/// ```
pub fn financial_year_range(
    today: NaiveDate,
    start: FinancialYearStart,
) -> (NaiveDate, NaiveDate) {
    let mut range_start = start.in_year(today.year());
    if today < range_start {
        range_start = start.in_year(today.year() - 1);
    }
    let range_end = add_years(range_start, 1)
        .pred_opt()
        .unwrap_or(range_start);
    (range_start, range_end)
}
