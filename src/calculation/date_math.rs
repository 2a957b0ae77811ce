//! Month and year date arithmetic.
//!
//! Whole-month shifts clamp the day-of-month to the last valid day of the
//! target month, so the 31st of January moves to the 28th (or 29th) of
//! February rather than failing.

use chrono::{Months, NaiveDate};

/// Shifts a date by a number of whole months, clamping the day-of-month.
///
/// Negative month counts shift backwards. The day is clamped to the last
/// valid day of the target month.
///
/// # Arguments
///
/// * `date` - The date to shift
/// * `months` - The number of months to add (may be negative)
///
/// # Example
///
/// ```
/// use budget_engine::calculation::add_months;
/// use chrono::NaiveDate;
///
/// let jan_31 = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let feb_28 = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
/// assert_eq!(add_months(jan_31, 1), feb_28);
/// ```
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let delta = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    };
    // Only fails at the edge of chrono's representable range.
    shifted.unwrap_or(date)
}

/// Shifts a date by a number of whole years.
///
/// Equivalent to [`add_months`] with `years * 12`, so Feb 29 clamps to
/// Feb 28 in non-leap target years.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    add_months(date, years * 12)
}

/// Returns the number of days in the given month.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (NaiveDate::from_ymd_opt(year, month, 1), first_of_next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        // Month outside 1..=12; callers validate before reaching here.
        _ => 31,
    }
}
