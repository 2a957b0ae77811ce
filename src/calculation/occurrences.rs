//! Occurrence enumeration for recurring schedules.
//!
//! Walks a recurrence forward from its first date to enumerate event dates
//! within a window, or to find the events either side of a reference date.
//! Both walkers share a step bound that stops runaway walks on degenerate
//! inputs instead of looping forever.

use chrono::{Days, NaiveDate};

use crate::error::EngineResult;
use crate::models::RecurrenceFrequency;

use super::date_math::{add_months, add_years};

/// Upper bound on advance steps per walk.
///
/// Reaching the bound truncates the walk and returns what was accumulated;
/// it is a guard against malformed inputs, not an error condition.
pub const MAX_ADVANCE_STEPS: u32 = 10_000;

/// Steps a date forward by one occurrence of the frequency.
fn advance(current: NaiveDate, frequency: RecurrenceFrequency) -> NaiveDate {
    match frequency {
        RecurrenceFrequency::Weekly => current.checked_add_days(Days::new(7)).unwrap_or(current),
        RecurrenceFrequency::Fortnightly => {
            current.checked_add_days(Days::new(14)).unwrap_or(current)
        }
        RecurrenceFrequency::Monthly => add_months(current, 1),
        RecurrenceFrequency::Quarterly => add_months(current, 3),
        RecurrenceFrequency::Yearly => add_years(current, 1),
    }
}

/// Enumerates the occurrences of a recurrence that fall within a window.
///
/// Advances from `first_date` until reaching `range_start`, then collects
/// every occurrence up to `range_end` inclusive. Occurrences beyond
/// `end_date` (when present) are excluded. The result is ordered ascending.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedFrequency`] when `frequency` is not a
/// recognized recurrence keyword.
///
/// [`EngineError::UnsupportedFrequency`]: crate::error::EngineError::UnsupportedFrequency
///
/// # Example
///
/// ```
/// use budget_engine::calculation::generate_occurrences;
/// use chrono::NaiveDate;
///
/// let first = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
///
/// let occurrences = generate_occurrences(first, "monthly", from, to, None).unwrap();
/// assert_eq!(occurrences.len(), 3);
/// ```
pub fn generate_occurrences(
    first_date: NaiveDate,
    frequency: &str,
    range_start: NaiveDate,
    range_end: NaiveDate,
    end_date: Option<NaiveDate>,
) -> EngineResult<Vec<NaiveDate>> {
    let frequency = RecurrenceFrequency::parse(frequency)?;
    let mut occurrences = Vec::new();
    let mut current = first_date;
    let mut steps = 0u32;

    while current < range_start {
        current = advance(current, frequency);
        steps += 1;
        if steps > MAX_ADVANCE_STEPS {
            break;
        }
    }

    while current <= range_end {
        if end_date.is_some_and(|end| current > end) {
            break;
        }
        if current >= range_start {
            occurrences.push(current);
        }
        current = advance(current, frequency);
        steps += 1;
        if steps > MAX_ADVANCE_STEPS {
            break;
        }
    }

    Ok(occurrences)
}

/// Finds the occurrences either side of `today`.
///
/// `last` is the latest occurrence strictly before `today`; `next` is the
/// first occurrence on or after `today` that does not exceed `end_date`.
/// When `end_date` precedes `first_date` the recurrence never starts and
/// both are `None`; when it ends before `today` is reached, `next` is
/// `None`.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedFrequency`] when `frequency` is not a
/// recognized recurrence keyword.
///
/// [`EngineError::UnsupportedFrequency`]: crate::error::EngineError::UnsupportedFrequency
///
/// # Example
///
/// ```
/// use budget_engine::calculation::last_next_occurrence;
/// use chrono::NaiveDate;
///
/// let first = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
///
/// let (last, next) = last_next_occurrence(first, "monthly", today, None).unwrap();
/// assert_eq!(last, NaiveDate::from_ymd_opt(2025, 2, 1));
/// assert_eq!(next, NaiveDate::from_ymd_opt(2025, 3, 1));
/// ```
pub fn last_next_occurrence(
    first_date: NaiveDate,
    frequency: &str,
    today: NaiveDate,
    end_date: Option<NaiveDate>,
) -> EngineResult<(Option<NaiveDate>, Option<NaiveDate>)> {
    let frequency = RecurrenceFrequency::parse(frequency)?;
    if end_date.is_some_and(|end| end < first_date) {
        return Ok((None, None));
    }

    let mut current = first_date;
    let mut last = None;
    let mut steps = 0u32;

    while current < today {
        if end_date.is_some_and(|end| current > end) {
            return Ok((last, None));
        }
        last = Some(current);
        current = advance(current, frequency);
        steps += 1;
        if steps > MAX_ADVANCE_STEPS {
            break;
        }
    }

    if end_date.is_some_and(|end| current > end) {
        return Ok((last, None));
    }
    Ok((last, Some(current)))
}
