//! Financial-year projections for recurring income and expenses.
//!
//! Combines the occurrence walkers and the annualizer the way the
//! surrounding layer presents budget lines: pay dates either side of
//! today plus per-period figures normalized over the financial year
//! containing today.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::IncomeStream;

use super::annualize::{annualized_breakdown, AmountBreakdown};
use super::financial_year::{financial_year_range, FinancialYearStart};
use super::occurrences::last_next_occurrence;

/// An income stream's schedule position and financial-year figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStreamProjection {
    /// The most recent pay date strictly before today, if any.
    pub last_pay_date: Option<NaiveDate>,
    /// The next pay date on or after today, if the stream has not ended.
    pub next_pay_date: Option<NaiveDate>,
    /// Net amount normalized over the current financial year.
    pub net: AmountBreakdown,
    /// Gross amount normalized over the current financial year.
    pub gross: AmountBreakdown,
}

/// Projects an income stream over the financial year containing `today`.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedFrequency`] when the stream's
/// frequency is not a recognized recurrence keyword.
///
/// [`EngineError::UnsupportedFrequency`]: crate::error::EngineError::UnsupportedFrequency
///
/// # Example
///
/// ```
/// use budget_engine::calculation::{project_income_stream, FinancialYearStart};
/// use budget_engine::models::IncomeStream;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let stream = IncomeStream {
///     net_amount: Decimal::from(2500),
///     gross_amount: Decimal::from(3300),
///     first_pay_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
///     frequency: "fortnightly".to_string(),
///     end_date: None,
/// };
/// let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
///
/// let projection =
///     project_income_stream(&stream, today, FinancialYearStart::default()).unwrap();
/// assert_eq!(
///     projection.next_pay_date,
///     NaiveDate::from_ymd_opt(2025, 2, 14)
/// );
/// ```
pub fn project_income_stream(
    stream: &IncomeStream,
    today: NaiveDate,
    fy_start: FinancialYearStart,
) -> EngineResult<IncomeStreamProjection> {
    let (range_start, range_end) = financial_year_range(today, fy_start);
    let (last_pay_date, next_pay_date) = last_next_occurrence(
        stream.first_pay_date,
        &stream.frequency,
        today,
        stream.end_date,
    )?;

    Ok(IncomeStreamProjection {
        last_pay_date,
        next_pay_date,
        net: annualized_breakdown(stream.net_amount, &stream.frequency, range_start, range_end),
        gross: annualized_breakdown(
            stream.gross_amount,
            &stream.frequency,
            range_start,
            range_end,
        ),
    })
}

/// Projects a recurring expense over the financial year containing `today`.
///
/// Unknown frequency strings contribute a zero multiplier, so the result
/// is all zeros rather than an error, matching [`annualized_breakdown`].
pub fn project_expense(
    amount: Decimal,
    frequency: &str,
    today: NaiveDate,
    fy_start: FinancialYearStart,
) -> AmountBreakdown {
    let (range_start, range_end) = financial_year_range(today, fy_start);
    annualized_breakdown(amount, frequency, range_start, range_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn fortnightly_stream() -> IncomeStream {
        IncomeStream {
            net_amount: dec("2500"),
            gross_amount: dec("3300"),
            first_pay_date: date(2025, 1, 3),
            frequency: "fortnightly".to_string(),
            end_date: None,
        }
    }

    /// PR-001: projection carries pay dates and both breakdowns
    #[test]
    fn test_projection_carries_dates_and_breakdowns() {
        let projection = project_income_stream(
            &fortnightly_stream(),
            date(2025, 2, 1),
            FinancialYearStart::default(),
        )
        .unwrap();

        assert_eq!(projection.last_pay_date, Some(date(2025, 1, 31)));
        assert_eq!(projection.next_pay_date, Some(date(2025, 2, 14)));
        assert_eq!(projection.net.per_year, dec("65000"));
        assert_eq!(projection.gross.per_year, dec("85800"));
    }

    /// PR-002: projection matches the direct breakdown over the same window
    #[test]
    fn test_projection_matches_direct_breakdown() {
        let today = date(2025, 2, 1);
        let fy = FinancialYearStart::default();
        let projection = project_income_stream(&fortnightly_stream(), today, fy).unwrap();

        let (start, end) = financial_year_range(today, fy);
        let direct = annualized_breakdown(dec("2500"), "fortnightly", start, end);
        assert_eq!(projection.net, direct);
    }

    /// PR-003: ended stream projects no next pay date
    #[test]
    fn test_ended_stream_has_no_next_pay_date() {
        let mut stream = fortnightly_stream();
        stream.end_date = Some(date(2025, 1, 20));
        let projection =
            project_income_stream(&stream, date(2025, 2, 1), FinancialYearStart::default())
                .unwrap();

        assert_eq!(projection.last_pay_date, Some(date(2025, 1, 17)));
        assert_eq!(projection.next_pay_date, None);
    }

    /// PR-004: unsupported stream frequency propagates an error
    #[test]
    fn test_unsupported_frequency_propagates() {
        let mut stream = fortnightly_stream();
        stream.frequency = "daily".to_string();
        let result =
            project_income_stream(&stream, date(2025, 2, 1), FinancialYearStart::default());
        assert!(result.is_err());
    }

    /// PR-005: expense projection spreads over the financial year
    #[test]
    fn test_expense_projection() {
        let breakdown = project_expense(
            dec("1000"),
            "monthly",
            date(2025, 5, 1),
            FinancialYearStart::default(),
        );
        assert_eq!(breakdown.per_year, dec("12000"));
        assert_eq!(breakdown.per_month, dec("1000"));
        assert_eq!(breakdown.per_day, dec("12000") / dec("365"));
    }

    /// PR-006: expense with an unknown frequency projects zeros
    #[test]
    fn test_expense_unknown_frequency_projects_zeros() {
        let breakdown = project_expense(
            dec("1000"),
            "hourly",
            date(2025, 5, 1),
            FinancialYearStart::default(),
        );
        assert_eq!(breakdown, AmountBreakdown::default());
    }
}
