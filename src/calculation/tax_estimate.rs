//! Income tax estimation.
//!
//! Annualizes a salary input, applies superannuation grossing and novated
//! lease deductions, then runs the resolved tax year's bracket table and
//! levies over the taxable income. Every output is reported both as an
//! annual total and as independent per-period figures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{TaxTable, TaxYear};
use crate::models::{PayFrequency, PeriodAmounts, TaxEstimateRequest, TaxEstimateResponse};

use super::money::round_half_up;

/// Fallback hours per week for hourly salaries.
const DEFAULT_HOURS_PER_WEEK: u32 = 38;
/// Fallback days per week for daily salaries.
const DEFAULT_DAYS_PER_WEEK: u32 = 5;

/// Re-expresses an annual figure per pay period, each rounded on its own.
fn period_amounts(annual: Decimal) -> PeriodAmounts {
    PeriodAmounts {
        weekly: round_half_up(annual / Decimal::from(52)),
        fortnightly: round_half_up(annual / Decimal::from(26)),
        monthly: round_half_up(annual / Decimal::from(12)),
        yearly: round_half_up(annual),
    }
}

/// Computes income tax on a taxable income for a tax year.
///
/// Walks the bracket table from the highest threshold down and applies the
/// first bracket the income exceeds. Income at or below every non-zero
/// threshold is taxed at the zero-threshold bracket's rate, which is zero
/// in every shipped table.
fn income_tax_for(taxable: Decimal, tax_year: &TaxYear) -> Decimal {
    let taxable = taxable.max(Decimal::ZERO);
    for bracket in tax_year.brackets.iter().rev() {
        if taxable > bracket.threshold {
            return bracket.base_tax + (taxable - bracket.threshold) * bracket.rate;
        }
    }
    Decimal::ZERO
}

/// Estimates tax liability and take-home pay for a salary description.
///
/// The tax year is resolved through the table using the request's optional
/// label, falling back to the year containing `today`. The salary and any
/// novated lease amount are annualized by their pay frequencies, with
/// hours/days per week defaulting to 38 and 5.
///
/// When the salary includes superannuation and a rate is given, the
/// super-exclusive base is backed out of the total; otherwise super is
/// computed on top of the salary and does not reduce it. Taxable income is
/// the base less the novated lease deduction, floored at zero.
///
/// All monetary outputs are rounded half-up to 2 decimal places.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::estimate_tax;
/// use budget_engine::config::TaxTable;
/// use budget_engine::models::TaxEstimateRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = TaxTable::builtin();
/// let request = TaxEstimateRequest {
///     salary_amount: Decimal::from(100_000),
///     salary_frequency: "yearly".to_string(),
///     includes_super: false,
///     super_rate: Decimal::from(11),
///     private_health: true,
///     novated_lease_amount: Decimal::ZERO,
///     novated_lease_frequency: "Yearly".to_string(),
///     hours_per_week: None,
///     days_per_week: None,
///     tax_year: Some("2024-25".to_string()),
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
///
/// let response = estimate_tax(&table, &request, today);
/// assert_eq!(response.income_tax_annual, Decimal::from_str("20788.00").unwrap());
/// ```
pub fn estimate_tax(
    table: &TaxTable,
    request: &TaxEstimateRequest,
    today: NaiveDate,
) -> TaxEstimateResponse {
    let tax_year = table.resolve(request.tax_year.as_deref(), today);
    debug!(tax_year = %tax_year.label, "estimating tax");

    let hours_per_week = request
        .hours_per_week
        .unwrap_or(Decimal::from(DEFAULT_HOURS_PER_WEEK));
    let days_per_week = request
        .days_per_week
        .unwrap_or(Decimal::from(DEFAULT_DAYS_PER_WEEK));

    let salary_annual = PayFrequency::parse_lenient(&request.salary_frequency).annualize(
        request.salary_amount,
        hours_per_week,
        days_per_week,
    );
    let novated_annual = PayFrequency::parse_lenient(&request.novated_lease_frequency).annualize(
        request.novated_lease_amount,
        hours_per_week,
        days_per_week,
    );

    let super_rate = request.super_rate / Decimal::from(100);
    let (taxable_base, super_annual) = if request.includes_super && super_rate > Decimal::ZERO {
        let base = salary_annual / (Decimal::ONE + super_rate);
        (base, salary_annual - base)
    } else {
        (salary_annual, salary_annual * super_rate)
    };

    let taxable_income = (taxable_base - novated_annual).max(Decimal::ZERO);
    let income_tax = income_tax_for(taxable_income, tax_year);
    let medicare = taxable_income * tax_year.medicare_levy_rate;
    let mls = if request.private_health {
        Decimal::ZERO
    } else {
        taxable_income * tax_year.mls_rate
    };
    let net_annual = taxable_base - novated_annual - income_tax - medicare - mls;

    TaxEstimateResponse {
        tax_year: tax_year.label.clone(),
        is_estimated: tax_year.is_estimated,
        salary_annual: round_half_up(salary_annual),
        gross_annual: round_half_up(taxable_base),
        taxable_annual: round_half_up(taxable_income),
        super_annual: round_half_up(super_annual),
        novated_lease_annual: round_half_up(novated_annual),
        income_tax_annual: round_half_up(income_tax),
        medicare_annual: round_half_up(medicare),
        mls_annual: round_half_up(mls),
        net_annual: round_half_up(net_annual),
        gross: period_amounts(taxable_base),
        net: period_amounts(net_annual),
        income_tax: period_amounts(income_tax),
        medicare: period_amounts(medicare),
        mls: period_amounts(mls),
        super_amounts: period_amounts(super_annual),
    }
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

    fn base_request() -> TaxEstimateRequest {
        TaxEstimateRequest {
            salary_amount: dec("100000"),
            salary_frequency: "yearly".to_string(),
            includes_super: false,
            super_rate: dec("11"),
            private_health: true,
            novated_lease_amount: Decimal::ZERO,
            novated_lease_frequency: "Yearly".to_string(),
            hours_per_week: None,
            days_per_week: None,
            tax_year: Some("2024-25".to_string()),
        }
    }

    /// TE-001: 100k yearly salary in 2024-25
    #[test]
    fn test_100k_yearly_salary_2024_25() {
        let table = TaxTable::builtin();
        let response = estimate_tax(&table, &base_request(), date(2024, 10, 1));

        assert_eq!(response.tax_year, "2024-25");
        assert!(!response.is_estimated);
        assert_eq!(response.salary_annual, dec("100000.00"));
        assert_eq!(response.gross_annual, dec("100000.00"));
        assert_eq!(response.taxable_annual, dec("100000.00"));
        assert_eq!(response.income_tax_annual, dec("20788.00"));
        assert_eq!(response.medicare_annual, dec("2000.00"));
        assert_eq!(response.mls_annual, dec("0.00"));
        assert_eq!(response.super_annual, dec("11000.00"));
        assert_eq!(response.net_annual, dec("77212.00"));
    }

    /// TE-002: period breakdowns round independently
    #[test]
    fn test_period_breakdowns_round_independently() {
        let table = TaxTable::builtin();
        let response = estimate_tax(&table, &base_request(), date(2024, 10, 1));

        assert_eq!(response.gross.weekly, dec("1923.08"));
        assert_eq!(response.gross.fortnightly, dec("3846.15"));
        assert_eq!(response.gross.monthly, dec("8333.33"));
        assert_eq!(response.gross.yearly, dec("100000.00"));
        assert_eq!(response.income_tax.weekly, dec("399.77"));
        assert_eq!(response.super_amounts.weekly, dec("211.54"));
    }

    /// TE-003: salary inclusive of super backs out the base
    #[test]
    fn test_salary_inclusive_of_super() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.includes_super = true;
        request.private_health = false;
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert_eq!(response.gross_annual, dec("90090.09"));
        assert_eq!(response.super_annual, dec("9909.91"));
        assert_eq!(response.income_tax_annual, dec("17815.03"));
        assert_eq!(response.medicare_annual, dec("1801.80"));
        assert_eq!(response.mls_annual, dec("900.90"));
        assert_eq!(response.net_annual, dec("69572.36"));
    }

    /// TE-004: includes_super with a zero rate behaves as exclusive
    #[test]
    fn test_includes_super_with_zero_rate() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.includes_super = true;
        request.super_rate = Decimal::ZERO;
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert_eq!(response.gross_annual, dec("100000.00"));
        assert_eq!(response.super_annual, dec("0.00"));
    }

    /// TE-005: novated lease reduces taxable income
    #[test]
    fn test_novated_lease_reduces_taxable_income() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.super_rate = Decimal::ZERO;
        request.private_health = false;
        request.novated_lease_amount = dec("10000");
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert_eq!(response.novated_lease_annual, dec("10000.00"));
        assert_eq!(response.taxable_annual, dec("90000.00"));
        assert_eq!(response.income_tax_annual, dec("17788.00"));
        assert_eq!(response.medicare_annual, dec("1800.00"));
        assert_eq!(response.mls_annual, dec("900.00"));
        assert_eq!(response.net_annual, dec("69512.00"));
    }

    /// TE-006: novated lease larger than salary floors taxable at zero
    #[test]
    fn test_novated_lease_floors_taxable_at_zero() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.super_rate = Decimal::ZERO;
        request.novated_lease_amount = dec("150000");
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert_eq!(response.taxable_annual, dec("0.00"));
        assert_eq!(response.income_tax_annual, dec("0.00"));
        assert_eq!(response.medicare_annual, dec("0.00"));
    }

    /// TE-007: hourly salary uses the 38-hour default week
    #[test]
    fn test_hourly_salary_uses_default_hours() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.salary_amount = dec("50");
        request.salary_frequency = "hourly".to_string();
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert_eq!(response.salary_annual, dec("98800.00"));
        assert_eq!(response.income_tax_annual, dec("20428.00"));
    }

    /// TE-008: explicit hours override the default
    #[test]
    fn test_explicit_hours_override_default() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.salary_amount = dec("50");
        request.salary_frequency = "hourly".to_string();
        request.hours_per_week = Some(dec("40"));
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert_eq!(response.salary_annual, dec("104000.00"));
    }

    /// TE-009: income below every non-zero threshold pays no tax
    #[test]
    fn test_low_income_pays_no_tax() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.salary_amount = dec("10000");
        request.super_rate = Decimal::ZERO;
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert_eq!(response.income_tax_annual, dec("0.00"));
        assert_eq!(response.medicare_annual, dec("200.00"));
    }

    /// TE-010: unknown tax year label falls back to today's year
    #[test]
    fn test_unknown_label_falls_back_to_today() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.tax_year = Some("1999-00".to_string());
        let response = estimate_tax(&table, &request, date(2023, 10, 1));

        assert_eq!(response.tax_year, "2023-24");
        // 2023-24 rates: 5092 + (100000 - 45000) * 0.325
        assert_eq!(response.income_tax_annual, dec("22967.00"));
    }

    /// TE-011: unrecognized salary frequency is treated as yearly
    #[test]
    fn test_unrecognized_frequency_treated_as_yearly() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.salary_frequency = "per-annum".to_string();
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert_eq!(response.salary_annual, dec("100000.00"));
    }

    /// TE-012: the estimated flag passes through
    #[test]
    fn test_estimated_flag_passes_through() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.tax_year = Some("2025-26".to_string());
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert!(response.is_estimated);
    }

    #[test]
    fn test_fortnightly_salary_annualizes_by_26() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.salary_amount = dec("3000");
        request.salary_frequency = "fortnightly".to_string();
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        assert_eq!(response.salary_annual, dec("78000.00"));
    }

    #[test]
    fn test_top_bracket() {
        let table = TaxTable::builtin();
        let mut request = base_request();
        request.salary_amount = dec("250000");
        request.super_rate = Decimal::ZERO;
        let response = estimate_tax(&table, &request, date(2024, 10, 1));

        // 51638 + (250000 - 190000) * 0.45
        assert_eq!(response.income_tax_annual, dec("78638.00"));
    }
}
