//! Tax estimate request and response models.
//!
//! These mirror the payloads exchanged with the surrounding request layer:
//! a salary description going in, annual totals plus per-period breakdowns
//! coming out.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period_amounts::PeriodAmounts;

/// Input to the tax estimator.
///
/// Amounts are per the stated frequency; `hours_per_week` and
/// `days_per_week` only matter for hourly and daily salaries and default to
/// 38 and 5 when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxEstimateRequest {
    /// The salary amount, expressed per `salary_frequency` period.
    pub salary_amount: Decimal,
    /// The salary cadence (hourly, daily, weekly, fortnightly, monthly,
    /// quarterly or yearly). Unrecognized values are treated as yearly.
    pub salary_frequency: String,
    /// Whether `salary_amount` already includes superannuation.
    pub includes_super: bool,
    /// The superannuation rate as a percentage (e.g. 11 for 11%).
    #[serde(default)]
    pub super_rate: Decimal,
    /// Whether the earner holds private health cover, which waives the
    /// Medicare levy surcharge.
    #[serde(default)]
    pub private_health: bool,
    /// Any novated lease deduction, expressed per
    /// `novated_lease_frequency` period.
    #[serde(default)]
    pub novated_lease_amount: Decimal,
    /// The novated lease cadence. Defaults to yearly.
    #[serde(default = "default_novated_lease_frequency")]
    pub novated_lease_frequency: String,
    /// Hours worked per week, used to annualize hourly salaries.
    #[serde(default)]
    pub hours_per_week: Option<Decimal>,
    /// Days worked per week, used to annualize daily salaries.
    #[serde(default)]
    pub days_per_week: Option<Decimal>,
    /// An optional tax year label (e.g. "2024-25"). When absent or unknown
    /// the tax year containing today's date is used.
    #[serde(default)]
    pub tax_year: Option<String>,
}

fn default_novated_lease_frequency() -> String {
    "Yearly".to_string()
}

/// Output of the tax estimator.
///
/// Annual figures are rounded to 2 decimal places; each period breakdown is
/// derived from the unrounded annual figure and rounded independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxEstimateResponse {
    /// The label of the tax year the estimate was computed against.
    pub tax_year: String,
    /// Whether that tax year's rates are estimated rather than legislated.
    pub is_estimated: bool,
    /// The annualized salary as supplied, before any super adjustment.
    pub salary_annual: Decimal,
    /// The super-exclusive annual base salary.
    pub gross_annual: Decimal,
    /// Taxable income after novated lease deductions, never negative.
    pub taxable_annual: Decimal,
    /// The annual superannuation contribution.
    pub super_annual: Decimal,
    /// The annualized novated lease deduction.
    pub novated_lease_annual: Decimal,
    /// Income tax on taxable income for the resolved year.
    pub income_tax_annual: Decimal,
    /// The Medicare levy.
    pub medicare_annual: Decimal,
    /// The Medicare levy surcharge, zero with private health cover.
    pub mls_annual: Decimal,
    /// Take-home pay after deductions, tax and levies.
    pub net_annual: Decimal,
    /// Gross salary per period.
    pub gross: PeriodAmounts,
    /// Net pay per period.
    pub net: PeriodAmounts,
    /// Income tax per period.
    pub income_tax: PeriodAmounts,
    /// Medicare levy per period.
    pub medicare: PeriodAmounts,
    /// Medicare levy surcharge per period.
    pub mls: PeriodAmounts,
    /// Superannuation per period.
    pub super_amounts: PeriodAmounts,
}

/// A recurring income stream as described by the surrounding layer.
///
/// Carries the fields the schedule engine needs to project pay dates and
/// financial-year breakdowns; ownership, labels and persistence identity
/// stay with the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStream {
    /// Take-home amount per `frequency` period.
    pub net_amount: Decimal,
    /// Gross amount per `frequency` period.
    pub gross_amount: Decimal,
    /// The date of the first pay event.
    pub first_pay_date: NaiveDate,
    /// The recurrence keyword for the pay cycle.
    pub frequency: String,
    /// The date the stream ends, if it ends at all.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
