//! Calculation logic for the budget engine.
//!
//! This module contains all the calculation functions for recurring
//! schedules and tax estimation, including month-clamped date arithmetic,
//! financial year windows, occurrence enumeration, last/next occurrence
//! lookup, periodic amount annualization, monetary rounding, income tax
//! estimation and financial-year projections of income streams and
//! expenses.

mod annualize;
mod date_math;
mod financial_year;
mod money;
mod occurrences;
mod projection;
mod tax_estimate;

pub use annualize::{annualized_breakdown, AmountBreakdown};
pub use date_math::{add_months, add_years};
pub use financial_year::{financial_year_range, FinancialYearStart};
pub use money::round_half_up;
pub use occurrences::{generate_occurrences, last_next_occurrence, MAX_ADVANCE_STEPS};
pub use projection::{project_expense, project_income_stream, IncomeStreamProjection};
pub use tax_estimate::estimate_tax;
