//! Configuration types for the tax year table.
//!
//! This module contains the strongly-typed tax year structures that are
//! deserialized from YAML configuration files, plus the compiled-in
//! default table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// A marginal tax rate tier.
///
/// Income above `threshold` (and below the next bracket's threshold) is
/// taxed at `rate`, on top of the precomputed `base_tax` owed for all
/// income below `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The income floor of this bracket.
    pub threshold: Decimal,
    /// The marginal rate applied above the threshold.
    pub rate: Decimal,
    /// Tax owed on income below the threshold.
    pub base_tax: Decimal,
}

/// A tax year definition: its date window, bracket table and levy rates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxYear {
    /// The year label (e.g. "2024-25").
    pub label: String,
    /// The first day of the tax year.
    pub start_date: NaiveDate,
    /// The last day of the tax year.
    pub end_date: NaiveDate,
    /// Bracket tiers, ordered ascending by threshold.
    pub brackets: Vec<TaxBracket>,
    /// The flat Medicare levy rate.
    pub medicare_levy_rate: Decimal,
    /// The Medicare levy surcharge rate for earners without private cover.
    pub mls_rate: Decimal,
    /// Whether these rates are estimated rather than legislated.
    #[serde(default)]
    pub is_estimated: bool,
}

/// Constructs a date known valid at compile time.
const fn builtin_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid builtin tax year date"),
    }
}

/// The ordered set of tax year definitions.
///
/// Validated and sorted chronologically at construction, then never
/// mutated. Queries borrow from the table, so one instance can serve
/// arbitrary concurrent lookups.
///
/// # Example
///
/// ```
/// use budget_engine::config::TaxTable;
/// use chrono::NaiveDate;
///
/// let table = TaxTable::builtin();
/// let today = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
///
/// let year = table.resolve(None, today);
/// assert_eq!(year.label, "2024-25");
/// ```
#[derive(Debug, Clone)]
pub struct TaxTable {
    years: Vec<TaxYear>,
}

impl TaxTable {
    /// Creates a table from tax year definitions.
    ///
    /// Years are sorted ascending by start date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTaxYear`] when the table is empty or
    /// any year violates the bracket invariants: a non-empty bracket list,
    /// a zero first threshold and strictly increasing thresholds.
    pub fn new(years: Vec<TaxYear>) -> EngineResult<Self> {
        if years.is_empty() {
            return Err(EngineError::InvalidTaxYear {
                label: "(table)".to_string(),
                message: "no tax years defined".to_string(),
            });
        }
        for year in &years {
            Self::validate(year)?;
        }
        let mut sorted_years = years;
        sorted_years.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(Self {
            years: sorted_years,
        })
    }

    fn validate(year: &TaxYear) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::InvalidTaxYear {
            label: year.label.clone(),
            message: message.to_string(),
        };

        if year.end_date < year.start_date {
            return Err(invalid("end date precedes start date"));
        }
        let Some(first) = year.brackets.first() else {
            return Err(invalid("bracket table is empty"));
        };
        if first.threshold != Decimal::ZERO {
            return Err(invalid("first bracket threshold must be zero"));
        }
        for pair in year.brackets.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(invalid("bracket thresholds must strictly increase"));
            }
        }
        Ok(())
    }

    /// The compiled-in default table.
    ///
    /// Covers the 2023-24 through 2025-26 Australian tax years, with
    /// 2025-26 flagged as estimated pending legislation.
    pub fn builtin() -> Self {
        const FY23_START: NaiveDate = builtin_date(2023, 7, 1);
        const FY23_END: NaiveDate = builtin_date(2024, 6, 30);
        const FY24_START: NaiveDate = builtin_date(2024, 7, 1);
        const FY24_END: NaiveDate = builtin_date(2025, 6, 30);
        const FY25_START: NaiveDate = builtin_date(2025, 7, 1);
        const FY25_END: NaiveDate = builtin_date(2026, 6, 30);

        let bracket = |threshold: i64, rate: Decimal, base_tax: i64| TaxBracket {
            threshold: Decimal::from(threshold),
            rate,
            base_tax: Decimal::from(base_tax),
        };

        let years = vec![
            TaxYear {
                label: "2023-24".to_string(),
                start_date: FY23_START,
                end_date: FY23_END,
                brackets: vec![
                    bracket(0, Decimal::ZERO, 0),
                    bracket(18_200, Decimal::new(19, 2), 0),
                    bracket(45_000, Decimal::new(325, 3), 5_092),
                    bracket(120_000, Decimal::new(37, 2), 29_467),
                    bracket(180_000, Decimal::new(45, 2), 51_667),
                ],
                medicare_levy_rate: Decimal::new(2, 2),
                mls_rate: Decimal::new(1, 2),
                is_estimated: false,
            },
            TaxYear {
                label: "2024-25".to_string(),
                start_date: FY24_START,
                end_date: FY24_END,
                brackets: vec![
                    bracket(0, Decimal::ZERO, 0),
                    bracket(18_200, Decimal::new(16, 2), 0),
                    bracket(45_000, Decimal::new(30, 2), 4_288),
                    bracket(135_000, Decimal::new(37, 2), 31_288),
                    bracket(190_000, Decimal::new(45, 2), 51_638),
                ],
                medicare_levy_rate: Decimal::new(2, 2),
                mls_rate: Decimal::new(1, 2),
                is_estimated: false,
            },
            TaxYear {
                label: "2025-26".to_string(),
                start_date: FY25_START,
                end_date: FY25_END,
                brackets: vec![
                    bracket(0, Decimal::ZERO, 0),
                    bracket(18_200, Decimal::new(16, 2), 0),
                    bracket(45_000, Decimal::new(30, 2), 4_288),
                    bracket(135_000, Decimal::new(37, 2), 31_288),
                    bracket(190_000, Decimal::new(45, 2), 51_638),
                ],
                medicare_levy_rate: Decimal::new(2, 2),
                mls_rate: Decimal::new(1, 2),
                is_estimated: true,
            },
        ];

        Self { years }
    }

    /// Returns every tax year, ordered ascending by start date.
    pub fn list(&self) -> &[TaxYear] {
        &self.years
    }

    /// Resolves the tax year to compute against.
    ///
    /// A matching `label` wins; otherwise the year whose window contains
    /// `today`; otherwise the year with the latest start date. Always
    /// returns an entry, degrading in precision rather than failing.
    pub fn resolve(&self, label: Option<&str>, today: NaiveDate) -> &TaxYear {
        if let Some(label) = label {
            if let Some(year) = self.years.iter().find(|y| y.label == label) {
                return year;
            }
        }
        self.years
            .iter()
            .find(|y| y.start_date <= today && today <= y.end_date)
            .or_else(|| self.years.last())
            .expect("table validated non-empty at construction")
    }
}
