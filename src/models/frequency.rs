//! Recurrence and pay frequency types.
//!
//! Frequencies arrive from the surrounding request layer as free-form
//! strings. The schedule walkers only accept the five recurrence keywords
//! and reject everything else; the tax estimator additionally understands
//! hourly and daily pay cycles and quietly treats anything unrecognized as
//! yearly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// A recurrence cadence for scheduled income and expense events.
///
/// Parsing is case-insensitive. Unrecognized strings are rejected with
/// [`EngineError::UnsupportedFrequency`].
///
/// # Example
///
/// ```
/// use budget_engine::models::RecurrenceFrequency;
///
/// let frequency = RecurrenceFrequency::parse("Fortnightly").unwrap();
/// assert_eq!(frequency, RecurrenceFrequency::Fortnightly);
/// assert!(RecurrenceFrequency::parse("biweekly").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Fortnightly,
    /// Every calendar month, day-of-month clamped.
    Monthly,
    /// Every 3 calendar months.
    Quarterly,
    /// Every 12 calendar months.
    Yearly,
}

impl RecurrenceFrequency {
    /// Parses a frequency keyword, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedFrequency`] for any string outside
    /// the five recognized keywords.
    pub fn parse(value: &str) -> EngineResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "fortnightly" => Ok(Self::Fortnightly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(EngineError::UnsupportedFrequency {
                frequency: value.to_string(),
            }),
        }
    }

    /// Returns how many occurrences of this frequency fall in a year.
    ///
    /// These are the fixed annualization multipliers: 52, 26, 12, 4 and 1.
    pub fn occurrences_per_year(self) -> Decimal {
        match self {
            Self::Weekly => Decimal::from(52),
            Self::Fortnightly => Decimal::from(26),
            Self::Monthly => Decimal::from(12),
            Self::Quarterly => Decimal::from(4),
            Self::Yearly => Decimal::ONE,
        }
    }
}

impl FromStr for RecurrenceFrequency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RecurrenceFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Fortnightly => write!(f, "fortnightly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Quarterly => write!(f, "quarterly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// A salary payment cadence accepted by the tax estimator.
///
/// Unlike [`RecurrenceFrequency`], parsing never fails: strings outside the
/// recognized set fall through to [`PayFrequency::Yearly`], which leaves the
/// amount unchanged when annualizing. Callers that want strict validation
/// should check the string with [`RecurrenceFrequency::parse`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    /// Paid per hour worked; annualized via hours per week.
    Hourly,
    /// Paid per day worked; annualized via days per week.
    Daily,
    /// Paid every week.
    Weekly,
    /// Paid every fortnight.
    Fortnightly,
    /// Paid every month.
    Monthly,
    /// Paid every quarter.
    Quarterly,
    /// Paid once a year. Also the fallback for unrecognized strings.
    Yearly,
}

impl PayFrequency {
    /// Parses a pay frequency, ignoring case and surrounding whitespace.
    ///
    /// Unrecognized or empty strings map to [`PayFrequency::Yearly`].
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "fortnightly" => Self::Fortnightly,
            "monthly" => Self::Monthly,
            "quarterly" => Self::Quarterly,
            _ => Self::Yearly,
        }
    }

    /// Converts a per-period amount into a yearly figure.
    ///
    /// Hourly and daily cadences scale by the supplied hours or days per
    /// week across 52 weeks; the remaining cadences use their fixed
    /// occurrence counts.
    pub fn annualize(
        self,
        amount: Decimal,
        hours_per_week: Decimal,
        days_per_week: Decimal,
    ) -> Decimal {
        match self {
            Self::Hourly => amount * hours_per_week * Decimal::from(52),
            Self::Daily => amount * days_per_week * Decimal::from(52),
            Self::Weekly => amount * Decimal::from(52),
            Self::Fortnightly => amount * Decimal::from(26),
            Self::Monthly => amount * Decimal::from(12),
            Self::Quarterly => amount * Decimal::from(4),
            Self::Yearly => amount,
        }
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hourly => write!(f, "hourly"),
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Fortnightly => write!(f, "fortnightly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Quarterly => write!(f, "quarterly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}
