//! Error types for the budget engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule and tax
//! calculations.

use thiserror::Error;

/// The main error type for the budget engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use budget_engine::error::EngineError;
///
/// let error = EngineError::UnsupportedFrequency {
///     frequency: "biweekly".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unsupported frequency: biweekly");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A frequency string was not one of the recognized recurrence keywords.
    #[error("Unsupported frequency: {frequency}")]
    UnsupportedFrequency {
        /// The frequency string that was not recognized.
        frequency: String,
    },

    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tax year definition violated the bracket table invariants.
    #[error("Invalid tax year '{label}': {message}")]
    InvalidTaxYear {
        /// The label of the offending tax year.
        label: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// A financial year anchor was outside the valid month/day range.
    #[error("Invalid financial year start: month {month} day {day}")]
    InvalidFinancialYearStart {
        /// The rejected month value.
        month: u32,
        /// The rejected day value.
        day: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
