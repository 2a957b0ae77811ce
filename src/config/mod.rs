//! Configuration loading and management for the tax year table.
//!
//! This module provides the static tax year definitions the estimator
//! computes against, a compiled-in default set, and a loader for YAML
//! overrides.
//!
//! # Example
//!
//! ```no_run
//! use budget_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/tax_years").unwrap();
//! println!("Loaded {} tax years", loader.table().list().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{TaxBracket, TaxTable, TaxYear};
