//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax year
//! tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{TaxTable, TaxYear};

/// Loads a tax year table from a directory of YAML files.
///
/// Each file in the directory defines one tax year; the loader reads every
/// `*.yaml` file, validates the result and sorts it chronologically.
///
/// # Directory Structure
///
/// ```text
/// config/tax_years/
/// ├── 2023-24.yaml
/// ├── 2024-25.yaml
/// └── 2025-26.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use budget_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tax_years").unwrap();
/// for year in loader.table().list() {
///     println!("{}: {} brackets", year.label, year.brackets.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: TaxTable,
}

impl ConfigLoader {
    /// Loads every tax year file from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tax year directory (e.g. "./config/tax_years")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The directory is missing or contains no YAML files
    /// - Any file contains invalid YAML
    /// - Any tax year violates the bracket table invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut years = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let year = Self::load_yaml::<TaxYear>(&path)?;
                years.push(year);
            }
        }

        if years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax year files found)", dir_str),
            });
        }

        let table = TaxTable::new(years)?;
        info!(
            count = table.list().len(),
            directory = %dir_str,
            "loaded tax year table"
        );

        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded table.
    pub fn table(&self) -> &TaxTable {
        &self.table
    }

    /// Consumes the loader, returning the table.
    pub fn into_table(self) -> TaxTable {
        self.table
    }
}
