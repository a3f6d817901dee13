//! Configuration types for report generation.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from the YAML configuration file.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Shift code that marks a scheduled day off unless configured otherwise.
pub const DEFAULT_ABSENCE_CODE: &str = "L";

/// Identifying columns expected in every attendance report unless configured otherwise.
pub const DEFAULT_METADATA_COLUMNS: [&str; 4] =
    ["Nombre del Colaborador", "RUT", "Área", "Supervisor"];

/// Options for a report run.
///
/// The value is threaded explicitly into every aggregation call, so
/// several configurations can be used side by side.
///
/// # Example
///
/// ```
/// use attendance_report::config::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.absence_code, "L");
/// assert_eq!(config.metadata_columns.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Ordered identifiers of the columns that form the employee key.
    #[serde(default = "default_metadata_columns")]
    pub metadata_columns: Vec<String>,
    /// Shift code meaning "not worked" besides the blank cell.
    #[serde(default = "default_absence_code")]
    pub absence_code: String,
}

fn default_metadata_columns() -> Vec<String> {
    DEFAULT_METADATA_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_absence_code() -> String {
    DEFAULT_ABSENCE_CODE.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            metadata_columns: default_metadata_columns(),
            absence_code: default_absence_code(),
        }
    }
}

impl ReportConfig {
    /// Creates a configuration from explicit metadata columns and absence code.
    pub fn new<I, S>(metadata_columns: I, absence_code: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            metadata_columns: metadata_columns.into_iter().map(Into::into).collect(),
            absence_code: absence_code.into(),
        }
    }

    /// Checks that the configuration can drive a report run.
    ///
    /// Rejects an empty metadata column list, blank or repeated column
    /// names, and a blank absence code.
    pub fn validate(&self) -> ReportResult<()> {
        if self.metadata_columns.is_empty() {
            return Err(ReportError::InvalidConfig {
                message: "metadata_columns must name at least one column".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for column in &self.metadata_columns {
            let name = column.trim();
            if name.is_empty() {
                return Err(ReportError::InvalidConfig {
                    message: "metadata_columns contains a blank name".to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(ReportError::InvalidConfig {
                    message: format!("metadata column '{}' is listed twice", name),
                });
            }
        }

        if self.absence_code.trim().is_empty() {
            return Err(ReportError::InvalidConfig {
                message: "absence_code must not be blank".to_string(),
            });
        }

        Ok(())
    }
}
