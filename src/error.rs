//! Error types for the attendance report engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that stops a report run.

use thiserror::Error;

/// The main error type for the attendance report engine.
///
/// Every failure terminates the run. Callers display the message verbatim
/// and never render partial summaries.
///
/// # Example
///
/// ```
/// use attendance_report::error::ReportError;
///
/// let error = ReportError::InvalidHolidayDate {
///     token: "31-02-2026".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Could not interpret holiday date: '31-02-2026'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// A holiday token could not be parsed as a calendar date.
    #[error("Could not interpret holiday date: '{token}'")]
    InvalidHolidayDate {
        /// The offending token, as typed by the user.
        token: String,
    },

    /// Required metadata columns are absent from the uploaded table.
    #[error("Missing expected columns: {}", .missing.join(", "))]
    MissingMetadataColumns {
        /// The configured column identifiers that were not found.
        missing: Vec<String>,
    },

    /// No column of the table was recognised as a date.
    #[error("No date columns were detected in the table. Check the report layout.")]
    NoDateColumnsFound,

    /// Date columns were detected but no record resolved to a calendar date.
    #[error("Could not convert the date columns to calendar dates. Check the headers.")]
    DateParseFailure,

    /// Configuration file was not found at the specified path.
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

    /// Configuration values are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// The uploaded workbook could not be read.
    #[error("Failed to read workbook: {message}")]
    WorkbookError {
        /// The underlying reader error.
        message: String,
    },

    /// The requested worksheet does not exist in the workbook.
    #[error("Worksheet not found: {sheet}")]
    SheetNotFound {
        /// The requested sheet name.
        sheet: String,
    },

    /// The report workbook could not be written.
    #[error("Failed to export report: {message}")]
    ExportError {
        /// The underlying writer error.
        message: String,
    },

    /// A report worker task panicked or was cancelled.
    #[error("Report worker failed: {message}")]
    WorkerFailed {
        /// The join error reported by the runtime.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
