//! Shift validity classification.
//!
//! A cell counts as worked unless it is blank or holds the absence code.
//! Legitimate shift codes are never enumerated: any unusual code still
//! counts as a worked day.

use crate::config::ReportConfig;
use crate::models::CellValue;

/// Coerces a raw cell to the trimmed shift code it holds.
pub fn normalize_shift(cell: &CellValue) -> String {
    cell.normalized()
}

/// Returns `true` when the cell's shift code counts as a worked day.
///
/// Comparison against the absence code is case-sensitive; only the null
/// literals (`nan`, `none`) are matched without regard to case.
///
/// # Example
///
/// ```
/// use attendance_report::aggregation::is_worked;
/// use attendance_report::config::ReportConfig;
/// use attendance_report::models::CellValue;
///
/// let config = ReportConfig::default();
/// assert!(is_worked(&CellValue::from("M1"), &config));
/// assert!(is_worked(&CellValue::from("COON1"), &config));
/// assert!(is_worked(&CellValue::from("l"), &config));
/// assert!(!is_worked(&CellValue::from("L"), &config));
/// assert!(!is_worked(&CellValue::from(" "), &config));
/// assert!(!is_worked(&CellValue::Blank, &config));
/// ```
pub fn is_worked(cell: &CellValue, config: &ReportConfig) -> bool {
    let shift = normalize_shift(cell);
    !shift.is_empty() && shift != config.absence_code.trim()
}
