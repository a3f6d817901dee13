//! End-to-end report run.

use std::time::Instant;

use tracing::info;

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::{SummaryReport, WideTable};

use super::{
    detect_date_columns, detect_period, locate_metadata_columns, parse_holidays, reshape,
    summarize,
};

/// Runs the whole aggregation for one uploaded table.
///
/// This is a pure function of its inputs: identical inputs always yield an
/// identical report. Any failure aborts the run and no partial report is
/// produced.
///
/// Checks happen in this order:
/// 1. configuration validity
/// 2. presence of the metadata columns ([`ReportError::MissingMetadataColumns`])
/// 3. holiday text ([`ReportError::InvalidHolidayDate`])
/// 4. at least one date column ([`ReportError::NoDateColumnsFound`])
/// 5. at least one dated record ([`ReportError::DateParseFailure`])
///
/// # Example
///
/// ```
/// use attendance_report::aggregation::run_report;
/// use attendance_report::config::ReportConfig;
/// use attendance_report::models::WideTable;
///
/// let table = WideTable::new(
///     vec!["Nombre".into(), "2026-01-04".into(), "2026-01-05".into()],
///     vec![vec!["Ana".into(), "M1".into(), "L".into()]],
/// );
/// let config = ReportConfig::new(["Nombre"], "L");
///
/// let report = run_report(&table, "", &config).unwrap();
/// assert_eq!(report.sunday[0].count, 1);
/// assert_eq!(report.period.to_string(), "04-01-2026 a 05-01-2026");
/// ```
pub fn run_report(
    table: &WideTable,
    holiday_text: &str,
    config: &ReportConfig,
) -> ReportResult<SummaryReport> {
    let started = Instant::now();
    config.validate()?;
    locate_metadata_columns(table, config)?;

    let date_columns = detect_date_columns(&table.columns, &config.metadata_columns);
    let holidays = parse_holidays(holiday_text)?;
    if date_columns.is_empty() {
        return Err(ReportError::NoDateColumnsFound);
    }

    let relation = reshape(table, config, &date_columns)?;
    let period = detect_period(&relation)?;
    let summaries = summarize(&relation, &holidays);

    info!(
        rows = table.row_count(),
        employees = relation.roster().len(),
        date_columns = date_columns.len(),
        holidays = holidays.len(),
        period = %period,
        duration_us = started.elapsed().as_micros(),
        "Attendance report built"
    );

    Ok(SummaryReport {
        metadata_columns: config.metadata_columns.clone(),
        absence_code: config.absence_code.clone(),
        period,
        holidays: holidays.into_iter().collect(),
        sunday: summaries.sunday,
        holiday: summaries.holiday,
        union: summaries.union,
    })
}
