//! Report period detection.

use crate::error::{ReportError, ReportResult};
use crate::models::{LongRelation, ReportPeriod};

/// Derives the reporting window from every record, worked or not.
///
/// # Errors
///
/// Returns [`ReportError::DateParseFailure`] when the relation is empty.
pub fn detect_period(relation: &LongRelation) -> ReportResult<ReportPeriod> {
    let mut dates = relation.records().iter().map(|record| record.date);
    let first = dates.next().ok_or(ReportError::DateParseFailure)?;

    let (start, end) = dates.fold((first, first), |(start, end), date| {
        (start.min(date), end.max(date))
    });
    Ok(ReportPeriod { start, end })
}
