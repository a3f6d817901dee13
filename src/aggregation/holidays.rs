//! Holiday list parsing.
//!
//! Turns the free text typed by the user into a set of calendar dates.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ReportError, ReportResult};

use super::{DateOrder, parse_calendar_date};

/// The deduplicated holiday dates of one run, in ascending order.
pub type HolidaySet = BTreeSet<NaiveDate>;

/// Parses delimiter-separated holiday dates.
///
/// Tokens are separated by any run of commas, semicolons or newlines;
/// blank tokens are ignored. Each token goes through
/// [`parse_calendar_date`] (day-first, then month-first). Duplicates merge.
///
/// # Errors
///
/// Returns [`ReportError::InvalidHolidayDate`] naming the first token that
/// is not a date. Invalid tokens are never skipped.
///
/// # Example
///
/// ```
/// use attendance_report::aggregation::parse_holidays;
///
/// let comma = parse_holidays("01-01-2026, 18-09-2026").unwrap();
/// let lines = parse_holidays("01-01-2026\n18-09-2026").unwrap();
/// assert_eq!(comma, lines);
/// assert_eq!(comma.len(), 2);
///
/// assert!(parse_holidays("   ").unwrap().is_empty());
/// assert!(parse_holidays("01-01-2026, mañana").is_err());
/// ```
pub fn parse_holidays(text: &str) -> ReportResult<HolidaySet> {
    let mut holidays = HolidaySet::new();

    for token in text
        .split([',', ';', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
    {
        let date = parse_calendar_date(token, DateOrder::DayFirst).ok_or_else(|| {
            ReportError::InvalidHolidayDate {
                token: token.to_string(),
            }
        })?;
        holidays.insert(date);
    }

    debug!(holidays = holidays.len(), "Parsed holiday list");
    Ok(holidays)
}
