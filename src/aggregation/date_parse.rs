//! Tolerant calendar-date parsing for free-text dates.
//!
//! Holiday tokens and textual column headers arrive in whatever shape the
//! user typed: `01-01-2026`, `2026/01/04`, `18.09.2026`, sometimes with a
//! trailing time. Everything is reduced to a [`NaiveDate`].

use chrono::{NaiveDate, NaiveTime};

/// Time suffixes accepted after the date part.
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Two-digit years below this pivot land in the 2000s, others in the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

/// Preferred reading of an ambiguous `xx-xx-yyyy` date.
///
/// The other reading is always tried as a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `dd-mm-yyyy` first, as typed in the holiday box.
    DayFirst,
    /// `mm-dd-yyyy` first, as used for textual column headers.
    MonthFirst,
}

/// Parses a free-text date into a calendar date.
///
/// Separators `.` and `/` are treated as `-`. Year-first dates
/// (`yyyy-mm-dd`) and compact `yyyymmdd` are unambiguous. Otherwise the
/// reading preferred by `order` wins and the other one is the fallback.
/// A time part after a space or `T` is validated and dropped.
///
/// # Example
///
/// ```
/// use attendance_report::aggregation::{DateOrder, parse_calendar_date};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 9, 18).unwrap();
/// assert_eq!(parse_calendar_date("18-09-2026", DateOrder::DayFirst), Some(date));
/// assert_eq!(parse_calendar_date("18.09.2026", DateOrder::DayFirst), Some(date));
/// assert_eq!(parse_calendar_date("2026/09/18", DateOrder::MonthFirst), Some(date));
/// assert_eq!(parse_calendar_date("09/18/2026", DateOrder::DayFirst), Some(date));
/// assert_eq!(parse_calendar_date("Unnamed: 4", DateOrder::MonthFirst), None);
///
/// let ambiguous = "04/01/2026";
/// assert_eq!(
///     parse_calendar_date(ambiguous, DateOrder::DayFirst),
///     NaiveDate::from_ymd_opt(2026, 1, 4)
/// );
/// assert_eq!(
///     parse_calendar_date(ambiguous, DateOrder::MonthFirst),
///     NaiveDate::from_ymd_opt(2026, 4, 1)
/// );
/// ```
pub fn parse_calendar_date(raw: &str, order: DateOrder) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_part = strip_time(trimmed)?;
    let normalized = date_part.replace(['.', '/'], "-");

    if normalized.len() == 8 && is_digits(&normalized) {
        return build_date(&normalized[0..4], &normalized[4..6], &normalized[6..8]);
    }

    let parts: Vec<&str> = normalized.split('-').collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };
    if ![first, second, third]
        .iter()
        .all(|part| !part.is_empty() && part.len() <= 4 && is_digits(part))
    {
        return None;
    }

    if first.len() == 4 {
        return build_date(first, second, third);
    }
    if first.len() > 2 || second.len() > 2 {
        return None;
    }

    let year = expand_year(third)?;
    let day_first = || from_parts(year, second, first);
    let month_first = || from_parts(year, first, second);
    match order {
        DateOrder::DayFirst => day_first().or_else(month_first),
        DateOrder::MonthFirst => month_first().or_else(day_first),
    }
}

/// Splits off an optional time suffix, rejecting malformed ones.
fn strip_time(text: &str) -> Option<&str> {
    match text.find([' ', 'T']) {
        None => Some(text),
        Some(position) => {
            let time = text[position + 1..].trim();
            TIME_FORMATS
                .iter()
                .any(|format| NaiveTime::parse_from_str(time, format).is_ok())
                .then_some(&text[..position])
        }
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn expand_year(text: &str) -> Option<i32> {
    let year: i32 = text.parse().ok()?;
    match text.len() {
        4 => Some(year),
        2 if year < TWO_DIGIT_YEAR_PIVOT => Some(2000 + year),
        2 => Some(1900 + year),
        _ => None,
    }
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    from_parts(year.parse().ok()?, month, day)
}

fn from_parts(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}
