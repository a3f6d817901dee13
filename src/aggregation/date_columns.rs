//! Date-column detection.
//!
//! Scans the column identifiers of a wide table and keeps the ones that
//! represent calendar dates. Stray labels and unnamed artifacts are simply
//! left out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::CellValue;

use super::{DateOrder, parse_calendar_date};

/// A column recognised as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateColumn {
    /// Position of the column in the source table.
    pub index: usize,
    /// The column identifier as displayed.
    pub label: String,
    /// The calendar date the column stands for.
    pub date: NaiveDate,
}

/// Resolves a single column identifier to a calendar date.
///
/// Native dates are accepted directly (time dropped); text goes through
/// [`parse_calendar_date`] month-first, so `04/01/2026` is 1 April.
/// Numbers and blanks are never dates.
pub fn column_date(column: &CellValue) -> Option<NaiveDate> {
    match column {
        CellValue::Date(datetime) => Some(datetime.date()),
        CellValue::Text(text) => parse_calendar_date(text, DateOrder::MonthFirst),
        CellValue::Number(_) | CellValue::Blank => None,
    }
}

/// Detects the date columns among `columns`, skipping metadata columns.
///
/// The result preserves source order. Two columns resolving to the same
/// calendar date are both kept.
///
/// # Example
///
/// ```
/// use attendance_report::aggregation::detect_date_columns;
/// use attendance_report::models::CellValue;
/// use chrono::NaiveDate;
///
/// let columns: Vec<CellValue> = vec![
///     "RUT".into(),
///     "2026/01/04".into(),
///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap().into(),
///     "Unnamed: 3".into(),
/// ];
/// let detected = detect_date_columns(&columns, &["RUT".to_string()]);
/// assert_eq!(detected.len(), 2);
/// assert_eq!(detected[0].index, 1);
/// assert_eq!(detected[1].date, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
/// ```
pub fn detect_date_columns(columns: &[CellValue], metadata_columns: &[String]) -> Vec<DateColumn> {
    columns
        .iter()
        .enumerate()
        .filter_map(|(index, column)| {
            let label = column.normalized();
            if metadata_columns.iter().any(|name| name.trim() == label) {
                return None;
            }
            column_date(column).map(|date| DateColumn { index, label, date })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::parse_holidays;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn metadata() -> Vec<String> {
        vec!["Nombre del Colaborador".to_string(), "RUT".to_string()]
    }

    #[test]
    fn test_text_header_matches_native_header() {
        let text = column_date(&CellValue::from("2026/01/04"));
        let native = column_date(&CellValue::from(ymd(2026, 1, 4)));
        assert_eq!(text, Some(ymd(2026, 1, 4)));
        assert_eq!(text, native);
    }

    #[test]
    fn test_ambiguous_text_header_reads_month_first() {
        assert_eq!(
            column_date(&CellValue::from("04/01/2026")),
            Some(ymd(2026, 4, 1))
        );
        assert_eq!(
            column_date(&CellValue::from("25/12/2026")),
            Some(ymd(2026, 12, 25))
        );
    }

    #[test]
    fn test_headers_and_holidays_read_ambiguous_dates_differently() {
        let header = column_date(&CellValue::from("04/01/2026"));
        let holidays = parse_holidays("04/01/2026").unwrap();

        assert_eq!(header, Some(ymd(2026, 4, 1)));
        assert_eq!(holidays.into_iter().collect::<Vec<_>>(), vec![ymd(2026, 1, 4)]);
    }

    #[test]
    fn test_native_datetime_drops_time() {
        let datetime = ymd(2026, 1, 4).and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(column_date(&CellValue::from(datetime)), Some(ymd(2026, 1, 4)));
    }

    #[test]
    fn test_numbers_and_blanks_are_not_dates() {
        assert_eq!(column_date(&CellValue::Number(46026.0)), None);
        assert_eq!(column_date(&CellValue::Blank), None);
    }

    #[test]
    fn test_metadata_and_labels_skipped_order_preserved() {
        let columns: Vec<CellValue> = vec![
            "Nombre del Colaborador".into(),
            "RUT".into(),
            "2026-01-05".into(),
            "Total".into(),
            ymd(2026, 1, 4).into(),
            CellValue::Blank,
        ];

        let detected = detect_date_columns(&columns, &metadata());
        let indices: Vec<usize> = detected.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![2, 4]);
        assert_eq!(detected[0].label, "2026-01-05");
        assert_eq!(detected[1].date, ymd(2026, 1, 4));
    }

    #[test]
    fn test_duplicate_dates_kept_as_distinct_columns() {
        let columns: Vec<CellValue> = vec!["2026-01-04".into(), "01-04-2026".into()];
        let detected = detect_date_columns(&columns, &metadata());
        assert_eq!(detected.len(), 2);
        assert_eq!(detected[0].date, detected[1].date);
    }

    #[test]
    fn test_no_dates_gives_empty_list() {
        let columns: Vec<CellValue> = vec!["RUT".into(), "Área".into()];
        assert!(detect_date_columns(&columns, &metadata()).is_empty());
    }
}
