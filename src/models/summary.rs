//! Summary report models.
//!
//! This module contains the per-employee summary rows, the detected report
//! period and the [`SummaryReport`] handed to presentation layers, together
//! with a plain tabular rendering of each summary.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EmployeeKey;

/// Display format for every date shown to users.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Separator between dates in a formatted date list.
pub const DATE_LIST_SEPARATOR: &str = ", ";

/// Column label for the Sunday count.
pub const SUNDAY_COUNT_LABEL: &str = "Domingos trabajados";
/// Column label for the Sunday date list.
pub const SUNDAY_DATES_LABEL: &str = "Fechas (domingos)";
/// Column label for the holiday count.
pub const HOLIDAY_COUNT_LABEL: &str = "Festivos trabajados";
/// Column label for the holiday date list.
pub const HOLIDAY_DATES_LABEL: &str = "Fechas (festivos)";
/// Column label for the union count.
pub const TOTAL_COUNT_LABEL: &str = "Domingos + Festivos";
/// Column label for the union date list.
pub const TOTAL_DATES_LABEL: &str = "Fechas (total)";

/// Formats a set of dates as an ascending `dd-mm-yyyy` list.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use attendance_report::models::format_date_list;
/// use chrono::NaiveDate;
///
/// let dates: BTreeSet<NaiveDate> = [
///     NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(format_date_list(&dates), "01-01-2026, 04-01-2026");
/// ```
pub fn format_date_list(dates: &BTreeSet<NaiveDate>) -> String {
    dates
        .iter()
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        .collect::<Vec<_>>()
        .join(DATE_LIST_SEPARATOR)
}

/// Per-employee result for one category (Sunday or holiday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// The employee this row describes.
    pub employee: EmployeeKey,
    /// Number of distinct matching dates.
    pub count: usize,
    /// The matching dates, ascending, as `dd-mm-yyyy` joined by `", "`.
    pub dates: String,
}

impl SummaryRow {
    /// Builds a row whose count and list come from the same date set.
    pub fn from_dates(employee: EmployeeKey, dates: &BTreeSet<NaiveDate>) -> Self {
        Self {
            employee,
            count: dates.len(),
            dates: format_date_list(dates),
        }
    }
}

/// Per-employee union of Sunday-worked and holiday-worked dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionRow {
    /// The employee this row describes.
    pub employee: EmployeeKey,
    /// Number of distinct Sundays worked.
    pub sunday_count: usize,
    /// Number of distinct holidays worked.
    pub holiday_count: usize,
    /// Number of distinct dates in the union.
    pub total_count: usize,
    /// Sunday dates worked.
    pub sunday_dates: String,
    /// Holiday dates worked.
    pub holiday_dates: String,
    /// Union of both date sets.
    pub total_dates: String,
}

impl UnionRow {
    /// Builds a row from the employee's Sunday and holiday date sets.
    ///
    /// A date present in both sets is counted once in the total.
    pub fn from_dates(
        employee: EmployeeKey,
        sundays: &BTreeSet<NaiveDate>,
        holidays: &BTreeSet<NaiveDate>,
    ) -> Self {
        let total: BTreeSet<NaiveDate> = sundays.union(holidays).copied().collect();
        Self {
            employee,
            sunday_count: sundays.len(),
            holiday_count: holidays.len(),
            total_count: total.len(),
            sunday_dates: format_date_list(sundays),
            holiday_dates: format_date_list(holidays),
            total_dates: format_date_list(&total),
        }
    }
}

/// The reporting window spanned by all date columns.
///
/// # Example
///
/// ```
/// use attendance_report::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// assert_eq!(period.to_string(), "01-01-2026 a 31-01-2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// Earliest date present.
    pub start: NaiveDate,
    /// Latest date present.
    pub end: NaiveDate,
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} a {}",
            self.start.format(DISPLAY_DATE_FORMAT),
            self.end.format(DISPLAY_DATE_FORMAT)
        )
    }
}

/// The complete result of one report run.
///
/// All three summaries list the full roster in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Metadata column identifiers, in key order.
    pub metadata_columns: Vec<String>,
    /// The absence code used to classify shifts.
    pub absence_code: String,
    /// The detected reporting window.
    pub period: ReportPeriod,
    /// The parsed holiday dates, ascending.
    pub holidays: Vec<NaiveDate>,
    /// Sundays worked per employee.
    pub sunday: Vec<SummaryRow>,
    /// Holidays worked per employee.
    pub holiday: Vec<SummaryRow>,
    /// Union of Sundays and holidays worked per employee.
    pub union: Vec<UnionRow>,
}

impl SummaryReport {
    /// Renders the Sunday summary as a plain table.
    pub fn sunday_table(&self) -> PlainTable {
        self.category_table(&self.sunday, SUNDAY_COUNT_LABEL, SUNDAY_DATES_LABEL)
    }

    /// Renders the holiday summary as a plain table.
    pub fn holiday_table(&self) -> PlainTable {
        self.category_table(&self.holiday, HOLIDAY_COUNT_LABEL, HOLIDAY_DATES_LABEL)
    }

    /// Renders the union summary as a plain table.
    pub fn union_table(&self) -> PlainTable {
        let headers = self.headers(&[
            SUNDAY_COUNT_LABEL,
            HOLIDAY_COUNT_LABEL,
            TOTAL_COUNT_LABEL,
            SUNDAY_DATES_LABEL,
            HOLIDAY_DATES_LABEL,
            TOTAL_DATES_LABEL,
        ]);
        let rows = self
            .union
            .iter()
            .map(|row| {
                let mut cells = key_cells(&row.employee);
                cells.extend([
                    TableCell::Count(row.sunday_count),
                    TableCell::Count(row.holiday_count),
                    TableCell::Count(row.total_count),
                    TableCell::Text(row.sunday_dates.clone()),
                    TableCell::Text(row.holiday_dates.clone()),
                    TableCell::Text(row.total_dates.clone()),
                ]);
                cells
            })
            .collect();
        PlainTable { headers, rows }
    }

    /// Formats the holiday list for display, or a placeholder when empty.
    pub fn holidays_label(&self) -> String {
        if self.holidays.is_empty() {
            "(sin feriados ingresados)".to_string()
        } else {
            self.holidays
                .iter()
                .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
                .collect::<Vec<_>>()
                .join(DATE_LIST_SEPARATOR)
        }
    }

    fn category_table(
        &self,
        summary: &[SummaryRow],
        count_label: &str,
        dates_label: &str,
    ) -> PlainTable {
        let headers = self.headers(&[count_label, dates_label]);
        let rows = summary
            .iter()
            .map(|row| {
                let mut cells = key_cells(&row.employee);
                cells.push(TableCell::Count(row.count));
                cells.push(TableCell::Text(row.dates.clone()));
                cells
            })
            .collect();
        PlainTable { headers, rows }
    }

    fn headers(&self, extra: &[&str]) -> Vec<String> {
        self.metadata_columns
            .iter()
            .cloned()
            .chain(extra.iter().map(|label| label.to_string()))
            .collect()
    }
}

fn key_cells(employee: &EmployeeKey) -> Vec<TableCell> {
    employee
        .values()
        .iter()
        .map(|value| TableCell::Text(value.clone()))
        .collect()
}

/// A display cell of a [`PlainTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableCell {
    /// A day count.
    Count(usize),
    /// Any textual value.
    Text(String),
}

impl fmt::Display for TableCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableCell::Count(count) => write!(f, "{}", count),
            TableCell::Text(text) => f.write_str(text),
        }
    }
}

/// Headers plus rows of display cells, free of any styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTable {
    /// Column labels.
    pub headers: Vec<String>,
    /// One row per employee, aligned with `headers`.
    pub rows: Vec<Vec<TableCell>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn date_set(dates: &[&str]) -> BTreeSet<NaiveDate> {
        dates.iter().map(|d| make_date(d)).collect()
    }

    fn sample_report() -> SummaryReport {
        let ana = EmployeeKey::new(["Ana", "1-9"]);
        let sundays = date_set(&["2026-01-04"]);
        let holidays = date_set(&["2026-01-01"]);
        SummaryReport {
            metadata_columns: vec!["Nombre".to_string(), "RUT".to_string()],
            absence_code: "L".to_string(),
            period: ReportPeriod {
                start: make_date("2026-01-01"),
                end: make_date("2026-01-05"),
            },
            holidays: vec![make_date("2026-01-01")],
            sunday: vec![SummaryRow::from_dates(ana.clone(), &sundays)],
            holiday: vec![SummaryRow::from_dates(ana.clone(), &holidays)],
            union: vec![UnionRow::from_dates(ana, &sundays, &holidays)],
        }
    }

    #[test]
    fn test_format_date_list_empty() {
        assert_eq!(format_date_list(&BTreeSet::new()), "");
    }

    #[test]
    fn test_summary_row_count_matches_list() {
        let dates = date_set(&["2026-01-11", "2026-01-04"]);
        let row = SummaryRow::from_dates(EmployeeKey::new(["Ana"]), &dates);
        assert_eq!(row.count, 2);
        assert_eq!(row.dates, "04-01-2026, 11-01-2026");
    }

    #[test]
    fn test_union_row_collapses_shared_dates() {
        let sundays = date_set(&["2026-01-04", "2026-01-11"]);
        let holidays = date_set(&["2026-01-01", "2026-01-04"]);
        let row = UnionRow::from_dates(EmployeeKey::new(["Ana"]), &sundays, &holidays);

        assert_eq!(row.sunday_count, 2);
        assert_eq!(row.holiday_count, 2);
        assert_eq!(row.total_count, 3);
        assert_eq!(row.total_dates, "01-01-2026, 04-01-2026, 11-01-2026");
    }

    #[test]
    fn test_period_display() {
        assert_eq!(sample_report().period.to_string(), "01-01-2026 a 05-01-2026");
    }

    #[test]
    fn test_sunday_table_layout() {
        let table = sample_report().sunday_table();
        assert_eq!(
            table.headers,
            vec!["Nombre", "RUT", SUNDAY_COUNT_LABEL, SUNDAY_DATES_LABEL]
        );
        assert_eq!(
            table.rows[0],
            vec![
                TableCell::Text("Ana".to_string()),
                TableCell::Text("1-9".to_string()),
                TableCell::Count(1),
                TableCell::Text("04-01-2026".to_string()),
            ]
        );
    }

    #[test]
    fn test_union_table_layout() {
        let table = sample_report().union_table();
        assert_eq!(table.headers.len(), 8);
        assert_eq!(table.headers[4], TOTAL_COUNT_LABEL);
        assert_eq!(table.rows[0][4], TableCell::Count(2));
        assert_eq!(table.rows[0][7].to_string(), "01-01-2026, 04-01-2026");
    }

    #[test]
    fn test_holidays_label() {
        let mut report = sample_report();
        assert_eq!(report.holidays_label(), "01-01-2026");
        report.holidays.clear();
        assert_eq!(report.holidays_label(), "(sin feriados ingresados)");
    }
}
