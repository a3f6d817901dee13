//! Loosely-typed spreadsheet cell values.
//!
//! Spreadsheet input mixes text, numbers, native dates and blanks in the
//! same column. [`CellValue`] makes that explicit, and [`CellValue::normalized`]
//! is the single conversion from any cell to the trimmed text the rest of
//! the engine works with.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Textual spellings of a missing value, compared case-insensitively.
const NULL_LITERALS: [&str; 2] = ["nan", "none"];

/// A single cell (or column identifier) as found in the source table.
///
/// JSON input maps `null` to [`CellValue::Blank`], numbers to
/// [`CellValue::Number`], ISO datetimes to [`CellValue::Date`] and any other
/// string to [`CellValue::Text`].
///
/// # Example
///
/// ```
/// use attendance_report::models::CellValue;
///
/// assert_eq!(CellValue::Text("  M1 ".to_string()).normalized(), "M1");
/// assert_eq!(CellValue::Text("NaN".to_string()).normalized(), "");
/// assert_eq!(CellValue::Number(7.0).normalized(), "7");
/// assert_eq!(CellValue::Blank.normalized(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// An empty cell or explicit null marker.
    Blank,
    /// A numeric value as stored by the spreadsheet.
    Number(f64),
    /// A native date or datetime value.
    Date(NaiveDateTime),
    /// Any textual value, untrimmed.
    Text(String),
}

impl CellValue {
    /// Coerces the cell to a trimmed string.
    ///
    /// Blanks, NaN numbers and the textual null literals (`nan`, `none`,
    /// any case) all collapse to the empty string. Otherwise the content is
    /// preserved exactly, case included.
    pub fn normalized(&self) -> String {
        match self {
            CellValue::Blank => String::new(),
            CellValue::Number(value) => format_number(*value),
            CellValue::Date(datetime) => format_datetime(*datetime),
            CellValue::Text(text) => {
                let trimmed = text.trim();
                if NULL_LITERALS
                    .iter()
                    .any(|literal| trimmed.eq_ignore_ascii_case(literal))
                {
                    String::new()
                } else {
                    trimmed.to_string()
                }
            }
        }
    }

    /// Returns the calendar date of a native date cell.
    ///
    /// Text cells are not parsed here; see the date-column detector.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(datetime) => Some(datetime.date()),
            _ => None,
        }
    }

    /// Returns `true` when the cell normalizes to the empty string.
    pub fn is_blank(&self) -> bool {
        self.normalized().is_empty()
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn format_datetime(datetime: NaiveDateTime) -> String {
    if datetime.time() == NaiveTime::MIN {
        datetime.date().format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value.and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Blank, Into::into)
    }
}
