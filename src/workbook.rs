//! Excel workbook input.
//!
//! Reads an uploaded `.xlsx` file into a [`WideTable`]: the first row of the
//! selected worksheet holds the column identifiers and every following
//! non-empty row is one employee.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{CellValue, WideTable};

fn open(bytes: &[u8]) -> ReportResult<Xlsx<Cursor<&[u8]>>> {
    open_workbook_from_rs(Cursor::new(bytes)).map_err(|e: calamine::XlsxError| {
        ReportError::WorkbookError {
            message: e.to_string(),
        }
    })
}

/// Lists the worksheet names of an `.xlsx` file, in workbook order.
pub fn sheet_names(bytes: &[u8]) -> ReportResult<Vec<String>> {
    Ok(open(bytes)?.sheet_names())
}

/// Reads one worksheet into a wide table.
///
/// When `sheet` is `None` the first worksheet is used. Completely empty
/// rows are skipped.
///
/// # Errors
///
/// - [`ReportError::WorkbookError`] when the bytes are not a readable workbook.
/// - [`ReportError::SheetNotFound`] when the named sheet does not exist.
pub fn read_sheet(bytes: &[u8], sheet: Option<&str>) -> ReportResult<WideTable> {
    let mut workbook = open(bytes)?;
    let names = workbook.sheet_names();

    let name = match sheet {
        Some(requested) => names
            .iter()
            .find(|name| name.as_str() == requested)
            .cloned()
            .ok_or_else(|| ReportError::SheetNotFound {
                sheet: requested.to_string(),
            })?,
        None => names.first().cloned().ok_or_else(|| ReportError::WorkbookError {
            message: "workbook has no worksheets".to_string(),
        })?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| ReportError::WorkbookError {
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let columns: Vec<CellValue> = match rows.next() {
        Some(header) => header.iter().map(to_cell).collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(to_cell).collect::<Vec<_>>())
        .filter(|cells| !cells.iter().all(CellValue::is_blank))
        .collect();

    debug!(
        sheet = %name,
        columns = columns.len(),
        rows = rows.len(),
        "Read worksheet"
    );
    Ok(WideTable::new(columns, rows))
}

/// Maps a calamine cell onto the engine's cell type.
fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Blank,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::Bool(value) => CellValue::Text(value.to_string()),
        Data::DateTime(datetime) => {
            if datetime.is_duration() {
                CellValue::Number(datetime.as_f64())
            } else {
                datetime
                    .as_datetime()
                    .map_or(CellValue::Number(datetime.as_f64()), CellValue::Date)
            }
        }
        Data::DateTimeIso(text) => {
            parse_iso(text).map_or_else(|| CellValue::Text(text.clone()), CellValue::Date)
        }
        Data::DurationIso(text) => CellValue::Text(text.clone()),
    }
}

fn parse_iso(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
