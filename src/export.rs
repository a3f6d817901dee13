//! Excel export of a finished report.
//!
//! Writes the Sunday, holiday and union summaries to one sheet each, with a
//! short notes block above the header row, a frozen header and columns
//! sized to their content.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{PlainTable, SummaryReport, TableCell};

/// Suggested download name for the exported report.
pub const REPORT_FILE_NAME: &str = "Reporte_Asistencias_Domingos_y_Festivos.xlsx";

/// MIME type of `.xlsx` documents.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Sheet holding the Sunday summary.
pub const SUNDAY_SHEET: &str = "Domingos trabajados";
/// Sheet holding the holiday summary.
pub const HOLIDAY_SHEET: &str = "Festivos trabajados";
/// Sheet holding the union summary.
pub const UNION_SHEET: &str = "Domingos + Festivos";

/// Zero-based row of the table header; rows above it hold the notes.
pub const HEADER_ROW: u32 = 4;

const MIN_COLUMN_WIDTH: usize = 10;
const MAX_COLUMN_WIDTH: usize = 60;
const WIDTH_SCAN_ROWS: usize = 1500;

struct SheetLayout {
    name: &'static str,
    title: &'static str,
    table: PlainTable,
    show_holidays: bool,
}

/// Renders the report as an `.xlsx` document.
///
/// # Errors
///
/// Returns [`ReportError::ExportError`] when the workbook cannot be written.
pub fn export_report(report: &SummaryReport) -> ReportResult<Vec<u8>> {
    let layouts = [
        SheetLayout {
            name: SUNDAY_SHEET,
            title: "Reporte de asistencias: Domingos trabajados",
            table: report.sunday_table(),
            show_holidays: false,
        },
        SheetLayout {
            name: HOLIDAY_SHEET,
            title: "Reporte de asistencias: Festivos trabajados",
            table: report.holiday_table(),
            show_holidays: true,
        },
        SheetLayout {
            name: UNION_SHEET,
            title: "Reporte de asistencias: Domingos + Festivos trabajados",
            table: report.union_table(),
            show_holidays: true,
        },
    ];

    let mut workbook = Workbook::new();
    for layout in &layouts {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, layout, report).map_err(export_error)?;
    }

    let bytes = workbook.save_to_buffer().map_err(export_error)?;
    debug!(
        bytes = bytes.len(),
        employees = report.union.len(),
        "Exported report workbook"
    );
    Ok(bytes)
}

fn export_error(error: XlsxError) -> ReportError {
    ReportError::ExportError {
        message: error.to_string(),
    }
}

fn notes(layout: &SheetLayout, report: &SummaryReport) -> Vec<String> {
    let mut lines = vec![
        layout.title.to_string(),
        format!("Periodo detectado: {}", report.period),
        format!(
            "Regla de conteo: se considera 'trabajado' cuando el turno es distinto de '{}' y distinto de vacío.",
            report.absence_code
        ),
    ];
    if layout.show_holidays {
        lines.push(format!(
            "Feriados ingresados manualmente: {}",
            report.holidays_label()
        ));
    }
    lines
}

fn write_sheet(
    worksheet: &mut Worksheet,
    layout: &SheetLayout,
    report: &SummaryReport,
) -> Result<(), XlsxError> {
    let title_format = Format::new().set_bold().set_font_size(14);
    let header_format = Format::new().set_bold();

    worksheet.set_name(layout.name)?;

    let notes = notes(layout, report);
    for (row, line) in notes.iter().enumerate() {
        if row == 0 {
            worksheet.write_string_with_format(0, 0, line, &title_format)?;
        } else {
            worksheet.write_string(row as u32, 0, line)?;
        }
    }

    for (col, header) in layout.table.headers.iter().enumerate() {
        worksheet.write_string_with_format(HEADER_ROW, col as u16, header, &header_format)?;
    }

    for (index, cells) in layout.table.rows.iter().enumerate() {
        let row = HEADER_ROW + 1 + index as u32;
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                TableCell::Count(count) => {
                    worksheet.write_number(row, col as u16, *count as f64)?;
                }
                TableCell::Text(text) => {
                    worksheet.write_string(row, col as u16, text)?;
                }
            }
        }
    }

    worksheet.set_freeze_panes(HEADER_ROW + 1, 0)?;

    for (col, width) in column_widths(&notes, &layout.table).into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width as f64)?;
    }

    Ok(())
}

/// Width per column: longest text among the first rows of the sheet plus
/// two, clamped to a readable range. Notes count toward the first column.
fn column_widths(notes: &[String], table: &PlainTable) -> Vec<usize> {
    let mut longest: Vec<usize> = table
        .headers
        .iter()
        .map(|header| header.chars().count())
        .collect();

    let note_rows = notes.len().min(WIDTH_SCAN_ROWS);
    if let Some(first) = longest.first_mut() {
        for line in &notes[..note_rows] {
            *first = (*first).max(line.chars().count());
        }
    }

    let data_rows = WIDTH_SCAN_ROWS.saturating_sub(HEADER_ROW as usize + 1);
    for cells in table.rows.iter().take(data_rows) {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(width) = longest.get_mut(col) {
                *width = (*width).max(cell.to_string().chars().count());
            }
        }
    }

    longest
        .into_iter()
        .map(|len| (len + 2).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH))
        .collect()
}
