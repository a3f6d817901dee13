//! Request types for the attendance report API.

use serde::{Deserialize, Serialize};

use crate::models::WideTable;

/// Request body for `POST /report` and `POST /report/export`.
///
/// ```text
/// {
///   "table": {
///     "columns": ["Nombre", "2026-01-04", "2026-01-05"],
///     "rows": [["Ana", "M1", "L"]]
///   },
///   "holidays": "01-01-2026, 25-12-2026"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The wide employee × date table.
    pub table: WideTable,
    /// Free-text holiday list; may be omitted.
    #[serde(default)]
    pub holidays: String,
}

/// Query string for the workbook upload endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkbookQuery {
    /// Worksheet to read; the first sheet when omitted.
    #[serde(default)]
    pub sheet: Option<String>,
    /// Free-text holiday list.
    #[serde(default)]
    pub holidays: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellValue;

    #[test]
    fn test_holidays_default_to_empty() {
        let request: ReportRequest =
            serde_json::from_str(r#"{"table": {"columns": ["Nombre"], "rows": []}}"#).unwrap();
        assert_eq!(request.holidays, "");
        assert_eq!(request.table.columns, vec![CellValue::from("Nombre")]);
    }

    #[test]
    fn test_mixed_cells_deserialize() {
        let request: ReportRequest = serde_json::from_str(
            r#"{"table": {"columns": ["RUT", "2026-01-04"], "rows": [[12345678, null]]},
                "holidays": "01-01-2026"}"#,
        )
        .unwrap();
        assert_eq!(request.table.rows[0][0].normalized(), "12345678");
        assert!(request.table.rows[0][1].is_blank());
    }
}
