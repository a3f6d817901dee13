//! Wide attendance table and employee key models.

use serde::{Deserialize, Serialize};

use super::CellValue;

static BLANK: CellValue = CellValue::Blank;

/// The wide employee × date table as uploaded.
///
/// `columns` holds one identifier per column; each row holds the cells of
/// one employee in the same order. Rows shorter than the header are padded
/// with blanks on access.
///
/// # Example
///
/// ```
/// use attendance_report::models::{CellValue, WideTable};
///
/// let table = WideTable::new(
///     vec!["Nombre del Colaborador".into(), "2026-01-04".into()],
///     vec![vec!["Ana".into(), "M1".into()]],
/// );
/// assert_eq!(table.find_column("Nombre del Colaborador"), Some(0));
/// assert_eq!(table.cell(0, 1), &CellValue::from("M1"));
/// assert_eq!(table.cell(0, 7), &CellValue::Blank);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WideTable {
    /// Column identifiers, in source order.
    pub columns: Vec<CellValue>,
    /// Employee rows, in source order.
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl WideTable {
    /// Creates a table from column identifiers and rows.
    pub fn new(columns: Vec<CellValue>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    /// Returns the number of employee rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of the first column whose trimmed label equals `name`.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.columns
            .iter()
            .position(|column| column.normalized() == name)
    }

    /// Returns the cell at (`row`, `column`), or a blank cell when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&BLANK)
    }
}

/// The ordered tuple of metadata values that identifies one employee.
///
/// Values follow the configured metadata column order, so keys built from
/// the same configuration compare and hash consistently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeKey(Vec<String>);

impl EmployeeKey {
    /// Creates a key from values already in metadata column order.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    /// Returns the key values in metadata column order.
    pub fn values(&self) -> &[String] {
        &self.0
    }
}
