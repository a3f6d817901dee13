//! Wide-to-long reshaping.
//!
//! Converts the employee × date matrix into one [`LongRecord`] per
//! (employee row, date column) pair, in a single pass.

use std::collections::HashSet;

use tracing::debug;

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::{EmployeeKey, LongRecord, LongRelation, WideTable};

use super::{DateColumn, is_worked};

/// Locates every configured metadata column in the table.
///
/// Returns the column positions in configured key order.
///
/// # Errors
///
/// Returns [`ReportError::MissingMetadataColumns`] listing exactly the
/// configured identifiers that are absent.
pub fn locate_metadata_columns(
    table: &WideTable,
    config: &ReportConfig,
) -> ReportResult<Vec<usize>> {
    let mut positions = Vec::with_capacity(config.metadata_columns.len());
    let mut missing = Vec::new();

    for name in &config.metadata_columns {
        match table.find_column(name) {
            Some(position) => positions.push(position),
            None => missing.push(name.clone()),
        }
    }

    if !missing.is_empty() {
        return Err(ReportError::MissingMetadataColumns { missing });
    }
    Ok(positions)
}

/// Builds the long relation from the wide table.
///
/// Every row contributes its [`EmployeeKey`] to the roster (once, in order
/// of first appearance) and one record per date column.
///
/// # Errors
///
/// - [`ReportError::MissingMetadataColumns`] when key columns are absent.
/// - [`ReportError::DateParseFailure`] when no record carries a date, for
///   example when the table has date headers but no employee rows.
pub fn reshape(
    table: &WideTable,
    config: &ReportConfig,
    date_columns: &[DateColumn],
) -> ReportResult<LongRelation> {
    let key_positions = locate_metadata_columns(table, config)?;

    let mut seen = HashSet::new();
    let mut roster = Vec::new();
    let mut records = Vec::with_capacity(table.row_count() * date_columns.len());

    for row in 0..table.row_count() {
        let employee = EmployeeKey::new(
            key_positions
                .iter()
                .map(|&position| table.cell(row, position).normalized()),
        );

        if seen.insert(employee.clone()) {
            roster.push(employee.clone());
        }

        records.extend(date_columns.iter().map(|column| LongRecord {
            employee: employee.clone(),
            date: column.date,
            worked: is_worked(table.cell(row, column.index), config),
        }));
    }

    let relation = LongRelation::new(roster, records);
    if relation.is_empty() {
        return Err(ReportError::DateParseFailure);
    }

    debug!(
        employees = relation.roster().len(),
        records = relation.records().len(),
        "Reshaped attendance table"
    );
    Ok(relation)
}
