//! Long (employee, date, worked) relation produced by reshaping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EmployeeKey;

/// One observation: whether an employee worked on a calendar date.
///
/// Created once per (employee row, date column) pair and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongRecord {
    /// The employee the observation belongs to.
    pub employee: EmployeeKey,
    /// The calendar date of the source column.
    pub date: NaiveDate,
    /// Whether the shift code counts as worked.
    pub worked: bool,
}

/// The reshaped table: every record plus the distinct employee roster.
///
/// The roster lists each [`EmployeeKey`] once, in order of first appearance
/// in the source table, including employees without any worked day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongRelation {
    roster: Vec<EmployeeKey>,
    records: Vec<LongRecord>,
}

impl LongRelation {
    /// Creates a relation from a roster and its records.
    pub fn new(roster: Vec<EmployeeKey>, records: Vec<LongRecord>) -> Self {
        Self { roster, records }
    }

    /// Returns the distinct employees in first-appearance order.
    pub fn roster(&self) -> &[EmployeeKey] {
        &self.roster
    }

    /// Returns all records in (row, column) order.
    pub fn records(&self) -> &[LongRecord] {
        &self.records
    }

    /// Returns `true` when no record was produced.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records flagged as worked.
    pub fn worked(&self) -> impl Iterator<Item = &LongRecord> {
        self.records.iter().filter(|record| record.worked)
    }
}
