//! Core data models for the attendance report engine.
//!
//! This module contains all the domain models used throughout the engine:
//! the raw wide table, the reshaped long relation and the summaries.

mod cell;
mod record;
mod summary;
mod table;

pub use cell::CellValue;
pub use record::{LongRecord, LongRelation};
pub use summary::{
    DATE_LIST_SEPARATOR, DISPLAY_DATE_FORMAT, HOLIDAY_COUNT_LABEL, HOLIDAY_DATES_LABEL,
    PlainTable, ReportPeriod, SUNDAY_COUNT_LABEL, SUNDAY_DATES_LABEL, SummaryReport, SummaryRow,
    TOTAL_COUNT_LABEL, TOTAL_DATES_LABEL, TableCell, UnionRow, format_date_list,
};
pub use table::{EmployeeKey, WideTable};
