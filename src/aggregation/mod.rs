//! Aggregation engine for the attendance report.
//!
//! This module turns a wide employee × date table into the Sunday, holiday
//! and union summaries: holiday parsing, date-column detection, shift
//! classification, wide-to-long reshaping, per-category folds and period
//! detection, tied together by [`run_report`].

mod date_columns;
mod date_parse;
mod holidays;
mod period;
mod report;
mod reshape;
mod shift_validity;
mod summary;

pub use date_columns::{DateColumn, column_date, detect_date_columns};
pub use date_parse::{DateOrder, parse_calendar_date};
pub use holidays::{HolidaySet, parse_holidays};
pub use period::detect_period;
pub use report::run_report;
pub use reshape::{locate_metadata_columns, reshape};
pub use shift_validity::{is_worked, normalize_shift};
pub use summary::{CategorySummaries, DatesByEmployee, collect_worked_dates, is_sunday, summarize};
