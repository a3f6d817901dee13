//! Attendance report engine.
//!
//! This crate turns a wide employee × date shift table into per-employee
//! counts of Sundays worked, holidays worked and their union, with the
//! reporting period detected from the date columns. The result can be
//! returned as data, rendered as plain tables or exported as an Excel
//! workbook, and the whole pipeline is served over HTTP.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod workbook;
