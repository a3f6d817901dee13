//! Configuration loading and management for the attendance report engine.
//!
//! This module provides the report options (metadata columns and the absence
//! code) and a loader for the YAML file that overrides them.
//!
//! # Example
//!
//! ```no_run
//! use attendance_report::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/report.yaml").unwrap();
//! println!("Key columns: {:?}", loader.config().metadata_columns);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_ABSENCE_CODE, DEFAULT_METADATA_COLUMNS, ReportConfig};
