//! HTTP API module for the attendance report engine.
//!
//! This module exposes the report pipeline over HTTP: a JSON endpoint for
//! pre-parsed tables and raw `.xlsx` upload endpoints, each able to return
//! the report as JSON or as an Excel download.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_UPLOAD_BYTES, create_router};
pub use request::{ReportRequest, WorkbookQuery};
pub use response::{ApiError, ApiErrorResponse, ReportResponse, SheetsResponse};
pub use state::AppState;
