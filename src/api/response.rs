//! Response types for the attendance report API.
//!
//! This module defines the success payloads, the JSON error body and the
//! mapping from [`ReportError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ReportError;
use crate::models::SummaryReport;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            ReportError::InvalidHolidayDate { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_HOLIDAY_DATE")
            }
            ReportError::MissingMetadataColumns { .. } => {
                (StatusCode::BAD_REQUEST, "MISSING_METADATA_COLUMNS")
            }
            ReportError::NoDateColumnsFound => (StatusCode::BAD_REQUEST, "NO_DATE_COLUMNS"),
            ReportError::DateParseFailure => (StatusCode::BAD_REQUEST, "DATE_PARSE_FAILURE"),
            ReportError::WorkbookError { .. } => (StatusCode::BAD_REQUEST, "WORKBOOK_ERROR"),
            ReportError::SheetNotFound { .. } => (StatusCode::BAD_REQUEST, "SHEET_NOT_FOUND"),
            ReportError::ConfigNotFound { .. }
            | ReportError::ConfigParseError { .. }
            | ReportError::InvalidConfig { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            ReportError::ExportError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_ERROR")
            }
            ReportError::WorkerFailed { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let error = match error {
            ReportError::MissingMetadataColumns { .. } => ApiError::with_details(
                code,
                message,
                "The first row of the table must contain every configured metadata column",
            ),
            _ => ApiError::new(code, message),
        };
        ApiErrorResponse { status, error }
    }
}

/// Successful JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Identifier of the request that produced this report.
    pub correlation_id: Uuid,
    /// The detected period, formatted for display.
    pub period_label: String,
    /// The report itself.
    #[serde(flatten)]
    pub report: SummaryReport,
}

/// Worksheets of an uploaded workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsResponse {
    /// Sheet names, in workbook order.
    pub sheets: Vec<String>,
}
