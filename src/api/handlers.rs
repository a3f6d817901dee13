//! HTTP request handlers for the attendance report API.
//!
//! Every request gets a correlation id that is logged with its outcome and
//! returned in JSON reports.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::run_report;
use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::export::{REPORT_FILE_NAME, XLSX_MIME_TYPE, export_report};
use crate::models::{SummaryReport, WideTable};
use crate::workbook::{read_sheet, sheet_names};

use super::request::{ReportRequest, WorkbookQuery};
use super::response::{ApiError, ApiErrorResponse, ReportResponse, SheetsResponse};
use super::state::AppState;

/// Largest accepted request body, uploads included.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .route("/report/export", post(report_export_handler))
        .route("/workbook/sheets", post(workbook_sheets_handler))
        .route("/workbook/report", post(workbook_report_handler))
        .route("/workbook/export", post(workbook_export_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Handler for `POST /report`: JSON table in, JSON report out.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    let report = run_blocking(move || {
        build_report(correlation_id, &request.table, &request.holidays, state.config())
    })
    .await;
    match report {
        Ok(report) => json_report(correlation_id, report),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /report/export`: JSON table in, `.xlsx` out.
async fn report_export_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report export request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    let exported = run_blocking(move || {
        build_report(correlation_id, &request.table, &request.holidays, state.config())
            .and_then(|report| export_report(&report))
    })
    .await;
    match exported {
        Ok(bytes) => xlsx_download(correlation_id, bytes),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /workbook/sheets`: lists the sheets of an upload.
async fn workbook_sheets_handler(body: Bytes) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Listing workbook sheets"
    );

    match run_blocking(move || sheet_names(&body)).await {
        Ok(sheets) => json_ok(SheetsResponse { sheets }),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /workbook/report`: `.xlsx` in, JSON report out.
async fn workbook_report_handler(
    State(state): State<AppState>,
    Query(query): Query<WorkbookQuery>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        sheet = query.sheet.as_deref().unwrap_or("<first>"),
        "Processing workbook report request"
    );

    let report = run_blocking(move || {
        read_sheet(&body, query.sheet.as_deref())
            .and_then(|table| {
                build_report(correlation_id, &table, &query.holidays, state.config())
            })
    })
    .await;
    match report {
        Ok(report) => json_report(correlation_id, report),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /workbook/export`: `.xlsx` in, report `.xlsx` out.
async fn workbook_export_handler(
    State(state): State<AppState>,
    Query(query): Query<WorkbookQuery>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        sheet = query.sheet.as_deref().unwrap_or("<first>"),
        "Processing workbook export request"
    );

    let exported = run_blocking(move || {
        read_sheet(&body, query.sheet.as_deref())
            .and_then(|table| {
                build_report(correlation_id, &table, &query.holidays, state.config())
            })
            .and_then(|report| export_report(&report))
    })
    .await;
    match exported {
        Ok(bytes) => xlsx_download(correlation_id, bytes),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Runs spreadsheet parsing, aggregation and export on the blocking pool so
/// a large upload never holds an async worker thread.
async fn run_blocking<T, F>(work: F) -> ReportResult<T>
where
    F: FnOnce() -> ReportResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| ReportError::WorkerFailed {
            message: err.to_string(),
        })?
}

fn build_report(
    correlation_id: Uuid,
    table: &WideTable,
    holidays: &str,
    config: &ReportConfig,
) -> ReportResult<SummaryReport> {
    let start_time = Instant::now();
    let report = run_report(table, holidays, config)?;
    info!(
        correlation_id = %correlation_id,
        employees = report.union.len(),
        period = %report.period,
        duration_us = start_time.elapsed().as_micros(),
        "Report completed successfully"
    );
    Ok(report)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn json_report(correlation_id: Uuid, report: SummaryReport) -> Response {
    json_ok(ReportResponse {
        correlation_id,
        period_label: report.period.to_string(),
        report,
    })
}

fn xlsx_download(correlation_id: Uuid, bytes: Vec<u8>) -> Response {
    info!(
        correlation_id = %correlation_id,
        bytes = bytes.len(),
        "Sending report workbook"
    );
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
            ),
        ],
        bytes,
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: ReportError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Report failed"
    );
    let api_error: ApiErrorResponse = err.into();
    api_error.into_response()
}

fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        crate::logging::init_test();
        let config = ConfigLoader::from_config(ReportConfig::new(["Nombre", "RUT"], "L"))
            .expect("Failed to build config");
        AppState::new(config)
    }

    fn valid_body() -> String {
        r#"{
            "table": {
                "columns": ["Nombre", "RUT", "2026-01-04", "2026-01-05", "2026-01-01"],
                "rows": [["Ana", "1-9", "M1", "L", "M1"]]
            },
            "holidays": "01-01-2026"
        }"#
        .to_string()
    }

    async fn post_json(uri: &str, body: String) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn read_body(response: Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_report_returns_200() {
        let response = post_json("/report", valid_body()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let result: ReportResponse = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(result.period_label, "01-01-2026 a 05-01-2026");
        assert_eq!(result.report.sunday[0].dates, "04-01-2026");
        assert_eq!(result.report.holiday[0].dates, "01-01-2026");
        assert_eq!(result.report.union[0].total_count, 2);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post_json("/report", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_table_returns_validation_error() {
        let response = post_json("/report", r#"{"holidays": ""}"#.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_invalid_holiday_returns_400_with_token() {
        let body = valid_body().replace("01-01-2026\"", "31-02-2026\"");
        let response = post_json("/report", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "INVALID_HOLIDAY_DATE");
        assert!(error.message.contains("31-02-2026"));
    }

    #[tokio::test]
    async fn test_report_export_is_xlsx_download() {
        let response = post_json("/report/export", valid_body()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            XLSX_MIME_TYPE
        );
        let disposition = response
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains(REPORT_FILE_NAME));

        let body = read_body(response).await;
        // xlsx files are zip archives.
        assert!(body.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_run_blocking_returns_worker_result() {
        let value = run_blocking(|| Ok::<_, ReportError>(41 + 1)).await.unwrap();
        assert_eq!(value, 42);

        let result = run_blocking(|| Err::<(), _>(ReportError::NoDateColumnsFound)).await;
        assert!(matches!(result, Err(ReportError::NoDateColumnsFound)));
    }

    #[tokio::test]
    async fn test_run_blocking_maps_panic_to_worker_failure() {
        let result = run_blocking(|| -> ReportResult<()> { panic!("reader crashed") }).await;
        let err = result.unwrap_err();
        assert!(matches!(err, ReportError::WorkerFailed { .. }));

        let response = error_response(Uuid::new_v4(), err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_error_response_is_json() {
        let response = post_json("/report", valid_body().replace("2026-01-0", "col-")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_workbook_sheets_rejects_garbage() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/workbook/sheets")
                    .body(Body::from("not a workbook"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "WORKBOOK_ERROR");
    }
}
