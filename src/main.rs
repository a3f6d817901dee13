//! Attendance report HTTP server.
//!
//! Environment:
//! - `REPORT_CONFIG`: YAML configuration path (default `./config/report.yaml`)
//! - `REPORT_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

use attendance_report::api::{AppState, create_router};
use attendance_report::config::{ConfigLoader, ReportConfig};
use attendance_report::error::ReportError;
use attendance_report::logging;

const DEFAULT_CONFIG_PATH: &str = "./config/report.yaml";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ReportError),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn load_config() -> Result<ConfigLoader, ReportError> {
    let path = env::var("REPORT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if Path::new(&path).exists() {
        ConfigLoader::load(&path)
    } else {
        warn!(path = %path, "Configuration file not found, using defaults");
        ConfigLoader::from_config(ReportConfig::default())
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    logging::init();

    let loader = load_config()?;
    info!(
        metadata_columns = ?loader.config().metadata_columns,
        absence_code = %loader.config().absence_code,
        "Report configuration ready"
    );

    let addr = env::var("REPORT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "Attendance report server listening");

    let app = create_router(AppState::new(loader));
    axum::serve(listener, app).await?;
    Ok(())
}
