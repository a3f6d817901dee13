//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the report
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, ReportResult};

use super::types::ReportConfig;

/// Loads and provides access to the report configuration.
///
/// The configuration file is a single YAML document:
/// ```text
/// metadata_columns:
///   - Nombre del Colaborador
///   - RUT
///   - Área
///   - Supervisor
/// absence_code: L
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/report.yaml").unwrap();
/// println!("Absence code: {}", loader.config().absence_code);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable ([`ReportError::ConfigNotFound`])
    /// - The file contains invalid YAML ([`ReportError::ConfigParseError`])
    /// - The values fail validation ([`ReportError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            metadata_columns = config.metadata_columns.len(),
            absence_code = %config.absence_code,
            "Loaded report configuration"
        );

        Ok(Self { config })
    }

    /// Builds a loader from an already constructed configuration.
    pub fn from_config(config: ReportConfig) -> ReportResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> ReportResult<ReportConfig> {
        let config: ReportConfig =
            serde_yaml::from_str(content).map_err(|e| ReportError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ReportConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/report.yaml"
    }

    #[test]
    fn test_load_repository_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().absence_code, "L");
        assert_eq!(loader.config().metadata_columns[0], "Nombre del Colaborador");
        assert_eq!(loader.config().metadata_columns[3], "Supervisor");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/report.yaml");

        match result {
            Err(ReportError::ConfigNotFound { path }) => {
                assert!(path.contains("report.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::parse("metadata_columns: [unclosed", "inline.yaml");

        match result {
            Err(ReportError::ConfigParseError { path, .. }) => assert_eq!(path, "inline.yaml"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_runs_validation() {
        let result = ConfigLoader::parse("metadata_columns: []\n", "inline.yaml");
        assert!(matches!(result, Err(ReportError::InvalidConfig { .. })));
    }

    #[test]
    fn test_parse_custom_columns() {
        let yaml = "metadata_columns:\n  - Name\n  - Id\nabsence_code: OFF\n";
        let config = ConfigLoader::parse(yaml, "inline.yaml").unwrap();
        assert_eq!(config.metadata_columns, vec!["Name", "Id"]);
        assert_eq!(config.absence_code, "OFF");
    }

    #[test]
    fn test_from_config_validates() {
        let bad = ReportConfig::new(["Name"], "");
        assert!(ConfigLoader::from_config(bad).is_err());
        assert!(ConfigLoader::from_config(ReportConfig::default()).is_ok());
    }
}
