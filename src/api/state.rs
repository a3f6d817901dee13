//! Application state shared by the request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, ReportConfig};

/// Shared application state.
///
/// Holds the report configuration loaded at startup. It is read-only for
/// the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the report configuration.
    pub fn config(&self) -> &ReportConfig {
        self.config.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_config() {
        let config = ReportConfig::new(["Nombre"], "X");
        let state = AppState::new(ConfigLoader::from_config(config).unwrap());
        let clone = state.clone();
        assert_eq!(clone.config().absence_code, "X");
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
