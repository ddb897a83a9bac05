//! Application state for the Planilla Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::RateConfiguration;

/// Shared application state.
///
/// Holds the session rate configuration, if one was loaded at startup.
#[derive(Clone, Default)]
pub struct AppState {
    config: Option<Arc<ConfigLoader>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Some(Arc::new(config)),
        }
    }

    /// Creates a state without session rates; requests must carry their own.
    pub fn without_session_rates() -> Self {
        Self::default()
    }

    /// Returns the session rate configuration, if any.
    pub fn session_rates(&self) -> Option<&RateConfiguration> {
        self.config.as_deref().map(ConfigLoader::rates)
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
    fn test_state_without_session_rates() {
        assert!(AppState::without_session_rates().session_rates().is_none());
    }

    #[test]
    fn test_state_exposes_loaded_rates() {
        let config = ConfigLoader::load("./config/planilla").unwrap();
        let expected = config.rates().clone();
        let state = AppState::new(config);

        assert_eq!(state.session_rates(), Some(&expected));
    }
}
