//! Application state for the Vacation Alert Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded service configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the service configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
