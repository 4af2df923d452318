//! Application state shared by all handlers.

use std::sync::Arc;

use textproc_core::Locale;

use crate::config::ServerConfig;

/// Shared, immutable application state.
///
/// Handlers hold no mutable state; each request is answered from the
/// configured locale alone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }

    /// State with default configuration and the given locale (for testing).
    pub fn with_locale(locale: Locale) -> Self {
        Self::new(ServerConfig {
            locale,
            ..ServerConfig::default()
        })
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }
}
