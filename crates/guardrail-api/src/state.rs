//! Application state shared across all handlers.

use std::sync::Arc;

use guardrail_core::config::AppConfig;
use guardrail_service::GuardrailHandler;

/// Shared application state. Cloned per request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Classify-and-revoke pipeline.
    pub guardrail: GuardrailHandler,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: AppConfig, guardrail: GuardrailHandler) -> Self {
        Self {
            config: Arc::new(config),
            guardrail,
        }
    }
}
