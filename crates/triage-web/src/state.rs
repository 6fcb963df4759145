//! Application state management

use crate::api_client::ApiClient;
use triage_core::Config;

/// Application state holding configuration and the backend client.
///
/// Read-only after startup; every page view performs fresh fetches through
/// the shared client.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Client for the triage backend API
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(config: Config) -> Self {
        let api_client = ApiClient::new(config.backend.base_url.clone());

        Self { config, api_client }
    }
}
