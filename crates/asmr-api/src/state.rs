//! Application state.

use asmr_gemini::AnalysisClient;

use crate::config::ApiConfig;
use crate::services::AnalysisService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub analysis: AnalysisService,
}

impl AppState {
    /// Create application state around an explicitly constructed client.
    pub fn new(config: ApiConfig, client: AnalysisClient) -> Self {
        Self {
            config,
            analysis: AnalysisService::new(client),
        }
    }
}
