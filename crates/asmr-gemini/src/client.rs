//! Trigger analysis client.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use asmr_models::{validate_triggers, AnalysisResult, GroundingStrategy};

use crate::config::GeminiConfig;
use crate::error::{AnalysisError, AnalysisFailure, ConfigError};
use crate::gemini::GeminiTransport;
use crate::prompt::build_trigger_prompt;
use crate::transport::{GenerateRequest, ModelTransport, SafetySetting};

/// Asks a model for the ASMR triggers in a video.
#[derive(Clone)]
pub struct AnalysisClient {
    transport: Arc<dyn ModelTransport>,
    strategy: GroundingStrategy,
    safety_settings: Vec<SafetySetting>,
}

impl AnalysisClient {
    /// Create a client over any transport.
    pub fn new(transport: Arc<dyn ModelTransport>, strategy: GroundingStrategy) -> Self {
        Self {
            transport,
            strategy,
            safety_settings: Vec::new(),
        }
    }

    /// Create a client backed by the Gemini API.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ConfigError> {
        let transport = GeminiTransport::new(config)?;
        let mut client = Self::new(Arc::new(transport), config.strategy);
        if let Some(threshold) = config.safety_threshold.as_deref() {
            client = client.with_safety_settings(SafetySetting::for_all_categories(threshold));
        }
        Ok(client)
    }

    /// Override safety thresholds on every request.
    pub fn with_safety_settings(mut self, settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = settings;
        self
    }

    pub fn strategy(&self) -> GroundingStrategy {
        self.strategy
    }

    /// Build the model request for `url`.
    pub fn build_request(&self, url: &str) -> GenerateRequest {
        GenerateRequest {
            prompt: build_trigger_prompt(self.strategy, url),
            video_uri: self.strategy.attaches_video().then(|| url.to_string()),
            enable_search: self.strategy.uses_search(),
            safety_settings: self.safety_settings.clone(),
            json_response: self.strategy.attaches_video(),
        }
    }

    /// Analyze a video and return its validated triggers and sources.
    ///
    /// Every failure is logged and reported as [`AnalysisError::Failed`].
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let start = Instant::now();

        match self.run(url).await {
            Ok(result) => {
                info!(
                    strategy = %self.strategy,
                    transport = self.transport.name(),
                    triggers = result.triggers.len(),
                    sources = result.sources.len(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Trigger analysis completed"
                );
                Ok(result)
            }
            Err(e) => {
                error!(
                    strategy = %self.strategy,
                    transport = self.transport.name(),
                    error = %e,
                    "Error calling Gemini API"
                );
                Err(AnalysisError::Failed)
            }
        }
    }

    async fn run(&self, url: &str) -> Result<AnalysisResult, AnalysisFailure> {
        let request = self.build_request(url);
        let response = self.transport.generate(&request).await?;
        let triggers = validate_triggers(&response.text)?;

        Ok(AnalysisResult {
            triggers,
            sources: response.sources,
        })
    }
}
