//! Trigger analysis orchestration shared by the page and JSON handlers.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{info, warn};

use asmr_gemini::AnalysisClient;
use asmr_models::{extract_youtube_id, AnalysisResult, GroundingStrategy};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::security::{sanitize_for_log, validate_video_url};

/// Message returned while another analysis is running.
pub const BUSY_MESSAGE: &str =
    "An analysis is already in progress. Please wait for it to finish.";

/// Keeps at most one analysis in flight.
#[derive(Clone)]
pub struct AnalysisGate {
    permits: Arc<Semaphore>,
}

impl Default for AnalysisGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisGate {
    pub fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    /// Claim the gate; `None` while another analysis holds it.
    pub fn try_enter(&self) -> Option<OwnedSemaphorePermit> {
        Arc::clone(&self.permits).try_acquire_owned().ok()
    }

    pub fn is_busy(&self) -> bool {
        self.permits.available_permits() == 0
    }
}

/// A finished analysis with the video it was run against.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub url: String,
    pub video_id: String,
    pub strategy: GroundingStrategy,
    pub result: AnalysisResult,
}

/// Validates the URL, holds the gate and runs the client.
#[derive(Clone)]
pub struct AnalysisService {
    client: AnalysisClient,
    gate: AnalysisGate,
}

impl AnalysisService {
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            gate: AnalysisGate::new(),
        }
    }

    pub fn gate(&self) -> &AnalysisGate {
        &self.gate
    }

    pub fn strategy(&self) -> GroundingStrategy {
        self.client.strategy()
    }

    /// Analyze the video at `raw_url`.
    pub async fn analyze(&self, raw_url: &str) -> ApiResult<AnalysisOutcome> {
        let url = validate_video_url(raw_url)
            .into_result()
            .map_err(ApiError::bad_request)?;
        let video_id =
            extract_youtube_id(&url).map_err(|e| ApiError::bad_request(e.to_string()))?;

        let Some(_permit) = self.gate.try_enter() else {
            warn!(video_id = %video_id, "Rejected analysis while another is running");
            metrics::record_busy_rejection();
            return Err(ApiError::conflict(BUSY_MESSAGE));
        };

        let strategy = self.client.strategy();
        info!(
            url = %sanitize_for_log(&url),
            video_id = %video_id,
            strategy = %strategy,
            "Starting trigger analysis"
        );

        let start = Instant::now();
        let analysis = self.client.analyze(&url).await;
        metrics::record_analysis(
            strategy.as_str(),
            analysis.is_ok(),
            start.elapsed().as_secs_f64(),
        );

        let result = analysis?;
        metrics::record_triggers_found(result.triggers.len());

        Ok(AnalysisOutcome {
            url,
            video_id,
            strategy,
            result,
        })
    }
}
