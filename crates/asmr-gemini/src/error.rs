//! Gemini client error types.

use asmr_models::{FormatError, GroundingStrategyParseError};
use thiserror::Error;

/// Message shown to callers for every failed analysis.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to get triggers from Gemini API.";

/// Result type for transport calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures talking to the model service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Gemini API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse Gemini response: {0}")]
    Decode(String),

    #[error("No content in Gemini response ({0})")]
    EmptyResponse(String),
}

impl TransportError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn empty_response(msg: impl Into<String>) -> Self {
        Self::EmptyResponse(msg.into())
    }
}

/// Cause of a failed analysis. Logged, never returned to callers.
#[derive(Debug, Error)]
pub(crate) enum AnalysisFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Error returned by [`crate::AnalysisClient::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Failed to get triggers from Gemini API.")]
    Failed,
}

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY not configured")]
    MissingApiKey,

    #[error(transparent)]
    InvalidStrategy(#[from] GroundingStrategyParseError),

    #[error("Unknown safety threshold '{0}'")]
    InvalidSafetyThreshold(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
