//! The request/response boundary to the generative model.
//!
//! [`ModelTransport`] is the seam between trigger analysis and the network.
//! Production code uses [`crate::GeminiTransport`]; tests plug in their own.

use async_trait::async_trait;
use serde::Serialize;

use asmr_models::GroundingSource;

use crate::error::TransportResult;

/// Harm categories that accept a threshold override.
pub const HARM_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Thresholds accepted for a harm category.
pub const SAFETY_THRESHOLDS: &[&str] = &[
    "BLOCK_NONE",
    "BLOCK_ONLY_HIGH",
    "BLOCK_MEDIUM_AND_ABOVE",
    "BLOCK_LOW_AND_ABOVE",
    "OFF",
];

/// Safety threshold override for one harm category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    /// Apply the same threshold to every harm category.
    pub fn for_all_categories(threshold: &str) -> Vec<SafetySetting> {
        HARM_CATEGORIES
            .iter()
            .map(|category| SafetySetting {
                category: category.to_string(),
                threshold: threshold.to_string(),
            })
            .collect()
    }
}

/// What is sent to the model for one analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateRequest {
    /// Instruction prompt
    pub prompt: String,
    /// Video the model should ingest directly
    pub video_uri: Option<String>,
    /// Enable the web search tool
    pub enable_search: bool,
    /// Per-category safety overrides
    pub safety_settings: Vec<SafetySetting>,
    /// Ask for a JSON MIME type (not allowed together with search)
    pub json_response: bool,
}

/// What the model sent back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateResponse {
    /// Concatenated text of the first candidate
    pub text: String,
    /// Grounding chunks of the first candidate
    pub sources: Vec<GroundingSource>,
}

/// A way of getting a [`GenerateResponse`] for a [`GenerateRequest`].
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Name for logging.
    fn name(&self) -> &'static str;

    /// Run one generation request.
    async fn generate(&self, request: &GenerateRequest) -> TransportResult<GenerateResponse>;
}
