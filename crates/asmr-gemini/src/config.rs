//! Gemini client configuration.

use asmr_models::GroundingStrategy;

use crate::error::ConfigError;
use crate::transport::SAFETY_THRESHOLDS;

/// Default model for trigger analysis.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API credential
    pub api_key: String,
    /// Model name
    pub model: String,
    /// API root, overridable for tests and proxies
    pub base_url: String,
    /// How the model gathers evidence
    pub strategy: GroundingStrategy,
    /// Threshold applied to every harm category, if overridden
    pub safety_threshold: Option<String>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("strategy", &self.strategy)
            .field("safety_threshold", &self.safety_threshold)
            .finish()
    }
}

impl GeminiConfig {
    /// Config with defaults for everything but the credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            strategy: GroundingStrategy::default(),
            safety_threshold: None,
        }
    }

    /// Create config from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; `GEMINI_MODEL`, `GEMINI_BASE_URL`,
    /// `GROUNDING_STRATEGY` and `GEMINI_SAFETY_THRESHOLD` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = non_empty("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let strategy = match non_empty("GROUNDING_STRATEGY") {
            Some(s) => s.parse()?,
            None => GroundingStrategy::default(),
        };

        let safety_threshold = match non_empty("GEMINI_SAFETY_THRESHOLD") {
            Some(t) => {
                let t = t.to_uppercase();
                if !SAFETY_THRESHOLDS.contains(&t.as_str()) {
                    return Err(ConfigError::InvalidSafetyThreshold(t));
                }
                Some(t)
            }
            None => None,
        };

        Ok(Self {
            api_key,
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            strategy,
            safety_threshold,
        })
    }
}
