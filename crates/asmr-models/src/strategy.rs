//! Grounding strategies for trigger analysis.
//!
//! A strategy decides how the model is told to gather evidence:
//!
//! - `SearchGrounded`: web search for the description, comments and transcripts
//! - `DirectVideo`: the model ingests the video itself
//! - `SearchOnly`: web search, with the model told it cannot watch or listen

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the model obtains evidence for the triggers it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GroundingStrategy {
    /// Web search over text describing the video.
    #[default]
    SearchGrounded,

    /// Video file attached to the request.
    DirectVideo,

    /// Web search only; the model disclaims watching the video.
    SearchOnly,
}

impl GroundingStrategy {
    /// All available strategies.
    pub const ALL: &'static [GroundingStrategy] = &[
        GroundingStrategy::SearchGrounded,
        GroundingStrategy::DirectVideo,
        GroundingStrategy::SearchOnly,
    ];

    /// Returns the strategy name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroundingStrategy::SearchGrounded => "search_grounded",
            GroundingStrategy::DirectVideo => "direct_video",
            GroundingStrategy::SearchOnly => "search_only",
        }
    }

    /// Returns true if the web search tool is enabled for this strategy.
    pub fn uses_search(&self) -> bool {
        matches!(
            self,
            GroundingStrategy::SearchGrounded | GroundingStrategy::SearchOnly
        )
    }

    /// Returns true if the video itself is attached to the request.
    pub fn attaches_video(&self) -> bool {
        matches!(self, GroundingStrategy::DirectVideo)
    }
}

impl fmt::Display for GroundingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GroundingStrategy {
    type Err = GroundingStrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "search_grounded" | "search" => Ok(GroundingStrategy::SearchGrounded),
            "direct_video" | "video" => Ok(GroundingStrategy::DirectVideo),
            "search_only" => Ok(GroundingStrategy::SearchOnly),
            _ => Err(GroundingStrategyParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown grounding strategy '{0}'. Use search_grounded, direct_video or search_only")]
pub struct GroundingStrategyParseError(pub String);
