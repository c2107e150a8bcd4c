//! Shared data models for the ASMR trigger finder.
//!
//! This crate provides:
//! - Trigger and grounding source types
//! - Timestamp parsing and formatting
//! - Validation of raw model output
//! - YouTube video ID extraction and player URLs
//! - Grounding strategies

pub mod strategy;
pub mod timestamp;
pub mod trigger;
pub mod validator;
pub mod youtube;

// Re-export common types
pub use strategy::{GroundingStrategy, GroundingStrategyParseError};
pub use timestamp::{
    format_seconds_to_timestamp, parse_timestamp_to_seconds, try_parse_timestamp, TimestampError,
};
pub use trigger::{
    trigger_list_schema, AnalysisResult, GroundingSource, Trigger, TriggerTimestamp, WebSource,
};
pub use validator::{validate_triggers, FormatError};
pub use youtube::{extract_youtube_id, YoutubeIdError, YoutubeIdResult};
