//! Gemini client for ASMR trigger analysis.
//!
//! This crate provides:
//! - Prompt construction for each grounding strategy
//! - A substitutable model transport with a Gemini implementation
//! - `AnalysisClient`, which turns a video URL into validated triggers

pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod transport;

pub use client::AnalysisClient;
pub use config::GeminiConfig;
pub use error::{
    AnalysisError, ConfigError, TransportError, TransportResult, ANALYSIS_FAILED_MESSAGE,
};
pub use gemini::GeminiTransport;
pub use prompt::build_trigger_prompt;
pub use transport::{GenerateRequest, GenerateResponse, ModelTransport, SafetySetting};
