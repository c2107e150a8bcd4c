//! Axum web server for the ASMR trigger finder.
//!
//! This crate provides:
//! - A server-rendered page for submitting a video and browsing its triggers
//! - A JSON analysis endpoint
//! - Single-flight analysis gating
//! - Security headers and Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod security;
pub mod services;
pub mod state;
pub mod views;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{AnalysisGate, AnalysisService};
pub use state::AppState;
