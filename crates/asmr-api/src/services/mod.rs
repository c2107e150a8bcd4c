//! Business logic services.

pub mod analysis;

pub use analysis::{AnalysisGate, AnalysisOutcome, AnalysisService, BUSY_MESSAGE};
