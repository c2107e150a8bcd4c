//! JSON analysis endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use asmr_models::youtube::{embed_url, watch_url};
use asmr_models::{trigger_list_schema, GroundingStrategy, WebSource};

use crate::error::ApiResult;
use crate::services::AnalysisOutcome;
use crate::state::AppState;
use crate::views::TriggerView;

/// Request to analyze a video.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// YouTube URL to analyze
    pub url: String,
}

/// Triggers found in a video, resolved to deep links.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub video_id: String,
    pub video_url: String,
    pub embed_url: String,
    pub strategy: GroundingStrategy,
    pub triggers: Vec<TriggerView>,
    /// Only sources carrying both a URI and a title.
    pub sources: Vec<WebSource>,
}

impl From<AnalysisOutcome> for AnalyzeResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        let sources = outcome
            .result
            .renderable_sources()
            .filter_map(|s| s.link())
            .map(|(uri, title)| WebSource {
                uri: Some(uri.to_string()),
                title: Some(title.to_string()),
            })
            .collect();

        Self {
            video_url: watch_url(&outcome.video_id),
            embed_url: embed_url(&outcome.video_id),
            strategy: outcome.strategy,
            triggers: TriggerView::from_triggers(&outcome.result.triggers, &outcome.video_id),
            sources,
            video_id: outcome.video_id,
        }
    }
}

/// Run a trigger analysis and return the result as JSON.
///
/// Returns 400 for a non-YouTube URL, 409 while another analysis is
/// running and 502 when the model call fails.
pub async fn analyze_video(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let outcome = state.analysis.analyze(&request.url).await?;
    Ok(Json(outcome.into()))
}

/// JSON Schema of the trigger array the model is asked for.
pub async fn trigger_schema() -> impl IntoResponse {
    Json(trigger_list_schema())
}
