//! HTML page handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::{render_page, PageState};

/// Form submitted from the page.
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub url: String,
}

/// Render the empty page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = PageState {
        busy: state.analysis.gate().is_busy(),
        ..PageState::empty()
    };
    Html(render_page(&page))
}

/// Analyze the submitted URL and render the page with the outcome.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> (StatusCode, Html<String>) {
    let (status, page) = match state.analysis.analyze(&form.url).await {
        Ok(outcome) => (StatusCode::OK, PageState::with_outcome(outcome)),
        Err(e @ ApiError::Conflict(_)) => (
            e.status_code(),
            PageState {
                url: form.url,
                busy: true,
                ..PageState::empty()
            },
        ),
        Err(e) => (e.status_code(), PageState::with_error(form.url, e.detail())),
    };

    (status, Html(render_page(&page)))
}
