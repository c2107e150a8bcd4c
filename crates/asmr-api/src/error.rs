//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use asmr_gemini::AnalysisError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0}")]
    Upstream(#[from] AnalysisError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message safe to show to the user.
    pub fn detail(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::Conflict(msg) => msg.clone(),
            ApiError::Upstream(e) => e.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::from(AnalysisError::Failed).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_detail_carries_no_prefix() {
        let conflict = ApiError::conflict("An analysis is already in progress.");
        assert_eq!(conflict.detail(), "An analysis is already in progress.");
        assert_eq!(conflict.to_string(), "Conflict: An analysis is already in progress.");
    }

    #[test]
    fn test_upstream_detail_is_generic() {
        assert_eq!(
            ApiError::from(AnalysisError::Failed).detail(),
            "Failed to get triggers from Gemini API."
        );
        assert_eq!(ApiError::bad_request("URL cannot be empty").detail(), "URL cannot be empty");
    }
}
