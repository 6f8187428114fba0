use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Failure of a flight-data or weather collaborator.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("status code {0}")]
    Status(u16),

    #[error("{0}")]
    Api(String),

    #[error("request failed: {0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for LookupError {
    // Request URLs carry API keys in the query string.
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.without_url())
    }
}
