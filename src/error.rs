use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Message shown to the user when a requested title is not in the catalog
pub const MOVIE_NOT_FOUND_MESSAGE: &str =
    "Movie not found. Please select a valid movie from the list.";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to load artifact {path}: {reason}")]
    Artifact { path: String, reason: String },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

}

impl AppError {
    /// Not-found error carrying the user-facing message
    pub fn movie_not_found() -> Self {
        AppError::NotFound(MOVIE_NOT_FOUND_MESSAGE.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Artifact { .. } | AppError::DimensionMismatch(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Reasons a metadata lookup can fail
///
/// These never reach API callers: providers log them and substitute fallback values.
#[derive(thiserror::Error, Debug)]
pub enum MetadataError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl MetadataError {
    /// Short label used as a structured logging field
    pub fn kind(&self) -> &'static str {
        match self {
            MetadataError::Transport(e) if e.is_timeout() => "timeout",
            MetadataError::Transport(_) => "transport",
            MetadataError::Status(_) => "status",
            MetadataError::Malformed(_) => "malformed",
        }
    }
}
