use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid request parameters
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// API error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, details) = match &self {
            AppError::BadRequest(msg) => (msg.clone(), None),
            other => {
                tracing::error!("{}", other);
                (
                    "Internal server error".to_string(),
                    Some(other.to_string()),
                )
            }
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

impl From<lookup::LookupError> for AppError {
    fn from(e: lookup::LookupError) -> Self {
        match e {
            lookup::LookupError::EmptyTerm => AppError::BadRequest(e.to_string()),
        }
    }
}

/// Convenience alias
pub type AppResult<T> = Result<T, AppError>;
