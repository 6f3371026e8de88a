use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::tmdb::TmdbError;

/// Errors returned by the HTTP handlers.
///
/// Movie endpoints answer `{"error": "..."}`; favorites endpoints answer
/// `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Message { status: StatusCode, message: String },
    #[error("{code}: {message}")]
    Coded {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
    #[error(transparent)]
    Upstream(#[from] TmdbError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::Message {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::Message {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn invalid_request() -> Self {
        ApiError::Coded {
            status: StatusCode::BAD_REQUEST,
            code: "INVALID_REQUEST",
            message: "movie_id is required".to_string(),
        }
    }

    pub fn already_exists() -> Self {
        ApiError::Coded {
            status: StatusCode::BAD_REQUEST,
            code: "ALREADY_EXISTS",
            message: "Movie already in favorites".to_string(),
        }
    }

    pub fn favorite_not_found() -> Self {
        ApiError::Coded {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: "Favorite not found".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Message { status, message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Coded {
                status,
                code,
                message,
            } => (
                status,
                Json(json!({ "error": { "code": code, "message": message } })),
            )
                .into_response(),
            ApiError::Upstream(e) => {
                error!(error = %e, "Upstream request failed");
                let message = if e.is_public() {
                    e.to_string()
                } else {
                    "Internal server error".to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}
