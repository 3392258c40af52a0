//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::FeedError;
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Feed error
    #[error(transparent)]
    Feed(#[from] FeedError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Feed(FeedError::Configuration(msg)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Feed(FeedError::Upstream { status, message }) => (
                StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| !s.is_success())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            ApiError::Feed(e @ FeedError::InvalidSortMode(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
