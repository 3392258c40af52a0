//! API service routes

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    models::FeedRequest,
    state::AppState,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/youtube", post(fetch_feed_page))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "feed-api"
    }))
}

/// Fetch one enriched feed page
///
/// An empty body is the same as `{}` and starts from the first page.
pub async fn fetch_feed_page(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let request = parse_request(&body)?;

    let page = state
        .aggregator
        .fetch_page(request.cursor.as_deref())
        .await
        .map_err(|e| {
            error!("Failed to fetch feed page: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(page))
}

fn parse_request(body: &[u8]) -> ApiResult<FeedRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FeedRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}
