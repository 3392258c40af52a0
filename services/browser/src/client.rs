//! Client for the aggregation endpoint

use anyhow::Result;
use common::{FeedError, FeedPage, FeedResult};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Error body returned by the aggregation endpoint
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Fetches enriched pages from the API service
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    endpoint: String,
}

impl FeedClient {
    /// Create a new client for the given endpoint URL
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetch one page, continuing from `cursor` when given
    pub async fn fetch_page(&self, cursor: Option<&str>) -> FeedResult<FeedPage> {
        let body = match cursor {
            Some(cursor) => json!({ "cursor": cursor }),
            None => json!({}),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(FeedError::upstream(status.as_u16(), message));
        }

        response.json::<FeedPage>().await.map_err(request_error)
    }
}

fn request_error(error: reqwest::Error) -> FeedError {
    let status = error
        .status()
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        .as_u16();
    FeedError::upstream(status, Some(error.to_string()))
}
