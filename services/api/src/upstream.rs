//! HTTP client for the upstream catalog and detail endpoints
//!
//! Both calls share one `reqwest` client, so the configured timeout bounds
//! each of them. Transport errors are stripped of their URL before they are
//! turned into messages, since the URL carries the API key.

use anyhow::Result;
use common::{FeedError, FeedResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::models::youtube::{ErrorResponse, PlaylistItemsResponse, VideoListResponse};

/// Client for the catalog service
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch one page of base entries of a playlist
    pub async fn playlist_items(
        &self,
        api_key: &str,
        playlist_id: &str,
        page_size: u32,
        cursor: Option<&str>,
    ) -> FeedResult<PlaylistItemsResponse> {
        let url = format!("{}/playlistItems", self.base_url);
        let max_results = page_size.to_string();
        debug!("Requesting playlist page (cursor: {:?})", cursor);

        let mut request = self.client.get(&url).query(&[
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
            ("key", api_key),
        ]);

        if let Some(cursor) = cursor {
            request = request.query(&[("pageToken", cursor)]);
        }

        let response = request.send().await.map_err(transport_error)?;
        read_json(response).await
    }

    /// Fetch duration and statistics for a batch of video ids in one call
    pub async fn video_details(
        &self,
        api_key: &str,
        video_ids: &[&str],
    ) -> FeedResult<VideoListResponse> {
        let url = format!("{}/videos", self.base_url);
        let ids = video_ids.join(",");
        debug!("Requesting details for {} videos", video_ids.len());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "contentDetails,statistics"),
                ("id", ids.as_str()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        read_json(response).await
    }
}

/// Decode a success body, or turn a failure status into an upstream error
async fn read_json<T: DeserializeOwned>(response: Response) -> FeedResult<T> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.error)
            .and_then(|error| error.message);
        return Err(FeedError::upstream(status.as_u16(), message));
    }

    response.json::<T>().await.map_err(transport_error)
}

fn transport_error(error: reqwest::Error) -> FeedError {
    let status = error
        .status()
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        .as_u16();
    FeedError::upstream(status, Some(error.without_url().to_string()))
}
