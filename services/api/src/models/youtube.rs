//! Wire models for the upstream catalog and detail endpoints

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response of the catalog (`playlistItems`) call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

/// One base entry of the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// Preferred thumbnail URL: medium, then high, then default
    pub fn best_url(&self) -> String {
        [&self.medium, &self.high, &self.default]
            .into_iter()
            .flatten()
            .map(|t| t.url.clone())
            .next()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
}

impl PlaylistItem {
    /// Internal video id, if the entry carries a usable one
    pub fn video_id(&self) -> Option<&str> {
        self.snippet
            .resource_id
            .as_ref()
            .and_then(|r| r.video_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// Response of the detail (`videos`) call
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoDetail>,
}

/// Enrichment record for one video
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    pub id: String,
    pub content_details: Option<ContentDetails>,
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// View count as a numeric string
    pub view_count: Option<String>,
}

impl VideoDetail {
    pub fn raw_duration(&self) -> Option<&str> {
        self.content_details
            .as_ref()
            .and_then(|c| c.duration.as_deref())
    }

    pub fn view_count(&self) -> Option<u64> {
        self.statistics
            .as_ref()
            .and_then(|s| s.view_count.as_deref())
            .and_then(|v| v.trim().parse().ok())
    }
}

/// Error body returned by the upstream on non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
