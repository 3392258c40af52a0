//! Feed aggregation: one catalog page enriched with video details
//!
//! A page is built in three sequential stages: the catalog call, the batched
//! detail call (which needs the ids from the first), and the merge. Only the
//! catalog call can fail the page; a failed detail call degrades the page to
//! unenriched entries.

use common::{FeedEntry, FeedError, FeedPage, FeedResult, decode};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::{
    config::ApiConfig,
    models::youtube::{PlaylistItem, VideoDetail},
    upstream::CatalogClient,
};

/// Builds enriched feed pages from the upstream services
#[derive(Debug, Clone)]
pub struct FeedAggregator {
    upstream: CatalogClient,
    playlist_id: String,
    page_size: u32,
    api_key: Option<String>,
}

impl FeedAggregator {
    /// Create a new aggregator
    pub fn new(upstream: CatalogClient, config: &ApiConfig) -> Self {
        Self {
            upstream,
            playlist_id: config.playlist_id.clone(),
            page_size: config.page_size,
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch one enriched page, starting at `cursor` when given
    pub async fn fetch_page(&self, cursor: Option<&str>) -> FeedResult<FeedPage> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(FeedError::missing_api_key)?;

        let base = self
            .upstream
            .playlist_items(api_key, &self.playlist_id, self.page_size, cursor)
            .await?;

        if base.items.is_empty() {
            info!("Playlist page is empty");
            return Ok(FeedPage::empty());
        }

        let video_ids = collect_video_ids(&base.items);
        let details = if video_ids.is_empty() {
            None
        } else {
            match self.upstream.video_details(api_key, &video_ids).await {
                Ok(response) => Some(index_details(response.items)),
                Err(e) => {
                    warn!(
                        "Video details unavailable, serving {} entries unenriched: {}",
                        base.items.len(),
                        e
                    );
                    None
                }
            }
        };

        let entries = merge(base.items, details.as_ref());
        info!(
            "Fetched page with {} entries (more: {})",
            entries.len(),
            base.next_page_token.is_some()
        );

        Ok(FeedPage {
            entries,
            next_cursor: base.next_page_token,
        })
    }
}

/// Video ids of the base entries, in order and without duplicates
fn collect_video_ids(items: &[PlaylistItem]) -> Vec<&str> {
    let mut ids: Vec<&str> = Vec::with_capacity(items.len());
    for id in items.iter().filter_map(PlaylistItem::video_id) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

fn index_details(details: Vec<VideoDetail>) -> HashMap<String, VideoDetail> {
    details.into_iter().map(|d| (d.id.clone(), d)).collect()
}

/// Merge base entries with their enrichment records, keeping base order
///
/// `None` means enrichment was skipped or failed, so every entry stays
/// unenriched.
pub fn merge(
    items: Vec<PlaylistItem>,
    details: Option<&HashMap<String, VideoDetail>>,
) -> Vec<FeedEntry> {
    items
        .into_iter()
        .map(|item| {
            let detail = item
                .video_id()
                .and_then(|id| details.and_then(|d| d.get(id)));

            FeedEntry {
                video_id: item.video_id().map(str::to_string),
                thumbnail_url: item.snippet.thumbnails.best_url(),
                duration: detail.map(|d| decode(d.raw_duration().unwrap_or_default())),
                view_count: detail.and_then(VideoDetail::view_count),
                id: item.id,
                title: item.snippet.title,
                published_at: item.snippet.published_at,
            }
        })
        .collect()
}
