//! Feed data model shared by the API service and its callers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::duration::PlaybackDuration;

/// Base URL for watching a video by its id
const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// One enriched feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    /// Identifier of the entry within the feed
    pub id: String,
    /// Internal video id used for enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail_url: String,
    /// Absent when enrichment failed or had no record for this entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<PlaybackDuration>,
    /// View count, absent when enrichment failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
}

impl FeedEntry {
    /// Link to the video, if the entry carries a video id
    pub fn watch_url(&self) -> Option<String> {
        self.video_id
            .as_deref()
            .map(|id| format!("{}{}", WATCH_URL_BASE, id))
    }

    /// Display string of the duration, if any
    pub fn duration_display(&self) -> Option<&str> {
        self.duration.as_ref().map(|d| d.display.as_str())
    }

    /// View count with absent treated as zero
    pub fn popularity(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }
}

/// One page of enriched entries, in upstream order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub entries: Vec<FeedEntry>,
    /// Continuation token; absent means there are no more pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl FeedPage {
    /// A page with no entries and no continuation
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry() -> FeedEntry {
        FeedEntry {
            id: "item-1".to_string(),
            video_id: Some("dQw4w9WgXcQ".to_string()),
            title: "First".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            thumbnail_url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg".to_string(),
            duration: None,
            view_count: None,
        }
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            entry().watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );

        let mut no_video = entry();
        no_video.video_id = None;
        assert_eq!(no_video.watch_url(), None);
    }

    #[test]
    fn test_serializes_camel_case_and_skips_absent_fields() {
        let value = serde_json::to_value(entry()).unwrap();
        assert_eq!(value["videoId"], "dQw4w9WgXcQ");
        assert_eq!(value["publishedAt"], "2024-03-01T12:00:00Z");
        assert!(value.get("duration").is_none());
        assert!(value.get("viewCount").is_none());

        let page = serde_json::to_value(FeedPage::empty()).unwrap();
        assert_eq!(page, serde_json::json!({ "entries": [] }));
    }

    #[test]
    fn test_deserializes_enriched_entry() {
        let entry: FeedEntry = serde_json::from_value(serde_json::json!({
            "id": "item-2",
            "title": "Second",
            "publishedAt": "2024-03-02T08:30:00Z",
            "thumbnailUrl": "",
            "duration": { "seconds": 545, "display": "9:05" },
            "viewCount": 1200
        }))
        .unwrap();

        assert_eq!(entry.duration_display(), Some("9:05"));
        assert_eq!(entry.popularity(), 1200);
        assert_eq!(entry.video_id, None);
    }
}
