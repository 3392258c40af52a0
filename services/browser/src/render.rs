//! Plain-text rendering of the display list

use common::FeedEntry;

/// Render one entry as a single line
pub fn entry_line(entry: &FeedEntry) -> String {
    let duration = entry.duration_display().unwrap_or("--:--");
    let views = entry
        .view_count
        .map(|v| format!("{} views", v))
        .unwrap_or_else(|| "- views".to_string());
    let published = entry.published_at.format("%b %-d, %Y").to_string();
    let link = entry.watch_url().unwrap_or_default();

    format!(
        "{:>8}  {:>14}  {:<12}  {}  {}",
        duration, views, published, entry.title, link
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use common::decode;

    #[test]
    fn test_entry_line() {
        let entry = FeedEntry {
            id: "item-1".to_string(),
            video_id: Some("abc".to_string()),
            title: "Shipping day".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 3, 9, 17, 30, 0).unwrap(),
            thumbnail_url: String::new(),
            duration: Some(decode("PT1H2M3S")),
            view_count: Some(1500),
        };

        let line = entry_line(&entry);
        assert!(line.contains("1:02:03"));
        assert!(line.contains("1500 views"));
        assert!(line.contains("Mar 9, 2024"));
        assert!(line.ends_with("Shipping day  https://www.youtube.com/watch?v=abc"));
    }

    #[test]
    fn test_entry_line_without_enrichment() {
        let entry = FeedEntry {
            id: "item-2".to_string(),
            video_id: None,
            title: "Untitled".to_string(),
            published_at: Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap(),
            thumbnail_url: String::new(),
            duration: None,
            view_count: None,
        };

        let line = entry_line(&entry);
        assert!(line.contains("--:--"));
        assert!(line.contains("- views"));
        assert!(line.ends_with("Untitled"));
    }
}
