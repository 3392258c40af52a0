//! Accumulated feed state for "load more" browsing

use crate::models::{FeedEntry, FeedPage};

/// Entries accumulated across page fetches
///
/// Entries are only ever appended in fetch order; display ordering is derived
/// separately by [`crate::pipeline::derive`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    entries: Vec<FeedEntry>,
    cursor: Option<String>,
    pages_loaded: usize,
}

impl FeedState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fetched page and take over its cursor
    pub fn append(&mut self, page: FeedPage) {
        self.entries.extend(page.entries);
        self.cursor = page.next_cursor;
        self.pages_loaded += 1;
    }

    /// Drop everything, as for a fresh fetch without a cursor
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
        self.pages_loaded = 0;
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    /// Cursor to pass to the next fetch
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    /// Whether another page can be requested
    pub fn has_more(&self) -> bool {
        self.pages_loaded == 0 || self.cursor.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str) -> FeedEntry {
        FeedEntry {
            id: id.to_string(),
            video_id: None,
            title: id.to_uppercase(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            thumbnail_url: String::new(),
            duration: None,
            view_count: None,
        }
    }

    fn page(ids: &[&str], cursor: Option<&str>) -> FeedPage {
        FeedPage {
            entries: ids.iter().map(|id| entry(id)).collect(),
            next_cursor: cursor.map(str::to_string),
        }
    }

    #[test]
    fn test_new_state_has_more() {
        let state = FeedState::new();
        assert!(state.is_empty());
        assert!(state.has_more());
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn test_append_preserves_fetch_order() {
        let mut state = FeedState::new();
        state.append(page(&["a", "b"], Some("page-2")));
        state.append(page(&["c"], None));

        let ids: Vec<&str> = state.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(state.pages_loaded(), 2);
    }

    #[test]
    fn test_cursor_replaced_after_each_append() {
        let mut state = FeedState::new();
        state.append(page(&["a"], Some("page-2")));
        assert_eq!(state.cursor(), Some("page-2"));
        assert!(state.has_more());

        state.append(page(&["b"], None));
        assert_eq!(state.cursor(), None);
        assert!(!state.has_more());
    }

    #[test]
    fn test_reset() {
        let mut state = FeedState::new();
        state.append(page(&["a"], Some("page-2")));
        state.reset();

        assert_eq!(state, FeedState::new());
    }
}
