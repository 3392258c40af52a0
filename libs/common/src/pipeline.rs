//! Filter and sort pipeline for the display list
//!
//! The display list is always derived from the full accumulated entry set,
//! never patched from a previous result.

use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::{duration::parse_display_to_seconds, error::FeedError, models::FeedEntry};

/// Display ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Most recently published first
    #[default]
    Newest,
    /// Oldest published first
    Oldest,
    /// Most viewed first
    Popularity,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::Popularity => "popularity",
        };
        f.write_str(name)
    }
}

impl FromStr for SortMode {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            "popularity" => Ok(SortMode::Popularity),
            _ => Err(FeedError::InvalidSortMode(s.to_string())),
        }
    }
}

/// User-supplied filter and sort criteria
///
/// Bounds are not cross-checked: a minimum above the maximum simply matches
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub min_duration_seconds: Option<u64>,
    pub max_duration_seconds: Option<u64>,
    pub min_views: Option<u64>,
    pub sort: SortMode,
}

impl FilterCriteria {
    fn has_duration_bounds(&self) -> bool {
        self.min_duration_seconds.is_some() || self.max_duration_seconds.is_some()
    }

    fn matches_duration(&self, entry: &FeedEntry) -> bool {
        let seconds = parse_display_to_seconds(entry.duration_display());
        self.min_duration_seconds.is_none_or(|min| seconds >= min)
            && self.max_duration_seconds.is_none_or(|max| seconds <= max)
    }

    fn matches_views(&self, entry: &FeedEntry) -> bool {
        self.min_views.is_none_or(|min| entry.popularity() >= min)
    }
}

/// Derive the display list from the accumulated entries
///
/// Filtering keeps entries without a duration (treated as 0 seconds) or view
/// count (treated as 0) in the comparison rather than dropping them. The sort
/// is stable, so ties keep their input order.
pub fn derive(entries: &[FeedEntry], criteria: &FilterCriteria) -> Vec<FeedEntry> {
    let mut shown: Vec<FeedEntry> = entries
        .iter()
        .filter(|e| !criteria.has_duration_bounds() || criteria.matches_duration(e))
        .filter(|e| criteria.matches_views(e))
        .cloned()
        .collect();

    match criteria.sort {
        SortMode::Newest => shown.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
        SortMode::Oldest => shown.sort_by(|a, b| a.published_at.cmp(&b.published_at)),
        SortMode::Popularity => shown.sort_by(|a, b| b.popularity().cmp(&a.popularity())),
    }

    let kept = shown.len();
    debug!(
        "Derived {} of {} entries (sort: {})",
        kept,
        entries.len(),
        criteria.sort
    );

    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::decode;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, day: u32, raw_duration: Option<&str>, views: Option<u64>) -> FeedEntry {
        FeedEntry {
            id: id.to_string(),
            video_id: Some(format!("vid-{id}")),
            title: format!("Video {id}"),
            published_at: Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap(),
            thumbnail_url: String::new(),
            duration: raw_duration.map(decode),
            view_count: views,
        }
    }

    fn ids(entries: &[FeedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    fn sample() -> Vec<FeedEntry> {
        vec![
            entry("short", 3, Some("PT45S"), Some(120)),
            entry("medium", 1, Some("PT9M5S"), Some(5_000)),
            entry("long", 4, Some("PT1H2M3S"), Some(800)),
            entry("unknown", 2, None, None),
        ]
    }

    #[test]
    fn test_unset_criteria_sorts_newest_only() {
        let out = derive(&sample(), &FilterCriteria::default());
        assert_eq!(ids(&out), vec!["long", "short", "unknown", "medium"]);
    }

    #[test]
    fn test_min_duration_excludes_absent_duration() {
        let criteria = FilterCriteria {
            min_duration_seconds: Some(60),
            ..Default::default()
        };
        assert_eq!(ids(&derive(&sample(), &criteria)), vec!["long", "medium"]);
    }

    #[test]
    fn test_max_duration_keeps_absent_duration_as_zero() {
        let criteria = FilterCriteria {
            max_duration_seconds: Some(545),
            sort: SortMode::Oldest,
            ..Default::default()
        };
        assert_eq!(
            ids(&derive(&sample(), &criteria)),
            vec!["medium", "unknown", "short"]
        );
    }

    #[test]
    fn test_duration_bounds_are_inclusive() {
        let criteria = FilterCriteria {
            min_duration_seconds: Some(545),
            max_duration_seconds: Some(3723),
            ..Default::default()
        };
        assert_eq!(ids(&derive(&sample(), &criteria)), vec!["long", "medium"]);
    }

    #[test]
    fn test_min_views_then_popularity_sort() {
        let entries = vec![
            entry("x", 1, None, Some(500)),
            entry("y", 2, None, Some(1000)),
            entry("z", 3, None, Some(2000)),
        ];
        let criteria = FilterCriteria {
            min_views: Some(1000),
            sort: SortMode::Popularity,
            ..Default::default()
        };
        assert_eq!(ids(&derive(&entries, &criteria)), vec!["z", "y"]);
    }

    #[test]
    fn test_min_above_max_yields_empty_result() {
        let criteria = FilterCriteria {
            min_duration_seconds: Some(600),
            max_duration_seconds: Some(60),
            ..Default::default()
        };
        assert!(derive(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_popularity_sort_is_stable() {
        let entries = vec![
            entry("a", 1, None, Some(10)),
            entry("b", 2, None, None),
            entry("c", 3, None, Some(10)),
            entry("d", 4, None, Some(0)),
        ];
        let criteria = FilterCriteria {
            sort: SortMode::Popularity,
            ..Default::default()
        };
        assert_eq!(ids(&derive(&entries, &criteria)), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_timestamp_ties_keep_input_order() {
        let mut entries = vec![
            entry("first", 7, None, None),
            entry("second", 7, None, None),
            entry("older", 6, None, None),
        ];
        let newest = derive(&entries, &FilterCriteria::default());
        assert_eq!(ids(&newest), vec!["first", "second", "older"]);

        entries.swap(0, 1);
        let oldest = derive(
            &entries,
            &FilterCriteria {
                sort: SortMode::Oldest,
                ..Default::default()
            },
        );
        assert_eq!(ids(&oldest), vec!["older", "second", "first"]);
    }

    #[test]
    fn test_sort_mode_from_str() {
        assert_eq!("newest".parse::<SortMode>().unwrap(), SortMode::Newest);
        assert_eq!("Oldest".parse::<SortMode>().unwrap(), SortMode::Oldest);
        assert_eq!(" POPULARITY ".parse::<SortMode>().unwrap(), SortMode::Popularity);
        assert_eq!(
            "views".parse::<SortMode>(),
            Err(FeedError::InvalidSortMode("views".to_string()))
        );
    }
}
