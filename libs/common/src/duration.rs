//! Duration codec for compact video-length encodings
//!
//! Converts encodings such as `PT1H2M3S` into a number of seconds plus a
//! clock-style display string (`1:02:03`), and parses display strings back
//! into seconds.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Display string used for input that does not follow the encoding grammar
const FALLBACK_DISPLAY: &str = "0:00";

/// A decoded playback duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackDuration {
    /// Total length in seconds
    pub seconds: u64,
    /// Clock-style rendering, `M:SS` or `H:MM:SS`
    pub display: String,
}

impl PlaybackDuration {
    fn fallback() -> Self {
        Self {
            seconds: 0,
            display: FALLBACK_DISPLAY.to_string(),
        }
    }
}

fn encoding_regex() -> &'static Regex {
    static DURATION_REGEX: OnceLock<Regex> = OnceLock::new();
    DURATION_REGEX.get_or_init(|| {
        Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$")
            .expect("Failed to compile duration regex")
    })
}

/// Decode a `PT#H#M#S` encoding
///
/// Never fails: anything outside the grammar decodes to `0` seconds and
/// `"0:00"`.
pub fn decode(raw: &str) -> PlaybackDuration {
    let Some(caps) = encoding_regex().captures(raw) else {
        return PlaybackDuration::fallback();
    };

    let part = |index: usize| -> Option<u64> {
        match caps.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let (Some(hours), Some(minutes), Some(secs)) = (part(1), part(2), part(3)) else {
        return PlaybackDuration::fallback();
    };

    let total = hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(secs));

    let Some(seconds) = total else {
        return PlaybackDuration::fallback();
    };

    // Minutes are only padded when an hour component is shown.
    let display = if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    };

    PlaybackDuration { seconds, display }
}

/// Parse a display string (`S`, `M:SS` or `H:MM:SS`) back into seconds
///
/// Absent input, any other shape, or a non-numeric part yields `0`. Part
/// ranges are not checked, so `"0:70"` is 70 seconds.
pub fn parse_display_to_seconds(display: Option<&str>) -> u64 {
    let Some(display) = display else {
        return 0;
    };

    let parts: Option<Vec<u64>> = display
        .split(':')
        .map(|p| p.trim().parse::<u64>().ok())
        .collect();

    let total = match parts.as_deref() {
        Some([s]) => Some(*s),
        Some([m, s]) => m.checked_mul(60).and_then(|m| m.checked_add(*s)),
        Some([h, m, s]) => h
            .checked_mul(3600)
            .and_then(|h| m.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(*s)),
        _ => None,
    };

    total.unwrap_or(0)
}
