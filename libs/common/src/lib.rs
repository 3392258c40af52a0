//! Common library for the video feed service
//!
//! This crate holds the pieces shared by the API service and its callers:
//! the feed data model, the duration codec, the accumulated feed state, the
//! filter/sort pipeline that derives the display list, and the shared error
//! type.

pub mod duration;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod state;

pub use duration::{PlaybackDuration, decode, parse_display_to_seconds};
pub use error::{FeedError, FeedResult};
pub use models::{FeedEntry, FeedPage};
pub use pipeline::{FilterCriteria, SortMode, derive};
pub use state::FeedState;
