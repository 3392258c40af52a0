//! API models for request and response payloads

use serde::Deserialize;

pub mod youtube;

/// Request body for the aggregation endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedRequest {
    /// Continuation token from a previous page
    #[serde(default)]
    pub cursor: Option<String>,
}
