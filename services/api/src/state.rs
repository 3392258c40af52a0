//! Application state shared across handlers

use std::sync::Arc;

use crate::aggregator::FeedAggregator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<FeedAggregator>,
}
