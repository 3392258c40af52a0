//! Browsing session: accumulated pages plus the current criteria
//!
//! `load_more` and `refresh` take `&mut self`, so a session can only have
//! one fetch in flight and its cursor always advances in fetch order.

use common::{FeedEntry, FeedResult, FeedState, FilterCriteria, derive};
use tracing::{debug, info};

use crate::client::FeedClient;

/// Feed state and criteria owned by one browsing caller
#[derive(Debug)]
pub struct FeedSession {
    client: FeedClient,
    state: FeedState,
    criteria: FilterCriteria,
}

impl FeedSession {
    /// Create an empty session
    pub fn new(client: FeedClient, criteria: FilterCriteria) -> Self {
        Self {
            client,
            state: FeedState::new(),
            criteria,
        }
    }

    /// Fetch the next page and append it
    ///
    /// Returns the number of entries added. Does nothing once the feed is
    /// exhausted. On failure the state is left untouched.
    pub async fn load_more(&mut self) -> FeedResult<usize> {
        if !self.state.has_more() {
            debug!("Feed exhausted, nothing to load");
            return Ok(0);
        }

        let page = self.client.fetch_page(self.state.cursor()).await?;
        let added = page.entries.len();
        self.state.append(page);

        info!(
            "Loaded page {} ({} entries, {} total)",
            self.state.pages_loaded(),
            added,
            self.state.entries().len()
        );
        Ok(added)
    }

    /// Drop everything and fetch the first page again
    pub async fn refresh(&mut self) -> FeedResult<usize> {
        self.state.reset();
        self.load_more().await
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Display list for the current state and criteria
    pub fn display(&self) -> Vec<FeedEntry> {
        derive(self.state.entries(), &self.criteria)
    }
}
