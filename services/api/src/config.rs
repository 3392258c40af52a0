//! Service configuration loaded from the environment

use anyhow::Result;
use serde::Deserialize;
use std::env;

/// Environment variable holding the catalog API credential
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Upper bound the catalog accepts for a page
const MAX_PAGE_SIZE: u32 = 50;

/// API service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Base URL of the catalog and detail endpoints
    pub catalog_base_url: String,
    /// Feed (playlist) served by this instance
    pub playlist_id: String,
    /// Number of entries requested per page
    pub page_size: u32,
    /// Timeout applied to each upstream call
    pub request_timeout_seconds: u64,
    /// Catalog credential; checked per request, never logged
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl ApiConfig {
    /// Create a new ApiConfig from environment variables
    ///
    /// # Environment Variables
    /// - `FEED_BIND_ADDRESS` (default: "0.0.0.0:3002")
    /// - `FEED_CATALOG_BASE_URL` (default: "https://www.googleapis.com/youtube/v3")
    /// - `FEED_PLAYLIST_ID` (default: "UU9ecwl3FTG66jIKA9JRDtmg")
    /// - `FEED_PAGE_SIZE` (default: 50, clamped to 1..=50)
    /// - `FEED_REQUEST_TIMEOUT_SECONDS` (default: 10)
    /// - `YOUTUBE_API_KEY`: catalog credential, optional at startup
    pub fn from_env() -> Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("bind_address", "0.0.0.0:3002")?
            .set_default("catalog_base_url", "https://www.googleapis.com/youtube/v3")?
            .set_default("playlist_id", "UU9ecwl3FTG66jIKA9JRDtmg")?
            .set_default("page_size", i64::from(MAX_PAGE_SIZE))?
            .set_default("request_timeout_seconds", 10)?
            .add_source(::config::Environment::with_prefix("FEED").try_parsing(true))
            .build()?;

        let mut config: ApiConfig = settings.try_deserialize()?;
        config.page_size = config.page_size.clamp(1, MAX_PAGE_SIZE);
        config.catalog_base_url = config.catalog_base_url.trim_end_matches('/').to_string();
        config.api_key = env::var(API_KEY_VAR).ok().filter(|key| !key.trim().is_empty());

        Ok(config)
    }
}
