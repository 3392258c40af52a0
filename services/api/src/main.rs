use anyhow::Result;
use std::{sync::Arc, time::Duration};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod aggregator;
mod config;
mod error;
mod models;
mod routes;
mod state;
mod upstream;

use crate::{
    aggregator::FeedAggregator, config::ApiConfig, state::AppState, upstream::CatalogClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting feed API service");

    let config = ApiConfig::from_env()?;
    if config.api_key.is_none() {
        warn!(
            "{} is not set; feed requests will fail until it is configured",
            config::API_KEY_VAR
        );
    }

    let upstream = CatalogClient::new(
        config.catalog_base_url.clone(),
        Duration::from_secs(config.request_timeout_seconds),
    )?;
    let aggregator = FeedAggregator::new(upstream, &config);

    let app_state = AppState {
        aggregator: Arc::new(aggregator),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Feed API service listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
