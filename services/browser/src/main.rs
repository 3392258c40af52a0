use anyhow::Result;
use clap::Parser;
use common::{FilterCriteria, SortMode};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod client;
mod render;
mod session;

use crate::{client::FeedClient, session::FeedSession};

/// Browse the enriched video feed from the command line
#[derive(Parser, Debug)]
#[command(name = "feed-browser")]
#[command(about = "Load feed pages and print the filtered, sorted display list", long_about = None)]
struct Args {
    /// Aggregation endpoint URL
    #[arg(long, env = "FEED_ENDPOINT", default_value = "http://localhost:3002/api/youtube")]
    endpoint: String,

    /// Number of pages to load
    #[arg(long, default_value_t = 1)]
    pages: usize,

    /// Minimum duration in seconds
    #[arg(long)]
    min_duration: Option<u64>,

    /// Maximum duration in seconds
    #[arg(long)]
    max_duration: Option<u64>,

    /// Minimum view count
    #[arg(long)]
    min_views: Option<u64>,

    /// Sort mode: newest, oldest or popularity
    #[arg(long, default_value = "newest")]
    sort: SortMode,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout: u64,
}

impl Args {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_duration_seconds: self.min_duration,
            max_duration_seconds: self.max_duration,
            min_views: self.min_views,
            sort: self.sort,
        }
    }
}

/// Load up to `pages` pages, starting over from the first one
async fn load_pages(session: &mut FeedSession, pages: usize) -> Result<()> {
    for page in 0..pages.max(1) {
        let result = if page == 0 {
            session.refresh().await
        } else if session.state().has_more() {
            session.load_more().await
        } else {
            break;
        };

        if let Err(e) = result {
            anyhow::bail!("Failed to load feed page: {}", e);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let client = FeedClient::new(args.endpoint.clone(), Duration::from_secs(args.timeout))?;
    let mut session = FeedSession::new(client, FilterCriteria::default());
    session.set_criteria(args.criteria());
    info!("Browsing {} with {:?}", args.endpoint, session.criteria());

    load_pages(&mut session, args.pages).await?;

    if session.state().is_empty() {
        println!("No videos in this feed.");
        return Ok(());
    }

    let display = session.display();
    if display.is_empty() {
        println!(
            "No videos match the current filters ({} loaded).",
            session.state().entries().len()
        );
        return Ok(());
    }

    for entry in &display {
        println!("{}", render::entry_line(entry));
    }
    println!(
        "{} of {} videos shown{}",
        display.len(),
        session.state().entries().len(),
        if session.state().has_more() {
            " (more available)"
        } else {
            ""
        }
    );

    Ok(())
}
