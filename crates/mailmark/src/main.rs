//! `mailmark` - unread counters for saved mail searches
//!
//! Loads bookmark and maildir definitions, asks the configured search command
//! for counts, and prints them with the change since the first refresh.
//!
//! Usage: `mailmark [CONFIG]`. Without an argument the configuration is read
//! from the platform config directory (`mailmark/queries.json`).

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod listing;

use std::path::PathBuf;

use anyhow::{Context, Result};
use mailmark_core::{
    Category, CommandService, DefinitionProvider, ExecutionService, LoggingObserver, QueryConfig,
    QueryItems,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailmark=info,mailmark_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(QueryConfig::default_path, PathBuf::from);

    info!("Starting mailmark");

    let config = QueryConfig::load(&config_path)
        .await
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    config.validate().context("Invalid query definitions")?;

    let command = config
        .command
        .clone()
        .context("No search command configured")?;
    let interval = config.refresh_interval();

    let mut items = QueryItems::new(config, CommandService::from_config(&command));
    items.subscribe(LoggingObserver);

    items
        .request_refresh()
        .await
        .context("Initial refresh failed")?;
    print_items(&mut items)?;

    let Some(period) = interval else {
        return Ok(());
    };

    let mut ticker = tokio::time::interval(period);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = items.request_refresh().await {
                    warn!("Refresh failed: {e}");
                    continue;
                }
                print_items(&mut items)?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping mailmark");
                return Ok(());
            }
        }
    }
}

/// Print every category's items to stdout.
fn print_items<P, S>(items: &mut QueryItems<P, S>) -> Result<()>
where
    P: DefinitionProvider,
    S: ExecutionService,
{
    println!("{}", listing::header(items.baseline().taken_at()));
    for category in Category::ALL {
        let lines = listing::lines(items.items(category)?);
        if lines.is_empty() {
            continue;
        }
        println!("\n{}", listing::title(category));
        for line in lines {
            println!("{line}");
        }
    }
    println!();
    Ok(())
}
