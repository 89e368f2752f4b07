//! Headless feed commands.

use anyhow::{Context, Result};
use feedline_core::config::Config;
use feedline_core::feed::{FeedClient, synthesize};
use feedline_core::session::TokenStore;

/// Fetches the upstream source and prints the synthesized feed.
pub async fn pull(config: &Config, count: Option<usize>, json: bool) -> Result<()> {
    let target = count.unwrap_or(config.target_count);

    let client = FeedClient::new(config, TokenStore::new().get())?;
    let source = client
        .fetch_source()
        .await
        .map_err(|e| anyhow::anyhow!("Feed fetch failed: {e} (try again later)"))?;
    let items = synthesize(&source, target);

    if json {
        let out = serde_json::to_string(&items).context("serialize feed")?;
        println!("{out}");
    } else {
        let last_id = items.last().map_or(0, |item| item.id);
        println!(
            "Fetched {} source items, synthesized {} (ids 1..={last_id})",
            source.len(),
            items.len(),
        );
    }
    Ok(())
}
