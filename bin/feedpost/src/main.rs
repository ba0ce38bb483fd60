//! # feedpost Binary
//!
//! Loads a feed, mounts one card per post and renders the page. Storage
//! plugins are chosen at compile time.

mod settings;

use std::sync::Arc;

use anyhow::Context;
use fp_auth_simple::SimpleIdentityProvider;
use fp_core::parse_feed_lenient;
use fp_core::traits::{IdentityProvider, MessageStore};
use fp_ui::{render_feed, PostCard};

use crate::settings::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::load().context("failed to load configuration")?;

    run(&config).await
}

// 1. Bootstrap the message store; it is closed even when rendering fails.
#[cfg(feature = "db-sqlite")]
async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let store = fp_db_sqlite::connect_shared(&config.database_url).await?;
    close_after(store, render_page(config)).await
}

#[cfg(not(feature = "db-sqlite"))]
async fn run(config: &AppConfig) -> anyhow::Result<()> {
    render_page(config)
}

fn render_page(config: &AppConfig) -> anyhow::Result<()> {
    // 2. Identity for locally added comments
    let identity: Arc<dyn IdentityProvider> = Arc::new(SimpleIdentityProvider::new(&config.viewer_name));

    // 3. Ingest the feed
    let json = std::fs::read_to_string(&config.feed_path)
        .with_context(|| format!("failed to read feed: {}", config.feed_path.display()))?;
    let (posts, rejected) = parse_feed_lenient(&json)?;
    if !rejected.is_empty() {
        log::warn!("{} feed entries rejected", rejected.len());
    }
    log::info!("mounted {} posts from {}", posts.len(), config.feed_path.display());

    // 4. Render
    let cards: Vec<PostCard> = posts
        .into_iter()
        .map(|post| PostCard::new(post, Arc::clone(&identity)))
        .collect();
    let html = render_feed(&config.title, &cards)?;

    match &config.output_path {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{html}"),
    }
    Ok(())
}

/// Closes `store` whether or not `outcome` succeeded. The outcome's own
/// error wins over a close failure, which is then only logged.
#[cfg_attr(not(feature = "db-sqlite"), allow(dead_code))]
async fn close_after<T>(store: &dyn MessageStore, outcome: anyhow::Result<T>) -> anyhow::Result<T> {
    let closed = store.close().await;
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(e), Err(close_err)) => {
            log::error!("failed to close message store: {close_err:#}");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
    }
}
