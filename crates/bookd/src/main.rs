//! Living Book daemon - the Answer Provider.
//!
//! Serves the ask endpoint the book page talks to. Every question receives
//! the same placeholder answer; this daemon owns the transport, not the
//! content.

mod answers;
mod routes;
mod server;

use anyhow::Result;
use book_common::BookConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BookConfig::load();
    info!(
        "The Living Book server v{} starting on port {}",
        env!("CARGO_PKG_VERSION"),
        config.port
    );

    server::run(config).await
}
