//! Living Book client - the reading surface.
//!
//! Submits questions to the answer provider and reveals the answers line by
//! line, ink appearing on a page.

mod client;
mod commands;
mod display;
mod session;
mod thinking;

use anyhow::Result;
use book_common::BookConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bookctl")]
#[command(about = "The Living Book - ask, and watch the answer appear", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and watch the answer appear
    Ask {
        /// The question to ask
        question: Vec<String>,
    },

    /// Open the book for an interactive session
    Read,

    /// Check that the answer provider is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so they never smudge the page.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BookConfig::load();

    match Cli::parse().command {
        Some(Commands::Ask { question }) => commands::ask(config, question.join(" ")).await,
        Some(Commands::Health) => commands::health(config).await,
        Some(Commands::Read) | None => commands::read(config).await,
    }
}
