//! Command handlers for bookctl.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use book_common::BookConfig;
use owo_colors::OwoColorize;

use crate::client::ProviderClient;
use crate::display;
use crate::session::BookSession;

/// One-shot question.
pub async fn ask(config: BookConfig, question: String) -> Result<()> {
    let mut session = BookSession::new(&config);
    session.submit(&question).await;
    Ok(())
}

/// Interactive reading session.
pub async fn read(config: BookConfig) -> Result<()> {
    let mut session = BookSession::new(&config);
    display::print_greeting();

    let stdin = io::stdin();
    loop {
        print!("{}  ", "❯".bright_magenta());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            ":q" | ":quit" => break,
            ":b" | ":bookmark" => match session.bookmark(0.0) {
                Some(bookmark) => {
                    println!("  Bookmarked {:?}", bookmark.title);
                }
                None => {
                    println!("  {}", "Nothing to bookmark yet.".dimmed());
                }
            },
            ":bookmarks" => display::print_bookmarks(session.store()),
            ":help" => display::print_greeting(),
            question => {
                session.submit(question).await;
            }
        }
    }

    Ok(())
}

/// Probe the provider.
pub async fn health(config: BookConfig) -> Result<()> {
    let client = ProviderClient::new(&config.provider_url);
    match client.health().await {
        Ok(status) => {
            println!(
                "{} {} is {}",
                "✓".green().bold(),
                status.service,
                status.status
            );
        }
        Err(err) => {
            println!("{} {}", "✗".red().bold(), err);
        }
    }
    Ok(())
}
