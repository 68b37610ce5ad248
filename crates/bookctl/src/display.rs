//! Rendering of revealed lines and bookmarks.

use book_common::{AnswerStore, LineKind, RevealedLine};
use owo_colors::OwoColorize;

/// Print one revealed line in its section's style.
pub fn print_line(line: &RevealedLine) {
    match line.kind {
        LineKind::Title => {
            println!();
            println!("  {}", line.text.bold().underline());
            println!();
        }
        LineKind::Explanation => {
            println!("  {}", line.text);
            println!();
        }
        LineKind::Guidance => {
            println!("  {}", line.text.cyan());
            println!();
        }
        LineKind::Note => {
            println!("  {}", line.text.dimmed().italic());
            println!();
        }
    }
}

/// List all bookmarks, resolving each pinned entry.
///
/// A bookmark whose entry has been evicted is still listed; the entry is
/// rendered as unavailable.
pub fn print_bookmarks(store: &AnswerStore) {
    if store.bookmarks().is_empty() {
        println!("  {}", "No bookmarks yet.".dimmed());
        return;
    }

    for bookmark in store.bookmarks() {
        let when = bookmark.timestamp.format("%Y-%m-%d %H:%M");
        match store.entry_for(bookmark.entry_id) {
            Some(entry) => {
                println!(
                    "  {}  {}  {}",
                    format!("[{}]", bookmark.id).cyan(),
                    bookmark.title,
                    format!("({}, {} words)", when, entry.word_count()).dimmed()
                );
            }
            None => {
                println!(
                    "  {}  {}  {}",
                    format!("[{}]", bookmark.id).cyan(),
                    bookmark.title,
                    format!("({}, entry no longer available)", when).dimmed()
                );
            }
        }
    }
}

/// Greeting printed when the book opens.
pub fn print_greeting() {
    println!();
    println!("  {}", "The Living Book".bold());
    println!(
        "  {}",
        "Ask your question, or :bookmark, :bookmarks, :quit".dimmed()
    );
    println!();
}
