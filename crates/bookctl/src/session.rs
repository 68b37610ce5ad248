//! Owned session context for one reading of the book.
//!
//! Holds the answer store, the reveal scheduler and its sink, and the
//! provider client. All operations go through this context; nothing lives in
//! ambient state.

use book_common::{AnswerStore, BookConfig, Bookmark, PlaybackHandle, RevealedLine, RevealScheduler};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::error;
use uuid::Uuid;

use crate::client::ProviderClient;
use crate::display;
use crate::thinking;

pub struct BookSession {
    store: AnswerStore,
    scheduler: RevealScheduler,
    revealed: UnboundedReceiver<RevealedLine>,
    client: ProviderClient,
}

impl BookSession {
    pub fn new(config: &BookConfig) -> Self {
        let (scheduler, revealed) = RevealScheduler::new();
        Self {
            store: AnswerStore::new(),
            scheduler,
            revealed,
            client: ProviderClient::new(&config.provider_url),
        }
    }

    /// Submit a question: thinking pause, provider round trip, append,
    /// reveal.
    ///
    /// Blank input is ignored. Provider failures are logged to the
    /// diagnostic channel and swallowed; the page simply stays unchanged.
    /// Returns whether an answer was recorded.
    pub async fn submit(&mut self, question: &str) -> bool {
        let question = question.trim();
        if question.is_empty() {
            return false;
        }

        let req_id = Uuid::new_v4();
        let spinner = thinking::start();
        thinking::pause().await;

        match self.client.ask(question).await {
            Ok(payload) => {
                spinner.finish_and_clear();
                let entry = self.store.append(question, payload);
                let playback = self.scheduler.play(&entry);
                self.render_playback(playback).await;
                true
            }
            Err(err) => {
                spinner.finish_and_clear();
                error!("[NET]  Ask {} failed: {}", req_id, err);
                false
            }
        }
    }

    /// Drain the reveal sink until this playback has shown every line.
    async fn render_playback(&mut self, playback: PlaybackHandle) {
        let mut shown = 0;
        while shown < playback.line_count {
            match self.revealed.recv().await {
                Some(line) if line.session == playback.session => {
                    display::print_line(&line);
                    shown += 1;
                }
                // Straggler from a superseded session; drop it.
                Some(_) => continue,
                None => break,
            }
        }
    }

    /// Pin the newest entry. `None` when nothing has been answered yet.
    pub fn bookmark(&mut self, scroll_position: f64) -> Option<&Bookmark> {
        self.store.add_bookmark(scroll_position)
    }

    pub fn store(&self) -> &AnswerStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_submissions_are_ignored() {
        let config = BookConfig::default();
        let mut session = BookSession::new(&config);

        // Never reaches the network: blank input returns before the client
        // is touched.
        assert!(!session.submit("").await);
        assert!(!session.submit("   ").await);
        assert!(session.store().entries().is_empty());
    }

    #[tokio::test]
    async fn test_bookmark_before_any_answer_is_noop() {
        let config = BookConfig::default();
        let mut session = BookSession::new(&config);
        assert!(session.bookmark(0.0).is_none());
    }
}
