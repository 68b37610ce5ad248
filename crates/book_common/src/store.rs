//! The rolling answer store.
//!
//! Entries are append-only and roll off oldest-first once the total word
//! count exceeds the budget. Bookmarked entries are pinned and survive
//! eviction even while the store stays over budget.

use std::collections::HashSet;

use chrono::Utc;
use tracing::debug;

use crate::bookmark::Bookmark;
use crate::entry::Entry;
use crate::protocol::AnswerPayload;

/// Maximum total words kept across all entries before eviction runs.
pub const WORD_BUDGET: usize = 10_000;

/// Ordered collection of question/answer entries plus their bookmarks.
///
/// Entries are kept oldest-first. All mutation goes through [`append`],
/// [`add_bookmark`], and [`remove_bookmark`]; `total_words` is recomputed
/// after every mutation and always equals the sum of member word counts.
///
/// [`append`]: Self::append
/// [`add_bookmark`]: Self::add_bookmark
/// [`remove_bookmark`]: Self::remove_bookmark
#[derive(Debug, Default)]
pub struct AnswerStore {
    entries: Vec<Entry>,
    bookmarks: Vec<Bookmark>,
    total_words: usize,
    next_entry_id: u64,
    next_bookmark_id: u64,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new question/answer exchange.
    ///
    /// Builds the entry with a fresh id and cached word count, appends it to
    /// the tail, and runs eviction if the store went over budget. Returns a
    /// copy of the entry just appended; the appended entry itself always
    /// survives eviction.
    pub fn append(&mut self, question: &str, payload: AnswerPayload) -> Entry {
        self.next_entry_id += 1;
        let entry = Entry::new(self.next_entry_id, question, payload);
        let appended = entry.clone();

        self.entries.push(entry);
        self.total_words = self.recompute_total();

        if self.total_words > WORD_BUDGET {
            self.evict();
            self.total_words = self.recompute_total();
        }

        appended
    }

    /// Drop oldest unbookmarked entries until the kept tail fits the budget.
    ///
    /// Scans newest to oldest, keeping entries while the kept total still
    /// fits. The newest entry is always kept. From the first entry that no
    /// longer fits, every older entry is a removal candidate: bookmarked ones
    /// are pinned in place, the rest are dropped. Relative order among kept
    /// entries is preserved.
    fn evict(&mut self) {
        let newest_idx = self.entries.len().saturating_sub(1);
        let mut kept: HashSet<u64> = HashSet::new();
        let mut kept_words = 0usize;
        let mut scanning = true;

        for (idx, entry) in self.entries.iter().enumerate().rev() {
            let fits = kept_words + entry.word_count() <= WORD_BUDGET;
            if idx == newest_idx || (scanning && fits) {
                kept_words += entry.word_count();
                kept.insert(entry.id);
            } else {
                scanning = false;
                if self.bookmarks.iter().any(|b| b.entry_id == entry.id) {
                    kept.insert(entry.id);
                } else {
                    debug!(
                        "[EVICT]  Dropping entry {} ({} words)",
                        entry.id,
                        entry.word_count()
                    );
                }
            }
        }

        self.entries.retain(|e| kept.contains(&e.id));
    }

    /// Pin the newest entry. No-op on an empty store.
    ///
    /// The bookmark snapshots the entry's question text as its title and the
    /// caller-supplied scroll offset.
    pub fn add_bookmark(&mut self, scroll_position: f64) -> Option<&Bookmark> {
        let entry = self.entries.last()?;

        self.next_bookmark_id += 1;
        let bookmark = Bookmark {
            id: self.next_bookmark_id,
            entry_id: entry.id,
            title: entry.question.clone(),
            timestamp: Utc::now(),
            scroll_position,
        };
        self.bookmarks.push(bookmark);
        self.bookmarks.last()
    }

    /// Remove a bookmark by id. The only destruction path for bookmarks.
    pub fn remove_bookmark(&mut self, bookmark_id: u64) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != bookmark_id);
        self.bookmarks.len() != before
    }

    /// Resolve an entry by id.
    ///
    /// Returns `None` once the entry has been evicted; a bookmark pointing at
    /// a missing entry is rendered as unavailable by callers.
    pub fn entry_for(&self, entry_id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// The most recently appended entry.
    pub fn newest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All bookmarks, in creation order.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Sum of word counts over the current entries.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    fn recompute_total(&self) -> usize {
        self.entries.iter().map(|e| e.word_count()).sum()
    }
}
