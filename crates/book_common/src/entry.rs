//! Question/answer entries and word counting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::protocol::AnswerPayload;

/// Count words in a string.
///
/// A word is a maximal run of non-whitespace characters, so leading,
/// trailing, and repeated whitespace never inflate the count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// One recorded question/answer exchange.
///
/// Entries are immutable after creation; the store removes them only through
/// eviction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Creation-time token issued by the store, unique and monotonically
    /// increasing.
    pub id: u64,

    /// Question text as submitted.
    pub question: String,

    /// Single-line answer heading.
    pub title: String,

    /// Explanatory paragraphs, in order.
    pub explanation: Vec<String>,

    /// Practical guidance paragraphs, in order.
    pub practical_guidance: Vec<String>,

    /// Closing notes, in order.
    pub notes: Vec<String>,

    /// Creation time.
    pub timestamp: DateTime<Utc>,

    // Cached at creation; must always equal the recomputed count.
    word_count: usize,
}

impl Entry {
    pub(crate) fn new(id: u64, question: &str, payload: AnswerPayload) -> Self {
        let word_count = count_words(&payload.title)
            + payload.explanation.iter().map(|s| count_words(s)).sum::<usize>()
            + payload
                .practical_guidance
                .iter()
                .map(|s| count_words(s))
                .sum::<usize>()
            + payload.notes.iter().map(|s| count_words(s)).sum::<usize>();

        Self {
            id,
            question: question.to_string(),
            title: payload.title,
            explanation: payload.explanation,
            practical_guidance: payload.practical_guidance,
            notes: payload.notes,
            timestamp: Utc::now(),
            word_count,
        }
    }

    /// Word count cached when the entry was created.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Recount words across all text fields.
    ///
    /// The cached [`word_count`](Self::word_count) must always equal this.
    pub fn recount_words(&self) -> usize {
        count_words(&self.title)
            + self.explanation.iter().map(|s| count_words(s)).sum::<usize>()
            + self
                .practical_guidance
                .iter()
                .map(|s| count_words(s))
                .sum::<usize>()
            + self.notes.iter().map(|s| count_words(s)).sum::<usize>()
    }
}
