//! Bookmarks: user-created pins that exempt entries from eviction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pin on one entry.
///
/// `entry_id` is a weak reference: the bookmark does not own the entry and
/// must tolerate it being gone. Resolve through
/// [`AnswerStore::entry_for`](crate::store::AnswerStore::entry_for); a miss
/// is rendered as unavailable, never treated as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    /// Creation-time token, drawn from a counter distinct from entry ids.
    pub id: u64,

    /// Id of the pinned entry.
    pub entry_id: u64,

    /// Snapshot of the originating question text, not re-derived.
    pub title: String,

    /// Creation time.
    pub timestamp: DateTime<Utc>,

    /// Scroll offset of the page when the bookmark was placed.
    pub scroll_position: f64,
}
