//! Timed, line-by-line reveal of an answer.
//!
//! An entry flattens into typed lines; playback emits them into an
//! append-only sink with type-dependent pacing, the "ink appearing on the
//! page" effect. Each playback is a tagged session with an abortable task,
//! and a superseding [`RevealScheduler::play`] cancels the one still in
//! flight.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::debug;

use crate::entry::Entry;

/// Pause added after a title line, in milliseconds.
const TITLE_PAUSE_MS: u64 = 600;

/// Pause added after any other line, in milliseconds.
const LINE_PAUSE_MS: u64 = 300;

/// The section a revealed line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Title,
    Explanation,
    Guidance,
    Note,
}

/// One line of an answer with its reveal offset from playback start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLine {
    pub kind: LineKind,
    pub text: String,
    pub offset_ms: u64,
}

/// The flattened, time-ordered reveal of one entry.
#[derive(Debug, Clone)]
pub struct RevealPlan {
    pub lines: Vec<PlannedLine>,
}

impl RevealPlan {
    /// Flatten an entry into typed lines: title, then explanation, then
    /// guidance, then notes.
    ///
    /// The first line reveals at offset 0. A title adds a 600 ms pause before
    /// the next line; any other line adds 300 ms.
    pub fn for_entry(entry: &Entry) -> Self {
        let mut flat: Vec<(LineKind, &str)> = Vec::new();
        flat.push((LineKind::Title, entry.title.as_str()));
        flat.extend(entry.explanation.iter().map(|t| (LineKind::Explanation, t.as_str())));
        flat.extend(
            entry
                .practical_guidance
                .iter()
                .map(|t| (LineKind::Guidance, t.as_str())),
        );
        flat.extend(entry.notes.iter().map(|t| (LineKind::Note, t.as_str())));

        let mut lines = Vec::with_capacity(flat.len());
        let mut offset_ms = 0u64;
        for (kind, text) in flat {
            lines.push(PlannedLine {
                kind,
                text: text.to_string(),
                offset_ms,
            });
            offset_ms += match kind {
                LineKind::Title => TITLE_PAUSE_MS,
                _ => LINE_PAUSE_MS,
            };
        }

        Self { lines }
    }
}

/// A line delivered to the reveal sink.
///
/// Carries its session id so consumers can discard stragglers from a
/// superseded playback.
#[derive(Debug, Clone)]
pub struct RevealedLine {
    pub session: u64,
    pub kind: LineKind,
    pub text: String,
}

/// Handle describing one started playback.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackHandle {
    /// Session id tagged onto every line this playback emits.
    pub session: u64,
    /// Number of lines the playback will emit if it runs to completion.
    pub line_count: usize,
}

struct PlaybackSession {
    id: u64,
    task: JoinHandle<()>,
}

/// Drives timed playback of entries into an output sink.
///
/// Within one session, lines are emitted strictly in flattening order with
/// non-decreasing timestamps; the sink is append-only and never reordered.
pub struct RevealScheduler {
    tx: UnboundedSender<RevealedLine>,
    next_session: u64,
    current: Option<PlaybackSession>,
}

impl RevealScheduler {
    /// Create a scheduler and the receiving end of its reveal sink.
    pub fn new() -> (Self, UnboundedReceiver<RevealedLine>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            next_session: 0,
            current: None,
        };
        (scheduler, rx)
    }

    /// Start revealing `entry`, cancelling any playback still in flight.
    pub fn play(&mut self, entry: &Entry) -> PlaybackHandle {
        if let Some(prev) = self.current.take() {
            if !prev.task.is_finished() {
                prev.task.abort();
                debug!("[REVEAL]  Session {} superseded", prev.id);
            }
        }

        self.next_session += 1;
        let session = self.next_session;
        let plan = RevealPlan::for_entry(entry);
        let line_count = plan.lines.len();
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            let mut elapsed_ms = 0u64;
            for line in plan.lines {
                if line.offset_ms > elapsed_ms {
                    sleep(Duration::from_millis(line.offset_ms - elapsed_ms)).await;
                    elapsed_ms = line.offset_ms;
                }
                let revealed = RevealedLine {
                    session,
                    kind: line.kind,
                    text: line.text,
                };
                if tx.send(revealed).is_err() {
                    // Sink dropped; nobody is reading the page anymore.
                    return;
                }
            }
        });

        self.current = Some(PlaybackSession { id: session, task });
        PlaybackHandle {
            session,
            line_count,
        }
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        if let Some(session) = self.current.take() {
            session.task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::AnswerPayload;

    fn entry(title: &str, explanation: &[&str], guidance: &[&str], notes: &[&str]) -> Entry {
        let payload = AnswerPayload {
            title: title.to_string(),
            explanation: explanation.iter().map(|s| s.to_string()).collect(),
            practical_guidance: guidance.iter().map(|s| s.to_string()).collect(),
            notes: notes.iter().map(|s| s.to_string()).collect(),
        };
        Entry::new(1, "q", payload)
    }

    #[test]
    fn test_plan_offsets_and_order() {
        let plan = RevealPlan::for_entry(&entry("T", &["E1"], &[], &["N1"]));

        let kinds: Vec<LineKind> = plan.lines.iter().map(|l| l.kind).collect();
        let offsets: Vec<u64> = plan.lines.iter().map(|l| l.offset_ms).collect();
        assert_eq!(kinds, vec![LineKind::Title, LineKind::Explanation, LineKind::Note]);
        assert_eq!(offsets, vec![0, 600, 900]);
    }

    #[test]
    fn test_plan_flattens_all_sections_in_order() {
        let plan = RevealPlan::for_entry(&entry(
            "T",
            &["E1", "E2"],
            &["G1", "G2"],
            &["N1"],
        ));

        let kinds: Vec<LineKind> = plan.lines.iter().map(|l| l.kind).collect();
        let offsets: Vec<u64> = plan.lines.iter().map(|l| l.offset_ms).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Title,
                LineKind::Explanation,
                LineKind::Explanation,
                LineKind::Guidance,
                LineKind::Guidance,
                LineKind::Note,
            ]
        );
        assert_eq!(offsets, vec![0, 600, 900, 1200, 1500, 1800]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_playback_emits_lines_in_flattening_order() {
        let (mut scheduler, mut rx) = RevealScheduler::new();
        let handle = scheduler.play(&entry("T", &["E1"], &[], &["N1"]));
        assert_eq!(handle.line_count, 3);

        let mut received = Vec::new();
        for _ in 0..handle.line_count {
            let line = rx.recv().await.expect("line emitted");
            assert_eq!(line.session, handle.session);
            received.push((line.kind, line.text));
        }

        assert_eq!(
            received,
            vec![
                (LineKind::Title, "T".to_string()),
                (LineKind::Explanation, "E1".to_string()),
                (LineKind::Note, "N1".to_string()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseding_play_cancels_prior_session() {
        let (mut scheduler, mut rx) = RevealScheduler::new();

        // First playback never gets to run: it is aborted before its task is
        // polled, so no session-1 line reaches the sink.
        let first = scheduler.play(&entry("Old", &["stale line"], &[], &[]));
        let second = scheduler.play(&entry("New", &["fresh line"], &[], &[]));
        assert_ne!(first.session, second.session);

        let mut received = Vec::new();
        for _ in 0..second.line_count {
            let line = rx.recv().await.expect("line emitted");
            received.push(line);
        }

        assert!(received.iter().all(|l| l.session == second.session));
        assert_eq!(received[0].text, "New");
        assert_eq!(received[1].text, "fresh line");
        assert!(rx.try_recv().is_err());
    }
}
