//! Durable score persistence: running best and recent attempts.
//!
//! Scores are stored as integer percentages — the best under one key, the
//! five most recent attempts (with timestamps) as JSON under another. The
//! backing store is browser localStorage; when it is absent or corrupted
//! every read degrades to "no score" and writes are silently best-effort.

#[cfg(test)]
#[path = "score_storage_test.rs"]
mod score_storage_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

const HIGH_SCORE_KEY: &str = "perfect-circle-high-score";
const RECENT_SCORES_KEY: &str = "perfect-circle-recent-scores";

/// How many recent attempts are kept.
pub const RECENT_SCORES_LIMIT: usize = 5;

/// One persisted attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Integer percentage, 0–100.
    pub score: u32,
    /// Milliseconds since the Unix epoch when the attempt finished.
    pub timestamp: f64,
}

/// Outcome of persisting a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveOutcome {
    /// Best score before this attempt, 0 when none was stored.
    pub previous_best: u32,
    /// Whether this attempt beat the stored best.
    pub new_high: bool,
}

/// The stored best score, or 0 when none exists.
#[must_use]
pub fn high_score() -> u32 {
    storage::load_raw(HIGH_SCORE_KEY)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0)
}

/// The most recent attempts, newest first. Empty when nothing is stored.
#[must_use]
pub fn recent_scores() -> Vec<ScoreEntry> {
    storage::load_json(RECENT_SCORES_KEY).unwrap_or_default()
}

/// Persist a finished attempt: update the best if beaten and prepend it to
/// the recent history.
pub fn save_score(score: u32) -> SaveOutcome {
    let previous_best = high_score();
    let new_high = score > previous_best;
    if new_high {
        storage::save_raw(HIGH_SCORE_KEY, &score.to_string());
    }

    let entry = ScoreEntry { score, timestamp: now_ms() };
    let history = push_recent(recent_scores(), entry);
    storage::save_json(RECENT_SCORES_KEY, &history);

    SaveOutcome { previous_best, new_high }
}

/// Prepend `entry` and keep at most [`RECENT_SCORES_LIMIT`] attempts.
#[must_use]
pub fn push_recent(mut history: Vec<ScoreEntry>, entry: ScoreEntry) -> Vec<ScoreEntry> {
    history.insert(0, entry);
    history.truncate(RECENT_SCORES_LIMIT);
    history
}

fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
