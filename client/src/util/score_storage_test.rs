#![allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use super::*;

fn entry(score: u32, timestamp: f64) -> ScoreEntry {
    ScoreEntry { score, timestamp }
}

// --- push_recent ---

#[test]
fn push_recent_prepends_newest_first() {
    let history = push_recent(vec![entry(50, 1.0)], entry(80, 2.0));
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], entry(80, 2.0));
    assert_eq!(history[1], entry(50, 1.0));
}

#[test]
fn push_recent_truncates_to_the_limit() {
    let full: Vec<ScoreEntry> = (0..RECENT_SCORES_LIMIT).map(|k| entry(k as u32, k as f64)).collect();
    let history = push_recent(full, entry(99, 100.0));
    assert_eq!(history.len(), RECENT_SCORES_LIMIT);
    assert_eq!(history[0], entry(99, 100.0));
    // The oldest entry fell off the end.
    assert_eq!(history[RECENT_SCORES_LIMIT - 1].score, 3);
}

#[test]
fn push_recent_into_empty_history() {
    let history = push_recent(Vec::new(), entry(42, 7.0));
    assert_eq!(history, vec![entry(42, 7.0)]);
}

// --- serialization ---

#[test]
fn score_entry_round_trips_through_json() {
    let original = entry(87, 1_700_000_000_000.0);
    let json = serde_json::to_string(&original).expect("serialize entry");
    let back: ScoreEntry = serde_json::from_str(&json).expect("deserialize entry");
    assert_eq!(original, back);
}

#[test]
fn history_deserializes_from_stored_shape() {
    let json = r#"[{"score":91,"timestamp":1000.0},{"score":40,"timestamp":900.0}]"#;
    let history: Vec<ScoreEntry> = serde_json::from_str(json).expect("deserialize history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].score, 91);
}

// --- storage-less behavior (no browser in unit tests) ---

#[test]
fn reads_degrade_to_no_score_without_a_backing_store() {
    assert_eq!(high_score(), 0);
    assert!(recent_scores().is_empty());
}

#[test]
fn save_reports_outcome_even_without_a_backing_store() {
    let outcome = save_score(75);
    assert_eq!(outcome.previous_best, 0);
    assert!(outcome.new_high);

    let outcome = save_score(0);
    assert!(!outcome.new_high);
}
