use super::*;

// --- Screen ---

#[test]
fn default_screen_is_start() {
    assert_eq!(Screen::default(), Screen::Start);
}

#[test]
fn screen_variants_are_distinct() {
    assert_ne!(Screen::Start, Screen::Drawing);
    assert_ne!(Screen::Drawing, Screen::Result);
    assert_ne!(Screen::Start, Screen::Result);
}

// --- accept_score ---

#[test]
fn accepts_and_rounds_valid_scores() {
    assert_eq!(accept_score(0.0), Some(0));
    assert_eq!(accept_score(1.0), Some(100));
    assert_eq!(accept_score(0.954), Some(95));
    assert_eq!(accept_score(0.956), Some(96));
    assert_eq!(accept_score(0.005), Some(1));
}

#[test]
fn rejects_out_of_range_scores() {
    assert_eq!(accept_score(-0.01), None);
    assert_eq!(accept_score(1.01), None);
    assert_eq!(accept_score(42.0), None);
}

#[test]
fn rejects_non_finite_scores() {
    assert_eq!(accept_score(f64::NAN), None);
    assert_eq!(accept_score(f64::INFINITY), None);
    assert_eq!(accept_score(f64::NEG_INFINITY), None);
}
