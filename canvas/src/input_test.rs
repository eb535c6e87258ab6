use super::*;

// =============================================================
// InputState
// =============================================================

#[test]
fn default_state_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn is_drawing_matches_variant() {
    assert!(!InputState::Idle.is_drawing());
    assert!(InputState::Drawing.is_drawing());
}

// =============================================================
// should_sample
// =============================================================

#[test]
fn accepts_points_past_the_minimum_distance() {
    let last = Point::new(100.0, 100.0);
    assert!(should_sample(last, Point::new(103.0, 100.0)));
    assert!(should_sample(last, Point::new(100.0, 97.0)));
}

#[test]
fn accepts_points_exactly_at_the_minimum_distance() {
    let last = Point::new(0.0, 0.0);
    assert!(should_sample(last, Point::new(MIN_SAMPLE_DIST_PX, 0.0)));
}

#[test]
fn rejects_near_duplicate_points() {
    let last = Point::new(100.0, 100.0);
    assert!(!should_sample(last, Point::new(100.0, 100.0)));
    assert!(!should_sample(last, Point::new(101.0, 100.5)));
}

#[test]
fn rejects_non_finite_candidates() {
    let last = Point::new(100.0, 100.0);
    assert!(!should_sample(last, Point::new(f64::NAN, 100.0)));
    assert!(!should_sample(last, Point::new(100.0, f64::INFINITY)));
}
