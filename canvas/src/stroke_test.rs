use super::*;

use crate::consts::MIN_SAMPLE_DIST_PX;

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_buffer_is_empty() {
    let buffer = StrokeBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
    assert!(buffer.points().is_empty());
}

#[test]
fn begin_seeds_the_first_sample() {
    let mut buffer = StrokeBuffer::new();
    buffer.begin(Point::new(10.0, 20.0));
    assert_eq!(buffer.points(), &[Point::new(10.0, 20.0)]);
}

#[test]
fn begin_discards_a_previous_stroke() {
    let mut buffer = StrokeBuffer::new();
    buffer.begin(Point::new(0.0, 0.0));
    assert!(buffer.push(Point::new(10.0, 0.0)));
    buffer.begin(Point::new(99.0, 99.0));
    assert_eq!(buffer.points(), &[Point::new(99.0, 99.0)]);
}

#[test]
fn clear_empties_the_buffer() {
    let mut buffer = StrokeBuffer::new();
    buffer.begin(Point::new(0.0, 0.0));
    buffer.clear();
    assert!(buffer.is_empty());
}

// =============================================================
// Sampling policy
// =============================================================

#[test]
fn push_preserves_temporal_order() {
    let mut buffer = StrokeBuffer::new();
    buffer.begin(Point::new(0.0, 0.0));
    assert!(buffer.push(Point::new(5.0, 0.0)));
    assert!(buffer.push(Point::new(10.0, 0.0)));
    assert_eq!(
        buffer.points(),
        &[Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(10.0, 0.0)]
    );
}

#[test]
fn push_filters_near_duplicates() {
    let mut buffer = StrokeBuffer::new();
    buffer.begin(Point::new(0.0, 0.0));
    assert!(!buffer.push(Point::new(0.5, 0.5)));
    assert_eq!(buffer.len(), 1);
}

#[test]
fn filter_measures_from_the_last_accepted_sample() {
    let mut buffer = StrokeBuffer::new();
    buffer.begin(Point::new(0.0, 0.0));
    // Two sub-threshold nudges that together pass the threshold: the second
    // is measured against the accepted point at the origin, not the first.
    assert!(!buffer.push(Point::new(1.2, 0.0)));
    assert!(buffer.push(Point::new(MIN_SAMPLE_DIST_PX, 0.0)));
    assert_eq!(buffer.len(), 2);
}

#[test]
fn push_into_empty_buffer_is_unfiltered() {
    let mut buffer = StrokeBuffer::new();
    assert!(buffer.push(Point::new(3.0, 4.0)));
    assert_eq!(buffer.len(), 1);
}

#[test]
fn push_stops_at_the_point_cap() {
    let mut buffer = StrokeBuffer::new();
    buffer.begin(Point::new(0.0, 0.0));
    #[allow(clippy::cast_precision_loss)]
    for k in 1..(MAX_STROKE_POINTS + 100) {
        buffer.push(Point::new(k as f64 * 3.0, 0.0));
    }
    assert_eq!(buffer.len(), MAX_STROKE_POINTS);

    // Far away, but the buffer is full.
    assert!(!buffer.push(Point::new(1_000_000.0, 0.0)));
    assert_eq!(buffer.len(), MAX_STROKE_POINTS);
}
