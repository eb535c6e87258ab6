//! The circularity scorer.
//!
//! One public entry point, [`circularity`], judges a completed stroke in one
//! of two modes:
//!
//! - [`Mode::Reference`] — the stroke is compared against the fixed guide
//!   circle the player was asked to trace. Closure is a hard gate; the score
//!   blends deviation-from-ring with path smoothness.
//! - [`Mode::Freeform`] — no guide circle; the stroke is compared against its
//!   own centroid, blending radius consistency, smoothness, and a soft
//!   closure sub-score.
//!
//! The scorer is a pure function of its inputs: deterministic, allocation
//! free apart from the freeform distance pass, and it never panics —
//! malformed samples contribute worst-case deviations instead of aborting.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

use std::f64::consts::TAU;

use crate::geometry::{Point, ReferenceCircle, centroid};

/// Strokes with fewer points than this cannot be judged and score 0.
pub const MIN_POINTS: usize = 10;

/// Closure gate threshold as a fraction of the reference radius.
const CLOSURE_GATE_RATIO: f64 = 0.4;

/// Slope of the linear deviation penalty in reference mode.
const DEVIATION_PENALTY: f64 = 1.5;

const REFERENCE_DEVIATION_WEIGHT: f64 = 0.8;
const REFERENCE_SMOOTHNESS_WEIGHT: f64 = 0.2;

const FREEFORM_RADIUS_WEIGHT: f64 = 0.5;
const FREEFORM_SMOOTHNESS_WEIGHT: f64 = 0.3;
const FREEFORM_CLOSURE_WEIGHT: f64 = 0.2;

/// Soft-closure tolerance in freeform mode, as a fraction of the mean radius.
const FREEFORM_CLOSURE_RATIO: f64 = 0.3;

/// Freeform strokes with a mean radius below this are too small to judge.
const MIN_MEANINGFUL_RADIUS: f64 = 10.0;

/// Target number of samples for the smoothness pass.
const SMOOTHNESS_SAMPLES: usize = 50;

/// Direction vectors shorter than this are degenerate and skipped.
const MIN_SEGMENT_LENGTH: f64 = 0.1;

/// How a stroke is judged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Judge against the fixed guide circle the player was asked to trace.
    Reference(ReferenceCircle),
    /// Judge general circularity against the stroke's own centroid.
    Freeform,
}

/// Score how closely `points` approximates a circle.
///
/// Returns a value in [0, 1]; 1 is a perfect circle, 0 is not circular, not
/// closed, or degenerate input. Strokes shorter than [`MIN_POINTS`] score 0.
#[must_use]
pub fn circularity(points: &[Point], mode: Mode) -> f64 {
    if points.len() < MIN_POINTS {
        return 0.0;
    }

    match mode {
        Mode::Reference(circle) => reference_score(points, circle),
        Mode::Freeform => freeform_score(points),
    }
}

/// Reference mode: closure gate, then deviation 0.8 / smoothness 0.2.
#[allow(clippy::cast_precision_loss)]
fn reference_score(points: &[Point], circle: ReferenceCircle) -> f64 {
    // A circle must return near its start. Non-finite endpoints fall through
    // to the deviation pass as worst-case samples instead of short-circuiting.
    let closure = points[0].distance_to(points[points.len() - 1]);
    if closure.is_finite() && closure > circle.radius * CLOSURE_GATE_RATIO {
        return 0.0;
    }

    let deviation_sum: f64 = points.iter().map(|p| ring_deviation(*p, circle)).sum();
    let avg_deviation = deviation_sum / points.len() as f64;
    let deviation_score = (1.0 - avg_deviation * DEVIATION_PENALTY).max(0.0);

    let smoothness = smoothness_score(points);

    let blended =
        deviation_score * REFERENCE_DEVIATION_WEIGHT + smoothness * REFERENCE_SMOOTHNESS_WEIGHT;
    blended.clamp(0.0, 1.0)
}

/// Relative deviation of one point from the reference ring, in [0, 1].
///
/// Worst case (1.0) for malformed samples or a degenerate radius.
fn ring_deviation(point: Point, circle: ReferenceCircle) -> f64 {
    if !point.is_finite() {
        return 1.0;
    }
    if circle.radius <= 0.0 || !circle.radius.is_finite() {
        return 1.0;
    }

    let dist = point.distance_to(circle.center());
    if !dist.is_finite() {
        return 1.0;
    }
    (dist - circle.radius).abs() / circle.radius
}

/// Freeform mode: radius consistency 0.5 / smoothness 0.3 / closure 0.2.
#[allow(clippy::cast_precision_loss)]
fn freeform_score(points: &[Point]) -> f64 {
    let center = centroid(points);

    // Malformed samples collapse to distance zero — the worst case for the
    // radius consistency pass.
    let distances: Vec<f64> = points
        .iter()
        .map(|p| if p.is_finite() { p.distance_to(center) } else { 0.0 })
        .collect();
    let count = distances.len() as f64;
    let avg_radius = distances.iter().sum::<f64>() / count;

    if !avg_radius.is_finite() || avg_radius < MIN_MEANINGFUL_RADIUS {
        return 0.0;
    }

    let variance = distances.iter().map(|d| (d - avg_radius).powi(2)).sum::<f64>() / count;
    let std_dev = variance.sqrt();
    let radius_score = if std_dev.is_finite() {
        (1.0 - (std_dev / avg_radius) * 2.0).max(0.0)
    } else {
        0.0
    };

    let smoothness = smoothness_score(points);

    let closure = points[0].distance_to(points[points.len() - 1]);
    let closure_score = if closure.is_finite() {
        (1.0 - closure / (avg_radius * FREEFORM_CLOSURE_RATIO)).max(0.0)
    } else {
        0.0
    };

    let blended = radius_score * FREEFORM_RADIUS_WEIGHT
        + smoothness * FREEFORM_SMOOTHNESS_WEIGHT
        + closure_score * FREEFORM_CLOSURE_WEIGHT;
    blended.clamp(0.0, 1.0)
}

/// Consistency of directional turning along the stroke.
///
/// The stroke is sampled at a stride of roughly `len / 50` so densely
/// sampled regions are not over-weighted. Each sampled triple contributes
/// the turn angle between its two direction vectors; the accumulated turning
/// is compared against the constant turning rate of an ideal circle over the
/// same sampled span.
#[allow(clippy::cast_precision_loss)]
fn smoothness_score(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let step = (points.len() / SMOOTHNESS_SAMPLES).max(1);
    let mut total_turning = 0.0;
    let mut valid_samples: usize = 0;

    let mut i = step;
    while i + step < points.len() {
        let prev = points[i - step];
        let curr = points[i];
        let next = points[i + step];

        let v1 = (curr.x - prev.x, curr.y - prev.y);
        let v2 = (next.x - curr.x, next.y - curr.y);
        let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
        let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

        // Degenerate or malformed segments don't count as samples.
        if mag1 < MIN_SEGMENT_LENGTH
            || mag2 < MIN_SEGMENT_LENGTH
            || !mag1.is_finite()
            || !mag2.is_finite()
        {
            i += step;
            continue;
        }

        let dot = v1.0 * v2.0 + v1.1 * v2.1;
        let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
        total_turning += cos_angle.acos();
        valid_samples += 1;
        i += step;
    }

    if valid_samples == 0 {
        return 0.0;
    }

    // An ideal circle turns through 2π over a full loop, so the sampled span
    // (valid_samples triples, each spanning `step` of `len` points) should
    // accumulate 2π scaled by the fraction of the loop it covers.
    let expected = TAU * (valid_samples * step) as f64 / points.len() as f64;
    if !expected.is_finite() || expected == 0.0 {
        return 0.0;
    }

    let deviation = (total_turning - expected).abs() / expected;
    if deviation.is_finite() {
        (1.0 - deviation * 0.5).max(0.0)
    } else {
        0.0
    }
}
