//! Geometric primitives shared by the scorer, the canvas engine, and the client.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// Fraction of the smaller viewport dimension used for the guide radius.
const GUIDE_RADIUS_RATIO: f64 = 0.35;

/// A sampled stroke point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The guide circle the player is asked to trace.
///
/// Fixed for the duration of one drawing attempt; all stroke points are
/// judged in the same pixel coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl ReferenceCircle {
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// Center the guide circle in a viewport, radius 35% of the smaller side.
    #[must_use]
    pub fn fit(width: f64, height: f64) -> Self {
        Self {
            x: width / 2.0,
            y: height / 2.0,
            radius: width.min(height) * GUIDE_RADIUS_RATIO,
        }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Arithmetic mean position of the finite points in `points`.
///
/// Non-finite samples are ignored so one corrupted coordinate cannot poison
/// the inferred center. Returns the origin when no finite point exists.
#[must_use]
pub fn centroid(points: &[Point]) -> Point {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut count: u32 = 0;

    for point in points {
        if point.is_finite() {
            sum_x += point.x;
            sum_y += point.y;
            count += 1;
        }
    }

    if count == 0 {
        return Point::new(0.0, 0.0);
    }
    Point::new(sum_x / f64::from(count), sum_y / f64::from(count))
}
