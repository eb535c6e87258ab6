//! Input model: the gesture state machine and the pointer sampling filter.
//!
//! The game tracks exactly one gesture: a continuous pointer drag from
//! pointer-down to pointer-up. `InputState` is the active gesture being
//! tracked; the sampling filter decides which raw pointer positions become
//! stroke samples so densely reported or jittery devices don't flood the
//! buffer with near-duplicate points.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use scoring::geometry::Point;

use crate::consts::MIN_SAMPLE_DIST_PX;

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging out a stroke.
    Drawing,
}

impl InputState {
    /// Whether a stroke is currently being drawn.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Drawing)
    }
}

/// Whether `next` has moved far enough from the last accepted sample.
///
/// Non-finite candidates yield a non-finite distance and are rejected here;
/// the scorer still tolerates malformed samples if any reach it another way.
#[must_use]
pub fn should_sample(last: Point, next: Point) -> bool {
    last.distance_to(next) >= MIN_SAMPLE_DIST_PX
}
