//! Shared numeric constants for the drawing canvas.

// ── Sampling ────────────────────────────────────────────────────

/// Minimum pixel distance between consecutive accepted stroke samples.
pub const MIN_SAMPLE_DIST_PX: f64 = 2.0;

/// Hard cap on stroke length; samples beyond this are dropped.
pub const MAX_STROKE_POINTS: usize = 2000;

/// Strokes with fewer samples than this are rejected before scoring.
pub const MIN_STROKE_POINTS: usize = 20;

// ── Rendering ───────────────────────────────────────────────────

/// Radius of the dot marking the guide circle's center, in CSS pixels.
pub const CENTER_DOT_RADIUS_PX: f64 = 4.0;

/// Line width of the dashed guide ring, in CSS pixels.
pub const GUIDE_RING_WIDTH_PX: f64 = 2.0;

/// Dash pattern for the guide ring: on, off.
pub const GUIDE_RING_DASH_PX: (f64, f64) = (8.0, 6.0);

/// Line width of the player's stroke, in CSS pixels.
pub const STROKE_WIDTH_PX: f64 = 8.0;

/// Fill color for the center dot.
pub const CENTER_DOT_COLOR: &str = "#ffffff";

/// Stroke color for the dashed guide ring.
pub const GUIDE_RING_COLOR: &str = "rgba(255, 255, 255, 0.25)";

/// Stroke color for the player's path.
pub const STROKE_COLOR: &str = "rgba(120, 255, 120, 0.8)";
