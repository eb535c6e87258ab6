//! The drawing engine: gesture handling, guide-circle layout, and scoring.

use web_sys::HtmlCanvasElement;

use scoring::geometry::{Point, ReferenceCircle};
use scoring::score::{Mode, circularity};

use crate::consts::MIN_STROKE_POINTS;
use crate::input::InputState;
use crate::render;
use crate::stroke::StrokeBuffer;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The scene changed and should be redrawn.
    RenderNeeded,
    /// The gesture ended with too few samples to judge; the stroke was discarded.
    StrokeRejected,
    /// The gesture ended and the stroke was scored, in [0, 1].
    StrokeScored(f64),
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub stroke: StrokeBuffer,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    reference: ReferenceCircle,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            stroke: StrokeBuffer::new(),
            input: InputState::default(),
            reference: ReferenceCircle::fit(0.0, 0.0),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    ///
    /// Re-derives the guide circle: centered, radius 35% of the smaller side.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.reference = ReferenceCircle::fit(width_css, height_css);
    }

    /// The guide circle for the current viewport.
    #[must_use]
    pub fn reference(&self) -> ReferenceCircle {
        self.reference
    }

    // --- Input events ---

    /// Begin a new stroke at `point`, discarding any previous one.
    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Action> {
        self.input = InputState::Drawing;
        self.stroke.begin(point);
        vec![Action::RenderNeeded]
    }

    /// Append a sample while drawing. Filtered samples produce no action.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        if !self.input.is_drawing() {
            return Vec::new();
        }
        if self.stroke.push(point) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// End the gesture and judge the stroke.
    ///
    /// Scoring happens exactly once per completed stroke, here. Strokes with
    /// fewer than [`MIN_STROKE_POINTS`] samples are rejected and discarded so
    /// stray taps never reach the scorer.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if !self.input.is_drawing() {
            return Vec::new();
        }
        self.input = InputState::Idle;

        if self.stroke.len() < MIN_STROKE_POINTS {
            self.stroke.clear();
            return vec![Action::StrokeRejected, Action::RenderNeeded];
        }

        let score = circularity(self.stroke.points(), Mode::Reference(self.reference));
        vec![Action::StrokeScored(score), Action::RenderNeeded]
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Update viewport dimensions and resize the canvas backing store to
    /// match the device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((width_css * self.core.dpr).round().max(1.0) as u32);
            self.canvas.set_height((height_css * self.core.dpr).round().max(1.0) as u32);
        }
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Action> {
        self.core.on_pointer_down(point)
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        self.core.on_pointer_move(point)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    // --- Render ---

    /// Draw the current state to the canvas. Draw failures are logged, not
    /// propagated — a dropped frame is recoverable.
    pub fn render(&self) {
        if let Err(err) = render::draw_scene(&self.canvas, &self.core) {
            web_sys::console::warn_1(&err);
        }
    }
}
