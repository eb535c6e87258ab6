//! Scene rendering: guide circle, center dot, and the in-progress stroke.
//!
//! All geometry is in CSS pixels; the device pixel ratio is applied once as
//! a canvas transform so line widths stay crisp on high-DPI displays.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{
    CENTER_DOT_COLOR, CENTER_DOT_RADIUS_PX, GUIDE_RING_COLOR, GUIDE_RING_DASH_PX,
    GUIDE_RING_WIDTH_PX, STROKE_COLOR, STROKE_WIDTH_PX,
};
use crate::engine::EngineCore;

/// Draw the full scene for `core` onto `canvas`.
pub(crate) fn draw_scene(canvas: &HtmlCanvasElement, core: &EngineCore) -> Result<(), JsValue> {
    let Ok(Some(ctx_value)) = canvas.get_context("2d") else {
        return Err(JsValue::from_str("2d context unavailable"));
    };
    let ctx: CanvasRenderingContext2d = ctx_value.dyn_into()?;

    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    draw_guide(&ctx, core)?;
    draw_stroke(&ctx, core)?;
    Ok(())
}

/// The dashed guide ring and the center dot the player aims around.
fn draw_guide(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let reference = core.reference();
    if reference.radius <= 0.0 {
        return Ok(());
    }

    let (dash_on, dash_off) = GUIDE_RING_DASH_PX;
    let dash = js_sys::Array::of2(&JsValue::from_f64(dash_on), &JsValue::from_f64(dash_off));
    ctx.set_line_dash(&dash)?;
    ctx.set_stroke_style_str(GUIDE_RING_COLOR);
    ctx.set_line_width(GUIDE_RING_WIDTH_PX);
    ctx.begin_path();
    ctx.arc(reference.x, reference.y, reference.radius, 0.0, TAU)?;
    ctx.stroke();
    ctx.set_line_dash(&js_sys::Array::new())?;

    ctx.set_fill_style_str(CENTER_DOT_COLOR);
    ctx.begin_path();
    ctx.arc(reference.x, reference.y, CENTER_DOT_RADIUS_PX, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

/// The player's stroke as a round-capped polyline.
fn draw_stroke(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let points = core.stroke.points();
    if points.len() < 2 {
        return Ok(());
    }

    ctx.set_stroke_style_str(STROKE_COLOR);
    ctx.set_line_width(STROKE_WIDTH_PX);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    for point in &points[1..] {
        ctx.line_to(point.x, point.y);
    }
    ctx.stroke();
    Ok(())
}
