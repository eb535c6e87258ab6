//! Pointer event mapping for the drawing canvas.

#[cfg(feature = "csr")]
use scoring::geometry::Point;

/// Pointer position in canvas-local CSS pixels.
#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Canvas side length for the current window: full width minus a margin,
/// capped at 600 CSS pixels.
#[cfg(feature = "csr")]
pub fn canvas_size() -> f64 {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(640.0);
    (width - 40.0).clamp(200.0, 600.0)
}

/// Device pixel ratio, defaulting to 1 outside a browser.
#[cfg(feature = "csr")]
pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}
