//! Perfect Circle game client.
//!
//! Single-screen Leptos app: the player is dared to trace a perfect circle,
//! draws one stroke on the canvas, and gets a percentage score with a local
//! best/recent history. The heavy lifting lives elsewhere — gesture capture
//! and scoring in the `canvas` and `scoring` crates — this crate owns screen
//! flow, presentation, and localStorage persistence.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and screen orchestration |
//! | [`components`] | Screens and widgets |
//! | [`state`] | Screen-flow state and score validation |
//! | [`util`] | Theme, storage, feedback copy, pointer helpers |

pub mod app;
pub mod components;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: initialize logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    util::dark_mode::apply(util::dark_mode::read_preference());
    leptos::mount::mount_to_body(app::App);
}
