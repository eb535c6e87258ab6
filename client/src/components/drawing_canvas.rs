//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns sampling and scoring; this host maps pointer events
//! into engine calls and turns the resulting actions into screen flow
//! (feedback messages, the completion callback).

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};

#[cfg(feature = "csr")]
use crate::state::game::accept_score;
#[cfg(feature = "csr")]
use crate::util::canvas_input::{canvas_size, device_pixel_ratio, pointer_point};
use crate::util::feedback::DRAW_PROMPT;
#[cfg(feature = "csr")]
use crate::util::feedback::{INCOMPLETE_STROKE, RETRY_PROMPT};

/// The drawing screen: guide circle, stroke, and a feedback line.
///
/// `on_complete` fires once per finished stroke with the validated integer
/// percentage — never mid-gesture.
#[component]
pub fn DrawingCanvas(on_complete: Callback<u32>) -> impl IntoView {
    let feedback = RwSignal::new(String::new());
    let drawing = RwSignal::new(false);
    let size = RwSignal::new(600.0_f64);
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let canvas_ref_mount = canvas_ref.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let side = canvas_size();
            size.set(side);
            let mut instance = Engine::new(canvas);
            instance.set_viewport(side, side, device_pixel_ratio());
            instance.render();
            *engine.borrow_mut() = Some(instance);
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                feedback.set(String::new());
                drawing.set(true);
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_down(pointer_point(&ev));
                    handle_actions(actions, engine, feedback, on_complete);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_move(pointer_point(&ev));
                    handle_actions(actions, engine, feedback, on_complete);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                drawing.set(false);
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_up();
                    handle_actions(actions, engine, feedback, on_complete);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {
                let _ = on_complete;
            }
        }
    };

    view! {
        <div class="drawing-screen">
            <div class="drawing-screen__status">
                <Show when=move || !feedback.get().is_empty()>
                    <p class="drawing-screen__feedback">{move || feedback.get()}</p>
                </Show>
                <Show when=move || feedback.get().is_empty() && !drawing.get()>
                    <p class="drawing-screen__prompt">{DRAW_PROMPT}</p>
                </Show>
            </div>
            <canvas
                class="drawing-screen__canvas"
                node_ref=canvas_ref
                style:width=move || format!("{}px", size.get())
                style:height=move || format!("{}px", size.get())
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up.clone()
                on:pointerleave=on_pointer_up
            ></canvas>
        </div>
    }
}

/// Apply engine actions: redraw, surface feedback, or complete the attempt.
#[cfg(feature = "csr")]
fn handle_actions(
    actions: Vec<Action>,
    engine: &mut Engine,
    feedback: RwSignal<String>,
    on_complete: Callback<u32>,
) {
    for action in actions {
        match action {
            Action::RenderNeeded => engine.render(),
            Action::StrokeRejected => feedback.set(INCOMPLETE_STROKE.to_owned()),
            Action::StrokeScored(raw) => match accept_score(raw) {
                Some(score) => on_complete.run(score),
                None => {
                    log::error!("scorer returned an invalid result: {raw}");
                    feedback.set(RETRY_PROMPT.to_owned());
                }
            },
        }
    }
}
