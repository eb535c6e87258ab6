//! Best score and recent attempts, shown on the start screen.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::util::score_storage;
use crate::util::score_storage::ScoreEntry;

#[component]
pub fn ScoreDisplay() -> impl IntoView {
    let best = RwSignal::new(0_u32);
    let recent = RwSignal::new(Vec::<ScoreEntry>::new());

    // Loaded on mount so a hard refresh picks up the stored history.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        best.set(score_storage::high_score());
        recent.set(score_storage::recent_scores());
    });

    view! {
        <Show when=move || (best.get() > 0) || !recent.get().is_empty()>
            <div class="score-display">
                <Show when=move || (best.get() > 0)>
                    <div class="score-display__best">
                        <h3 class="score-display__label">"High Score"</h3>
                        <p class="score-display__value">{move || best.get()}"%"</p>
                    </div>
                </Show>
                <Show when=move || !recent.get().is_empty()>
                    <div class="score-display__recent">
                        <h3 class="score-display__label">"Recent Scores"</h3>
                        <ul class="score-display__list">
                            <For
                                each=move || recent.get()
                                key=|entry| entry.timestamp.to_bits()
                                children=move |entry: ScoreEntry| {
                                    view! {
                                        <li class="score-display__entry">
                                            <span class="score-display__entry-score">
                                                {entry.score}"%"
                                            </span>
                                            <span class="score-display__entry-when">
                                                {format_timestamp(entry.timestamp)}
                                            </span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

/// Attempt timestamp in the user's locale.
#[cfg(feature = "csr")]
fn format_timestamp(ms: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(feature = "csr"))]
fn format_timestamp(_ms: f64) -> String {
    String::new()
}
