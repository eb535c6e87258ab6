//! Root component and screen orchestration.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::drawing_canvas::DrawingCanvas;
use crate::components::result_screen::ResultScreen;
use crate::components::score_display::ScoreDisplay;
use crate::components::start_screen::StartScreen;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::game::{Attempt, Screen};
use crate::util::score_storage;

#[component]
pub fn App() -> impl IntoView {
    let screen = RwSignal::new(Screen::Start);
    let attempt = RwSignal::new(None::<Attempt>);

    let on_start = Callback::new(move |()| {
        attempt.set(None);
        screen.set(Screen::Drawing);
    });

    // Persist first so the result screen can report whether the stored best
    // was beaten by this attempt.
    let on_complete = Callback::new(move |score: u32| {
        let outcome = score_storage::save_score(score);
        attempt.set(Some(Attempt {
            score,
            previous_best: outcome.previous_best,
            new_high: outcome.new_high,
        }));
        screen.set(Screen::Result);
    });

    let on_reset = Callback::new(move |()| {
        attempt.set(None);
        screen.set(Screen::Start);
    });

    view! {
        <div class="game">
            <header class="game__header">
                <h1 class="game__title">"PERFECT CIRCLE"</h1>
                <div class="game__header-controls">
                    <ThemeToggle/>
                    <Show when=move || screen.get() == Screen::Start>
                        <ScoreDisplay/>
                    </Show>
                </div>
            </header>
            <main class="game__stage">
                {move || match screen.get() {
                    Screen::Start => view! { <StartScreen on_start=on_start/> }.into_any(),
                    Screen::Drawing => {
                        view! { <DrawingCanvas on_complete=on_complete/> }.into_any()
                    }
                    Screen::Result => {
                        let current = attempt.get().unwrap_or(Attempt {
                            score: 0,
                            previous_best: 0,
                            new_high: false,
                        });
                        view! {
                            <ResultScreen
                                attempt=current
                                on_try_again=on_start
                                on_reset=on_reset
                            />
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}
