//! Score reveal: animated count-up, verdict, and high-score badge.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

use crate::state::game::Attempt;
use crate::util::feedback::score_message;
#[cfg(feature = "csr")]
use crate::util::feedback::count_up_increment;

/// Milliseconds between count-up ticks.
#[cfg(feature = "csr")]
const COUNT_UP_TICK_MS: u32 = 20;

#[component]
pub fn ResultScreen(
    attempt: Attempt,
    on_try_again: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let display = RwSignal::new(0_u32);

    #[cfg(feature = "csr")]
    {
        let target = attempt.score;
        let tick = Rc::new(RefCell::new(None::<Interval>));

        // Start counting on mount.
        {
            let tick_start = Rc::clone(&tick);
            Effect::new(move || {
                if tick_start.borrow().is_some() || display.get_untracked() >= target {
                    return;
                }
                let step = count_up_increment(target);
                *tick_start.borrow_mut() = Some(Interval::new(COUNT_UP_TICK_MS, move || {
                    display.update(|value| *value = (*value + step).min(target));
                }));
            });
        }

        // Stop the timer once the target is reached. Runs as its own effect
        // so the interval is never dropped from inside its own callback.
        {
            let tick_stop = Rc::clone(&tick);
            Effect::new(move || {
                if display.get() >= target {
                    tick_stop.borrow_mut().take();
                }
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    display.set(attempt.score);

    view! {
        <div class="result-screen">
            <h2 class="result-screen__heading">"Your circle is"</h2>
            <div class="result-screen__score">{move || display.get()}"%"</div>
            <p class="result-screen__verdict">{score_message(attempt.score)}</p>
            <Show when=move || attempt.new_high>
                <div class="result-screen__new-high">"NEW HIGH SCORE!"</div>
            </Show>
            <Show when=move || !attempt.new_high && (attempt.previous_best > 0)>
                <div class="result-screen__best">"High Score: " {attempt.previous_best} "%"</div>
            </Show>
            <div class="result-screen__actions">
                <button class="button" on:click=move |_| on_try_again.run(())>
                    "Try Again"
                </button>
                <button class="button button--outline" on:click=move |_| on_reset.run(())>
                    "Main Menu"
                </button>
            </div>
        </div>
    }
}
