//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dark = RwSignal::new(dark_mode::read_preference());

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            aria-label="Toggle theme"
            on:click=move |_| dark.set(dark_mode::toggle(dark.get_untracked()))
        >
            {move || if dark.get() { "☀" } else { "🌙" }}
        </button>
    }
}
