//! Landing screen: the dare and the GO button.

use leptos::prelude::*;

#[component]
pub fn StartScreen(on_start: Callback<()>) -> impl IntoView {
    view! {
        <div class="start-screen">
            <h2 class="start-screen__lead">"Can you draw a"</h2>
            <div class="start-screen__title">"PERFECT CIRCLE?"</div>
            <p class="start-screen__dare">"I dare you to try..."</p>
            <button class="start-screen__go" on:click=move |_| on_start.run(())>
                "GO"
            </button>
            <p class="start-screen__hint">"Trace the guide circle as perfectly as you can"</p>
        </div>
    }
}
