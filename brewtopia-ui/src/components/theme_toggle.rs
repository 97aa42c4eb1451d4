//! Theme toggle button
//!
//! Flips the persisted light/dark preference and the `dark` class on `<body>`.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            on:click=move |_| state.toggle_theme()
        >
            {move || state.theme.with(|t| t.button_label())}
        </button>
    }
}
