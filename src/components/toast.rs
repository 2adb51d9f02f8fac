use leptos::prelude::*;

use crate::state::use_app_state;

/// Non-blocking error toast. Read failures land here instead of vanishing
/// into the console; the message auto-clears after a few seconds.
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="toast-container">
            {move || {
                state.error.get().map(|msg| view! {
                    <div class="toast toast-error">
                        <span class="toast-icon">"✕"</span>
                        <span class="toast-message">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
