use leptos::prelude::*;

/// Centered spinner with a caption.
#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
            <p class="loading-message">{message}</p>
        </div>
    }
}
