use leptos::prelude::*;

/// Initials chip on the user's avatar color.
#[component]
pub fn Avatar(
    #[prop(into)] initials: String,
    #[prop(into)] color: String,
    #[prop(into, optional)] title: String,
) -> impl IntoView {
    view! {
        <span class="avatar" title=title style=format!("background-color: {}", color)>
            {initials}
        </span>
    }
}
