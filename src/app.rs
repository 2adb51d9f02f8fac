use leptos::html::Dialog;
use leptos::prelude::*;

use crate::components::{Header, Loading, Toast};
use crate::features::auth::services as auth;
use crate::features::auth::AuthForm;
use crate::features::dashboard::Dashboard;
use crate::features::kanban::{KanbanBoard, TaskModal};
use crate::state::provide_app_state;

/// Views reachable from the header once authenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Board,
    Dashboard,
}

#[component]
pub fn App() -> impl IntoView {
    let state = provide_app_state();

    let current_view = RwSignal::new(AppView::Board);
    provide_context(current_view);

    // Startup: validate any stored token, and fetch the public department
    // list so the registration form has options before login.
    auth::bootstrap_session(state);
    auth::load_departments(state);

    // Create-task dialog element, opened from the header
    let task_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    view! {
        <main class="app">
            {move || {
                if state.loading.get() {
                    view! { <Loading message="Carregando..." /> }.into_any()
                } else if !state.is_authenticated() {
                    view! { <AuthForm /> }.into_any()
                } else {
                    view! {
                        <Header task_dialog_ref=task_dialog_ref />
                        {move || match current_view.get() {
                            AppView::Board => view! { <KanbanBoard /> }.into_any(),
                            AppView::Dashboard => view! { <Dashboard /> }.into_any(),
                        }}
                        <TaskModal dialog_ref=task_dialog_ref />
                    }
                    .into_any()
                }
            }}
            <Toast />
        </main>
    }
}
