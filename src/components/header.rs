use leptos::html::Dialog;
use leptos::prelude::*;

use crate::app::AppView;
use crate::components::Avatar;
use crate::features::auth::services as auth;
use crate::features::dashboard::services::load_dashboard_stats;
use crate::state::use_app_state;

/// Top bar of the authenticated view: brand, view switch, the (stub) search
/// and filter affordances, create-task button, user summary and logout.
#[component]
pub fn Header(task_dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    let state = use_app_state();
    let view_signal = use_context::<RwSignal<AppView>>().expect("AppView context");

    let show_board = move |_| view_signal.set(AppView::Board);
    // Opening the dashboard is the explicit trigger for the stats fetch.
    let show_dashboard = move |_| {
        view_signal.set(AppView::Dashboard);
        load_dashboard_stats(state);
    };

    let open_task_modal = move |_| {
        if let Some(dialog) = task_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    let handle_logout = move |_| auth::logout(state);

    let nav_class = move |view: AppView| {
        if view_signal.get() == view {
            "nav-btn nav-btn-active"
        } else {
            "nav-btn"
        }
    };

    view! {
        <header class="app-header">
            <div class="header-left">
                <h1 class="brand">"Agiliza"</h1>
                <nav class="header-nav">
                    <button class=move || nav_class(AppView::Board) on:click=show_board>
                        "▦ Quadro"
                    </button>
                    <button class=move || nav_class(AppView::Dashboard) on:click=show_dashboard>
                        "📊 Resumo"
                    </button>
                </nav>
            </div>

            <div class="header-right">
                // Search and filter are visual affordances only for now.
                <button class="btn-secondary">"🔍 Pesquisar"</button>
                <button class="btn-secondary">"⚙ Filtrar"</button>
                <button class="btn-primary" on:click=open_task_modal>"+ Criar"</button>

                <div class="user-menu">
                    {move || {
                        state.current_user.get().map(|user| {
                            let department = user
                                .department
                                .as_ref()
                                .map(|d| d.name.clone())
                                .unwrap_or_default();
                            view! {
                                <Avatar
                                    initials=user.initials.clone()
                                    color=user.avatar_color.clone()
                                    title=user.name.clone()
                                />
                                <div class="user-summary">
                                    <p class="user-name">{user.name.clone()}</p>
                                    <p class="user-department">{department}</p>
                                </div>
                            }
                        })
                    }}
                    <button class="btn-ghost" on:click=handle_logout>"⎋ Sair"</button>
                </div>
            </div>
        </header>
    }
}
