use leptos::prelude::*;

use crate::features::kanban::components::KanbanColumn;
use crate::models::TaskStatus;
use crate::state::use_app_state;

/// The three-lane board. Lane membership is derived from the task list on
/// every render; there is no per-column state to keep in sync.
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let state = use_app_state();

    let scope_line = move || {
        state.current_user.with(|user| {
            user.as_ref().map(|u| {
                let department = u
                    .department
                    .as_ref()
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| "—".to_string());
                if u.is_admin() {
                    format!("Departamento: {} (Visualização completa)", department)
                } else {
                    format!("Departamento: {}", department)
                }
            })
        })
    };

    view! {
        <div class="board-page">
            <div class="board-heading">
                <h2>"Quadro Kanban"</h2>
                <p class="board-scope">{scope_line}</p>
            </div>
            <div class="kanban-board">
                {TaskStatus::all()
                    .into_iter()
                    .map(|status| view! { <KanbanColumn status=status /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
