use leptos::ev;
use leptos::prelude::*;

use crate::features::kanban::components::TaskCard;
use crate::features::kanban::services::{move_task, partition_tasks, should_move};
use crate::models::TaskStatus;
use crate::state::use_app_state;

/// One status lane. Drop target of the drag-and-drop protocol: drag-over
/// suppresses the default so dropping is allowed, drop issues the move only
/// when the lane differs from the dragged task's current status.
#[component]
pub fn KanbanColumn(status: TaskStatus) -> impl IntoView {
    let state = use_app_state();

    let handle_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
    };

    let handle_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        // The drag reference is cleared regardless of whether a move fires.
        if let Some(dragged) = state.dragged_task.get_untracked() {
            if should_move(&dragged, status) {
                move_task(state, dragged.id, status);
            }
        }
        state.dragged_task.set(None);
    };

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h3>{status.label()}</h3>
                <span class="task-count">
                    {move || {
                        state.tasks.with(|tasks| {
                            tasks.iter().filter(|t| t.status == status).count()
                        })
                    }}
                </span>
            </div>
            <div class="column-content" on:dragover=handle_drag_over on:drop=handle_drop>
                {move || {
                    state.tasks.with(|tasks| {
                        partition_tasks(tasks, status)
                            .into_iter()
                            .map(|task| view! { <TaskCard task=task /> })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </div>
    }
}
