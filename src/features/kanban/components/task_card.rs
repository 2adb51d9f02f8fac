use leptos::ev;
use leptos::prelude::*;

use crate::components::Avatar;
use crate::models::Task;
use crate::state::use_app_state;

/// Draggable task tile: type icon, key badge, priority dot, title,
/// optional description and assignee avatar. Drag source of the board.
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let state = use_app_state();

    let task_for_drag = task.clone();
    let handle_drag_start = move |ev: ev::DragEvent| {
        state.dragged_task.set(Some(task_for_drag.clone()));
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
        }
    };

    view! {
        <div class="task-card" draggable="true" on:dragstart=handle_drag_start>
            <div class="task-card-top">
                <div class="task-card-meta">
                    <span class="task-type-icon">{task.task_type.icon()}</span>
                    <span class="task-key">{task.key.clone()}</span>
                </div>
                <span
                    class="priority-dot"
                    title=task.priority.label()
                    style=format!("background-color: {}", task.priority.color())
                />
            </div>

            <h4 class="task-title">{task.title.clone()}</h4>

            {task.description.clone().map(|desc| view! {
                <p class="task-description">{desc}</p>
            })}

            <div class="task-card-bottom">
                {task.assignee.as_ref().map(|assignee| view! {
                    <Avatar
                        initials=assignee.initials.clone()
                        color=assignee.avatar_color.clone()
                        title=assignee.name.clone()
                    />
                })}
            </div>
        </div>
    }
}
