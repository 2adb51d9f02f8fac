use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::api::CreateTaskRequest;
use crate::features::kanban::services::create_task;
use crate::models::{TaskPriority, TaskType};
use crate::state::use_app_state;

/// Create-task dialog, opened from the header's "Criar" button. The backend
/// assigns id, key and department scope; the form only collects the rest.
#[component]
pub fn TaskModal(dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    let state = use_app_state();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (task_type, set_task_type) = signal("task".to_string());
    let (priority, set_priority) = signal("medium".to_string());
    let (assignee_id, set_assignee_id) = signal(String::new());
    let busy = RwSignal::new(false);

    let reset_form = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_task_type.set("task".to_string());
        set_priority.set("medium".to_string());
        set_assignee_id.set(String::new());
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        let parsed_type = match task_type.get_untracked().as_str() {
            "bug" => TaskType::Bug,
            "story" => TaskType::Story,
            _ => TaskType::Task,
        };
        let parsed_priority = match priority.get_untracked().as_str() {
            "low" => TaskPriority::Low,
            "high" => TaskPriority::High,
            _ => TaskPriority::Medium,
        };
        let description = description.get_untracked();

        let request = CreateTaskRequest {
            title: title.get_untracked(),
            description: (!description.is_empty()).then_some(description),
            task_type: parsed_type,
            priority: parsed_priority,
            assignee_id: assignee_id.get_untracked().parse::<i64>().ok(),
        };

        busy.set(true);
        create_task(state, request, move |created| {
            busy.set(false);
            if created {
                reset_form();
                if let Some(dialog) = dialog_ref.get() {
                    dialog.close();
                }
            }
        });
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Criar Tarefa"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"Título"</label>
                        <input
                            type="text"
                            placeholder="Título da tarefa..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"Descrição"</label>
                        <textarea
                            placeholder="Descrição da tarefa..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Tipo"</label>
                            <select
                                on:change=move |ev| set_task_type.set(event_target_value(&ev))
                                prop:value=move || task_type.get()
                            >
                                <option value="task">"Tarefa"</option>
                                <option value="bug">"Bug"</option>
                                <option value="story">"História"</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Prioridade"</label>
                            <select
                                on:change=move |ev| set_priority.set(event_target_value(&ev))
                                prop:value=move || priority.get()
                            >
                                <option value="low">"Baixa"</option>
                                <option value="medium">"Média"</option>
                                <option value="high">"Alta"</option>
                            </select>
                        </div>
                    </div>
                    <div class="form-group">
                        <label>"Responsável"</label>
                        <select
                            on:change=move |ev| set_assignee_id.set(event_target_value(&ev))
                            prop:value=move || assignee_id.get()
                        >
                            <option value="">"Não atribuído"</option>
                            {move || state.users.get()
                                .into_iter()
                                .map(|user| view! {
                                    <option value=user.id.to_string()>{user.name.clone()}</option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Criando..." } else { "Criar" }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
