//! Board data loading and the task move/create round trips.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::models::{Task, TaskStatus};
use crate::state::AppState;

/// Load the task list for the current scope. A failed fetch leaves the
/// previous list untouched; the toast makes the staleness visible.
pub fn load_tasks(state: AppState) {
    spawn_local(async move {
        match api::fetch_tasks().await {
            Ok(tasks) => state.tasks.set(tasks),
            Err(e) => {
                web_sys::console::error_1(&format!("Erro ao carregar tarefas: {}", e).into());
                state.show_error("Não foi possível carregar as tarefas");
            }
        }
    });
}

pub fn load_users(state: AppState) {
    spawn_local(async move {
        match api::fetch_users().await {
            Ok(users) => state.users.set(users),
            Err(e) => {
                web_sys::console::error_1(&format!("Erro ao carregar usuários: {}", e).into());
            }
        }
    });
}

/// Send the new status to the backend and, on success, swap in the server's
/// returned record so server-side side effects (timestamps) reach the board.
/// No optimistic update: on failure the list is simply left unchanged.
pub fn move_task(state: AppState, task_id: i64, new_status: TaskStatus) {
    spawn_local(async move {
        match api::move_task(task_id, new_status).await {
            Ok(updated) => {
                state.tasks.update(|tasks| replace_task(tasks, updated));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Erro ao mover tarefa: {}", e).into());
                state.show_error("Não foi possível mover a tarefa");
            }
        }
    });
}

/// Create a task via the backend and append the server's record. `on_done`
/// reports success back to the modal so it can close and reset itself.
pub fn create_task(
    state: AppState,
    request: api::CreateTaskRequest,
    on_done: impl Fn(bool) + 'static,
) {
    spawn_local(async move {
        match api::create_task(&request).await {
            Ok(task) => {
                state.tasks.update(|tasks| tasks.push(task));
                on_done(true);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Erro ao criar tarefa: {}", e).into());
                state.show_error("Não foi possível criar a tarefa");
                on_done(false);
            }
        }
    });
}

/// Drop decision: only a drag onto a *different* status lane issues a move.
pub fn should_move(dragged: &Task, target: TaskStatus) -> bool {
    dragged.status != target
}

/// Replace exactly the entry matching the updated record's id, leaving every
/// other element alone. An unknown id is a no-op.
pub fn replace_task(tasks: &mut [Task], updated: Task) {
    if let Some(index) = tasks.iter().position(|t| t.id == updated.id) {
        tasks[index] = updated;
    }
}

/// Partition the full list into the three status lanes. O(n) on every render,
/// which is fine for the small unpaginated lists this board shows.
pub fn partition_tasks(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status == status)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, TaskType};

    fn task(id: i64, status: TaskStatus) -> Task {
        Task {
            id,
            key: format!("TEC-{}", id),
            title: format!("Tarefa {}", id),
            description: None,
            status,
            priority: TaskPriority::Medium,
            task_type: TaskType::Task,
            assignee: None,
            created_at: None,
            updated_at: Some("2025-08-20T10:00:00".into()),
        }
    }

    #[test]
    fn drop_on_same_status_does_not_move() {
        let dragged = task(1, TaskStatus::Todo);
        assert!(!should_move(&dragged, TaskStatus::Todo));
        assert!(should_move(&dragged, TaskStatus::InProgress));
        assert!(should_move(&dragged, TaskStatus::Done));
    }

    #[test]
    fn replace_task_touches_exactly_one_entry() {
        let mut tasks = vec![
            task(1, TaskStatus::Todo),
            task(2, TaskStatus::Todo),
            task(3, TaskStatus::Done),
        ];
        let untouched_first = tasks[0].clone();
        let untouched_last = tasks[2].clone();

        let mut moved = task(2, TaskStatus::InProgress);
        moved.updated_at = Some("2025-08-21T12:00:00".into());
        replace_task(&mut tasks, moved.clone());

        assert_eq!(tasks[0], untouched_first);
        assert_eq!(tasks[1], moved);
        assert_eq!(tasks[2], untouched_last);
    }

    #[test]
    fn replace_task_ignores_unknown_id() {
        let mut tasks = vec![task(1, TaskStatus::Todo)];
        let before = tasks.clone();
        replace_task(&mut tasks, task(99, TaskStatus::Done));
        assert_eq!(tasks, before);
    }

    #[test]
    fn partition_puts_each_task_in_exactly_one_lane() {
        let tasks = vec![
            task(1, TaskStatus::Todo),
            task(2, TaskStatus::InProgress),
            task(3, TaskStatus::Done),
        ];

        let mut seen = Vec::new();
        for status in TaskStatus::all() {
            let lane = partition_tasks(&tasks, status);
            for t in &lane {
                assert_eq!(t.status, status);
                assert!(!seen.contains(&t.id), "task {} appears in two lanes", t.id);
                seen.push(t.id);
            }
        }
        assert_eq!(seen.len(), tasks.len());
    }
}
