//! Global Application State
//!
//! Reactive state management using Leptos signals. One slot per backend
//! resource; each fetch writes only to its own slot.

use leptos::prelude::*;

use crate::models::{DashboardStats, Department, Task, User};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Profile of the authenticated user; None while logged out.
    pub current_user: RwSignal<Option<User>>,
    /// Client-side mirror of the backend's task list for the user's scope.
    pub tasks: RwSignal<Vec<Task>>,
    /// Users visible in the current scope (assignee picker, workload).
    pub users: RwSignal<Vec<User>>,
    /// Read-only reference data for the registration form.
    pub departments: RwSignal<Vec<Department>>,
    /// Latest dashboard snapshot; replaced wholesale on refresh.
    pub dashboard_stats: RwSignal<Option<DashboardStats>>,
    /// True while the stored token is being validated on startup.
    pub loading: RwSignal<bool>,
    /// Task currently being dragged, if any.
    pub dragged_task: RwSignal<Option<Task>>,
    /// Non-blocking error toast message.
    pub error: RwSignal<Option<String>>,
    /// Monotonic toast generation; a clear timer only fires for the
    /// generation it was armed with.
    error_epoch: RwSignal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_user: RwSignal::new(None),
            tasks: RwSignal::new(Vec::new()),
            users: RwSignal::new(Vec::new()),
            departments: RwSignal::new(Vec::new()),
            dashboard_stats: RwSignal::new(None),
            loading: RwSignal::new(true),
            dragged_task: RwSignal::new(None),
            error: RwSignal::new(None),
            error_epoch: RwSignal::new(0),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.with(|user| user.is_some())
    }

    /// Drop every session-scoped slot. Runs unconditionally on logout and on
    /// token rejection, whether or not the server-side call succeeded.
    pub fn clear_session(&self) {
        self.current_user.set(None);
        self.tasks.set(Vec::new());
        self.users.set(Vec::new());
        self.dashboard_stats.set(None);
        self.dragged_task.set(None);
    }

    /// Show an error toast (auto-clears after timeout). A toast raised while
    /// an earlier one is still up restarts the clock instead of being cut
    /// short by the earlier timer.
    pub fn show_error(&self, message: &str) {
        let epoch = self.raise_error(message);

        let state = *self;
        gloo_timers::callback::Timeout::new(5000, move || {
            state.clear_error_if_current(epoch);
        })
        .forget();
    }

    fn raise_error(&self, message: &str) -> u64 {
        self.error.set(Some(message.to_string()));
        let epoch = self.error_epoch.with_untracked(|e| e + 1);
        self.error_epoch.set(epoch);
        epoch
    }

    fn clear_error_if_current(&self, epoch: u64) {
        if self.error_epoch.with_untracked(|e| *e == epoch) {
            self.error.set(None);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state);
    state
}

/// Fetch the state from context; panics if the root component did not
/// provide it, which catches setup errors early.
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, TaskStatus, TaskType};

    fn sample_task() -> Task {
        Task {
            id: 1,
            key: "TEC-1".into(),
            title: "Configurar ambiente".into(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            task_type: TaskType::Task,
            assignee: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn clear_session_drops_user_tasks_and_stats() {
        let state = AppState::new();
        state.current_user.set(Some(User {
            id: 1,
            username: "admin".into(),
            name: "Administrador".into(),
            initials: "A".into(),
            avatar_color: "#EF4444".into(),
            role: "admin".into(),
            department: None,
        }));
        state.tasks.set(vec![sample_task()]);
        state.departments.set(vec![Department {
            id: 1,
            name: "Tecnologia".into(),
            description: None,
        }]);
        state.dragged_task.set(Some(sample_task()));

        state.clear_session();

        assert!(!state.is_authenticated());
        assert!(state.tasks.with_untracked(|t| t.is_empty()));
        assert!(state.dashboard_stats.with_untracked(|s| s.is_none()));
        assert!(state.dragged_task.with_untracked(|d| d.is_none()));
        // Departments are public reference data and survive logout.
        assert_eq!(state.departments.with_untracked(|d| d.len()), 1);
    }

    #[test]
    fn stale_clear_timer_does_not_drop_a_newer_toast() {
        let state = AppState::new();

        let first = state.raise_error("Não foi possível carregar as tarefas");
        let second = state.raise_error("Não foi possível mover a tarefa");

        // The first toast's timer fires after it was replaced: no-op.
        state.clear_error_if_current(first);
        assert_eq!(
            state.error.with_untracked(|e| e.clone()),
            Some("Não foi possível mover a tarefa".to_string())
        );

        // The replacement's own timer clears it.
        state.clear_error_if_current(second);
        assert!(state.error.with_untracked(|e| e.is_none()));
    }
}
