//! Session lifecycle handlers.
//!
//! Data loading is kicked off explicitly from these state transitions
//! (startup validation, login, register) rather than from reactive effects,
//! so every fetch has an obvious trigger.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::core::services::session;
use crate::features::kanban::services::{load_tasks, load_users};
use crate::state::AppState;

/// On startup: exchange a stored token for the current-user profile. A
/// rejected token is discarded so the next visit goes straight to the login
/// screen. Clears the global loading flag once the check settles.
pub fn bootstrap_session(state: AppState) {
    spawn_local(async move {
        if let Some(token) = session::load_token() {
            match api::validate_token(&token).await {
                Ok(user) => {
                    state.current_user.set(Some(user));
                    load_workspace(state);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Token rejeitado: {}", e).into());
                    session::clear_token();
                }
            }
        }
        state.loading.set(false);
    });
}

/// Exchange credentials for a fresh token + profile pair and unlock the
/// authenticated view. Inline error reporting goes through the two signals
/// owned by the form.
pub fn login(
    state: AppState,
    username: String,
    password: String,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    spawn_local(async move {
        busy.set(true);
        error.set(None);

        match api::login(&username, &password).await {
            Ok(auth) => {
                session::store_token(&auth.access_token);
                state.current_user.set(Some(auth.user));
                load_workspace(state);
            }
            Err(e) => error.set(Some(e)),
        }

        busy.set(false);
    });
}

pub fn register(
    state: AppState,
    request: api::RegisterRequest,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    spawn_local(async move {
        busy.set(true);
        error.set(None);

        match api::register(&request).await {
            Ok(auth) => {
                session::store_token(&auth.access_token);
                state.current_user.set(Some(auth.user));
                load_workspace(state);
            }
            Err(e) => error.set(Some(e)),
        }

        busy.set(false);
    });
}

/// Best-effort server-side invalidation followed by unconditional local
/// teardown. A network failure here only produces a console diagnostic.
pub fn logout(state: AppState) {
    spawn_local(async move {
        if session::load_token().is_some() {
            if let Err(e) = api::logout().await {
                web_sys::console::error_1(&format!("Erro ao fazer logout: {}", e).into());
            }
        }
        session::clear_token();
        state.clear_session();
    });
}

/// Fire-and-forget loads of everything the authenticated view needs. Each
/// fetch writes to its own state slot, so the three requests are independent.
/// Dashboard statistics are loaded separately when that view is opened.
pub fn load_workspace(state: AppState) {
    load_tasks(state);
    load_users(state);
    load_departments(state);
}

/// Departments also back the registration form, so this one is callable
/// before authentication.
pub fn load_departments(state: AppState) {
    spawn_local(async move {
        match api::fetch_departments().await {
            Ok(departments) => state.departments.set(departments),
            Err(e) => {
                web_sys::console::error_1(&format!("Erro ao carregar departamentos: {}", e).into());
            }
        }
    });
}
