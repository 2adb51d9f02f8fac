//! HTTP API Client
//!
//! Functions for communicating with the Agiliza REST API. Every call reads
//! the session token at request time; callers decide what to do with a
//! failure (inline auth error vs. toast + console diagnostic).

use gloo_net::http::{Request, RequestBuilder};

use crate::core::services::session;
use crate::models::{DashboardStats, Department, Task, TaskPriority, TaskStatus, TaskType, User};

/// API base URL
pub const API_BASE: &str = "http://localhost:5000/api";

/// User-facing message for transport-level failures.
pub const CONNECTION_ERROR: &str = "Erro de conexão. Tente novamente.";

// ============ Request / Response Types ============

#[derive(Debug, serde::Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub department_id: i64,
}

#[derive(Debug, serde::Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, serde::Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub task_type: TaskType,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

// ============ Helpers ============

/// Attach the stored bearer token, if present. A request issued after the
/// token was cleared simply goes out unauthenticated; the backend rejects it.
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match session::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Decode the backend's `{ "error": … }` body, falling back to a generic
/// message when the body is not in that shape.
async fn error_message(response: gloo_net::http::Response, fallback: &str) -> String {
    match response.json::<ApiError>().await {
        Ok(err) => err.error,
        Err(_) => fallback.to_string(),
    }
}

// ============ Auth ============

/// Exchange a stored token for the current user's profile.
pub async fn validate_token(token: &str) -> Result<User, String> {
    let response = Request::get(&format!("{}/auth/me", API_BASE))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Sessão expirada").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn login(username: &str, password: &str) -> Result<AuthResponse, String> {
    let response = Request::post(&format!("{}/auth/login", API_BASE))
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Erro ao fazer login").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, String> {
    let response = Request::post(&format!("{}/auth/register", API_BASE))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Erro ao criar conta").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Server-side session invalidation. Best-effort; the caller tears local
/// state down regardless of the outcome.
pub async fn logout() -> Result<(), String> {
    let response = with_auth(Request::post(&format!("{}/auth/logout", API_BASE)))
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Erro ao fazer logout").await);
    }

    Ok(())
}

// ============ Reads ============

pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    let response = with_auth(Request::get(&format!("{}/tasks", API_BASE)))
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Erro ao carregar tarefas").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    let response = with_auth(Request::get(&format!("{}/users", API_BASE)))
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Erro ao carregar usuários").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Departments are public reference data; no auth header.
pub async fn fetch_departments() -> Result<Vec<Department>, String> {
    let response = Request::get(&format!("{}/departments", API_BASE))
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Erro ao carregar departamentos").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    let response = with_auth(Request::get(&format!("{}/dashboard/stats", API_BASE)))
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Erro ao carregar estatísticas").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Writes ============

/// Change a task's status. Returns the server's updated record so that
/// server-side side effects (timestamps, etc.) reach the board.
pub async fn move_task(task_id: i64, status: TaskStatus) -> Result<Task, String> {
    #[derive(serde::Serialize)]
    struct MoveRequest {
        status: TaskStatus,
    }

    let response = with_auth(Request::put(&format!(
        "{}/tasks/{}/move",
        API_BASE, task_id
    )))
    .json(&MoveRequest { status })
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Erro ao mover tarefa").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn create_task(request: &CreateTaskRequest) -> Result<Task, String> {
    let response = with_auth(Request::post(&format!("{}/tasks", API_BASE)))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Erro ao criar tarefa").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_request_serializes_status_string() {
        #[derive(serde::Serialize)]
        struct MoveRequest {
            status: TaskStatus,
        }

        let body = serde_json::to_value(MoveRequest {
            status: TaskStatus::InProgress,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "inprogress" }));
    }

    #[test]
    fn create_request_omits_empty_optionals() {
        let body = serde_json::to_value(CreateTaskRequest {
            title: "Nova tarefa".into(),
            description: None,
            task_type: TaskType::Story,
            priority: TaskPriority::High,
            assignee_id: None,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "title": "Nova tarefa",
                "task_type": "story",
                "priority": "high"
            })
        );
    }
}
