use serde::{Deserialize, Serialize};

use crate::models::User;

/// Status lanes of the kanban board. Wire format matches the backend
/// ("todo", "inprogress", "done").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    #[serde(rename = "inprogress")]
    InProgress,
    Done,
}

impl TaskStatus {
    /// Column / badge title shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "A Fazer",
            TaskStatus::InProgress => "Em Progresso",
            TaskStatus::Done => "Concluído",
        }
    }

    /// Accent color used by the status donut chart and the summary cards.
    pub fn color(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "#3B82F6",
            TaskStatus::InProgress => "#F59E0B",
            TaskStatus::Done => "#10B981",
        }
    }

    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Task,
    Bug,
    Story,
}

impl TaskType {
    pub fn icon(&self) -> &'static str {
        match self {
            TaskType::Task => "✅",
            TaskType::Bug => "🐛",
            TaskType::Story => "📖",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskType::Task => "Tarefas",
            TaskType::Bug => "Bugs",
            TaskType::Story => "Histórias",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Color of the priority dot on a task card.
    pub fn color(&self) -> &'static str {
        match self {
            TaskPriority::Low => "#10B981",
            TaskPriority::Medium => "#F59E0B",
            TaskPriority::High => "#EF4444",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Baixa",
            TaskPriority::Medium => "Média",
            TaskPriority::High => "Alta",
        }
    }
}

/// A task as returned by the backend. The client never mutates these records
/// directly; the only write path is the move endpoint, which returns the
/// updated record wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub task_type: TaskType,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_format_round_trips() {
        let cases = [
            (TaskStatus::Todo, "\"todo\""),
            (TaskStatus::InProgress, "\"inprogress\""),
            (TaskStatus::Done, "\"done\""),
        ];
        for (status, wire) in cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            let back: TaskStatus = serde_json::from_str(wire).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn inprogress_uses_backend_spelling() {
        let status: TaskStatus = serde_json::from_str("\"inprogress\"").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn type_and_priority_wire_format() {
        let t: TaskType = serde_json::from_str("\"bug\"").unwrap();
        assert_eq!(t, TaskType::Bug);
        let p: TaskPriority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(p, TaskPriority::High);
    }

    #[test]
    fn task_deserializes_from_backend_shape() {
        let json = serde_json::json!({
            "id": 3,
            "key": "TEC-3",
            "title": "Corrigir bug no carregamento de dados",
            "description": "Resolver problema de lentidão",
            "status": "todo",
            "priority": "medium",
            "task_type": "bug",
            "assignee": {
                "id": 4,
                "username": "pedro.oliveira",
                "name": "Pedro Oliveira",
                "initials": "PO",
                "avatar_color": "#F59E0B",
                "role": "user"
            },
            "creator_id": 2,
            "department_id": 1,
            "created_at": "2025-08-20T10:00:00",
            "updated_at": "2025-08-21T09:30:00"
        });

        let task: Task = serde_json::from_value(json).unwrap();
        assert_eq!(task.key, "TEC-3");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.task_type, TaskType::Bug);
        assert_eq!(task.assignee.unwrap().initials, "PO");
    }

    #[test]
    fn task_tolerates_missing_optional_fields() {
        let json = serde_json::json!({
            "id": 1,
            "key": "TEC-1",
            "title": "Sem detalhes",
            "status": "done",
            "priority": "low",
            "task_type": "task"
        });

        let task: Task = serde_json::from_value(json).unwrap();
        assert!(task.description.is_none());
        assert!(task.assignee.is_none());
    }
}
