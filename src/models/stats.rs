use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Department, TaskStatus};

/// Pre-aggregated dashboard snapshot from `GET /dashboard/stats`. Replaced
/// wholesale on every refresh; nothing in here is recomputed client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub status_stats: StatusStats,
    pub type_stats: TypeStats,
    pub priority_stats: PriorityStats,
    /// Task count per assignee full name. Only users with at least one
    /// assigned task appear.
    #[serde(default)]
    pub workload_stats: HashMap<String, u32>,
    #[serde(default)]
    pub recent_activities: Vec<RecentActivity>,
    pub total_tasks: u32,
    /// None for admins, who see the whole system.
    #[serde(default)]
    pub department: Option<Department>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusStats {
    pub todo: u32,
    pub inprogress: u32,
    pub done: u32,
}

impl StatusStats {
    pub fn get(&self, status: TaskStatus) -> u32 {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.inprogress,
            TaskStatus::Done => self.done,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeStats {
    pub task: u32,
    pub bug: u32,
    pub story: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriorityStats {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentActivity {
    pub task_key: String,
    pub task_title: String,
    pub status: TaskStatus,
    pub assignee: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_deserialize_from_backend_shape() {
        let json = serde_json::json!({
            "status_stats": { "todo": 2, "inprogress": 1, "done": 3 },
            "type_stats": { "task": 2, "bug": 1, "story": 3 },
            "priority_stats": { "low": 1, "medium": 3, "high": 2 },
            "workload_stats": { "João Silva": 2, "Maria Santos": 1 },
            "recent_activities": [{
                "task_key": "TEC-2",
                "task_title": "Implementar quadro Kanban",
                "status": "inprogress",
                "assignee": "João Silva",
                "updated_at": "2025-08-21T09:30:00"
            }],
            "total_tasks": 6,
            "department": { "id": 1, "name": "Tecnologia" }
        });

        let stats: DashboardStats = serde_json::from_value(json).unwrap();
        assert_eq!(stats.total_tasks, 6);
        assert_eq!(stats.status_stats.get(TaskStatus::InProgress), 1);
        assert_eq!(stats.workload_stats["João Silva"], 2);
        assert_eq!(stats.recent_activities[0].status, TaskStatus::InProgress);
        assert_eq!(stats.department.unwrap().name, "Tecnologia");
    }

    #[test]
    fn admin_scope_has_no_department() {
        let json = serde_json::json!({
            "status_stats": { "todo": 0, "inprogress": 0, "done": 0 },
            "type_stats": { "task": 0, "bug": 0, "story": 0 },
            "priority_stats": { "low": 0, "medium": 0, "high": 0 },
            "workload_stats": {},
            "recent_activities": [],
            "total_tasks": 0,
            "department": null
        });

        let stats: DashboardStats = serde_json::from_value(json).unwrap();
        assert!(stats.department.is_none());
    }
}
