//! Dashboard statistics: loading and chart-ready reshaping.
//!
//! All aggregation happens server-side; these helpers only map the fetched
//! snapshot into labeled series for the charts.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::models::{PriorityStats, StatusStats, TaskPriority, TaskStatus, TaskType, TypeStats};
use crate::state::AppState;
use std::collections::HashMap;

/// One labeled value of a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: u32,
    pub color: String,
}

impl Slice {
    fn new(label: impl Into<String>, value: u32, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Fetch the aggregate snapshot, replacing the previous one wholesale.
/// Triggered when the dashboard view is opened, not by a reactive effect.
pub fn load_dashboard_stats(state: AppState) {
    spawn_local(async move {
        match api::fetch_dashboard_stats().await {
            Ok(stats) => state.dashboard_stats.set(Some(stats)),
            Err(e) => {
                web_sys::console::error_1(&format!("Erro ao carregar estatísticas: {}", e).into());
                state.show_error("Não foi possível carregar as estatísticas");
            }
        }
    });
}

/// Status donut series, in board order.
pub fn status_series(stats: &StatusStats) -> Vec<Slice> {
    TaskStatus::all()
        .into_iter()
        .map(|status| Slice::new(status.label(), stats.get(status), status.color()))
        .collect()
}

pub fn type_series(stats: &TypeStats) -> Vec<Slice> {
    vec![
        Slice::new(TaskType::Task.label(), stats.task, "#3B82F6"),
        Slice::new(TaskType::Bug.label(), stats.bug, "#EF4444"),
        Slice::new(TaskType::Story.label(), stats.story, "#8B5CF6"),
    ]
}

pub fn priority_series(stats: &PriorityStats) -> Vec<Slice> {
    vec![
        Slice::new(TaskPriority::Low.label(), stats.low, TaskPriority::Low.color()),
        Slice::new(TaskPriority::Medium.label(), stats.medium, TaskPriority::Medium.color()),
        Slice::new(TaskPriority::High.label(), stats.high, TaskPriority::High.color()),
    ]
}

/// Per-user workload bars. Labels are first names only; entries are sorted
/// by name so the chart is stable across refreshes (the backend sends an
/// unordered map).
pub fn workload_series(workload: &HashMap<String, u32>) -> Vec<Slice> {
    let mut entries: Vec<(&String, &u32)> = workload.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(name, count)| {
            let first_name = name.split_whitespace().next().unwrap_or(name);
            Slice::new(first_name, *count, "#10B981")
        })
        .collect()
}

/// Render the backend's ISO timestamp as a pt-BR date. Falls back to the raw
/// string when the timestamp is not in the expected shape.
pub fn format_activity_date(raw: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_series_keeps_board_order_and_counts() {
        let series = status_series(&StatusStats {
            todo: 2,
            inprogress: 1,
            done: 3,
        });

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].label, "A Fazer");
        assert_eq!(series[0].value, 2);
        assert_eq!(series[1].label, "Em Progresso");
        assert_eq!(series[1].value, 1);
        assert_eq!(series[2].label, "Concluído");
        assert_eq!(series[2].value, 3);
        assert_eq!(series.iter().map(|s| s.value).sum::<u32>(), 6);
    }

    #[test]
    fn workload_series_uses_first_names_sorted() {
        let mut workload = HashMap::new();
        workload.insert("Maria Santos".to_string(), 1);
        workload.insert("João Silva".to_string(), 2);

        let series = workload_series(&workload);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "João");
        assert_eq!(series[0].value, 2);
        assert_eq!(series[1].label, "Maria");
        assert_eq!(series[1].value, 1);
    }

    #[test]
    fn activity_date_renders_pt_br() {
        assert_eq!(format_activity_date("2025-08-21T09:30:00"), "21/08/2025");
        assert_eq!(
            format_activity_date("2025-08-21T09:30:00.123456"),
            "21/08/2025"
        );
    }

    #[test]
    fn activity_date_falls_back_to_raw() {
        assert_eq!(format_activity_date("ontem"), "ontem");
    }
}
