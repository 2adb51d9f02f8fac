use leptos::prelude::*;

use crate::components::Loading;
use crate::features::dashboard::components::{BarChart, DonutChart};
use crate::features::dashboard::services::{
    format_activity_date, priority_series, status_series, type_series, workload_series,
};
use crate::models::{DashboardStats, TaskStatus};
use crate::state::use_app_state;

/// Statistics view: four summary cards, four charts and the recent-activity
/// list, all sourced from one pre-aggregated snapshot.
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="dashboard-page">
            {move || {
                match state.dashboard_stats.get() {
                    None => view! {
                        <Loading message="Carregando estatísticas..." />
                    }
                    .into_any(),
                    Some(stats) => view! { <DashboardContent stats=stats /> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn DashboardContent(stats: DashboardStats) -> impl IntoView {
    let scope_line = match &stats.department {
        Some(department) => format!("Departamento: {}", department.name),
        None => "Visualização geral (Admin)".to_string(),
    };
    let total_caption = if stats.department.is_some() {
        "Todas as tarefas do departamento"
    } else {
        "Todas as tarefas do sistema"
    };

    let status = status_series(&stats.status_stats);
    let types = type_series(&stats.type_stats);
    let priorities = priority_series(&stats.priority_stats);
    let workload = workload_series(&stats.workload_stats);

    view! {
        <div class="dashboard-heading">
            <h2>"Dashboard"</h2>
            <p class="dashboard-scope">{scope_line}</p>
        </div>

        <div class="summary-cards">
            <SummaryCard
                title="Total de Tarefas"
                value=stats.total_tasks
                caption=total_caption
                color="#111827"
            />
            <SummaryCard
                title="A Fazer"
                value=stats.status_stats.todo
                caption="Tarefas pendentes"
                color=TaskStatus::Todo.color()
            />
            <SummaryCard
                title="Em Progresso"
                value=stats.status_stats.inprogress
                caption="Tarefas em andamento"
                color=TaskStatus::InProgress.color()
            />
            <SummaryCard
                title="Concluído"
                value=stats.status_stats.done
                caption="Tarefas finalizadas"
                color=TaskStatus::Done.color()
            />
        </div>

        <div class="chart-grid">
            <div class="chart-card">
                <h3>"Distribuição por Status"</h3>
                <DonutChart slices=status />
            </div>
            <div class="chart-card">
                <h3>"Tipos de Tarefas"</h3>
                <BarChart slices=types />
            </div>
            <div class="chart-card">
                <h3>"Distribuição por Prioridade"</h3>
                <BarChart slices=priorities />
            </div>
            <div class="chart-card">
                <h3>"Carga de Trabalho da Equipe"</h3>
                <BarChart slices=workload />
            </div>
        </div>

        <div class="activity-card">
            <h3>"Atividades Recentes"</h3>
            <div class="activity-list">
                {stats
                    .recent_activities
                    .iter()
                    .take(5)
                    .map(|activity| {
                        view! {
                            <div class="activity-row">
                                <div class="activity-main">
                                    <span class="task-key">{activity.task_key.clone()}</span>
                                    <div>
                                        <p class="activity-title">{activity.task_title.clone()}</p>
                                        <p class="activity-assignee">
                                            {format!("Atribuído a: {}", activity.assignee)}
                                        </p>
                                    </div>
                                </div>
                                <div class="activity-side">
                                    <span
                                        class="status-badge"
                                        style=format!("background-color: {}", activity.status.color())
                                    >
                                        {activity.status.label()}
                                    </span>
                                    <p class="activity-date">
                                        {format_activity_date(&activity.updated_at)}
                                    </p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn SummaryCard(
    title: &'static str,
    value: u32,
    caption: &'static str,
    #[prop(into)] color: String,
) -> impl IntoView {
    view! {
        <div class="summary-card">
            <p class="summary-title">{title}</p>
            <p class="summary-value" style=format!("color: {}", color)>{value}</p>
            <p class="summary-caption">{caption}</p>
        </div>
    }
}
