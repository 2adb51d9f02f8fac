pub mod stats;
pub mod task;
pub mod user;

// Export the domain types for use throughout the app
pub use stats::{DashboardStats, PriorityStats, RecentActivity, StatusStats, TypeStats};
pub use task::{Task, TaskPriority, TaskStatus, TaskType};
pub use user::{Department, User};
