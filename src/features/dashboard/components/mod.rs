pub mod charts;
pub mod dashboard;

pub use charts::{BarChart, DonutChart};
pub use dashboard::Dashboard;
