pub mod task_operations;

pub use task_operations::*;
