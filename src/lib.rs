pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod report;

pub use crate::core::{
    expected_time, find_optimal, OptimalPlan, Permutations, SearchOptions, Simulator, Task,
    TaskDag, TaskId, TaskSpec, TaskTable,
};
pub use error::{Error, Result};
pub use report::Report;
