//! Core decision-theoretic optimizer.
//!
//! This module contains the fundamental pieces of the ordering
//! optimizer: the validated task table, the precedence graph, the
//! permutation enumerator, the exact expected-time evaluator, the
//! exhaustive selector, and the Monte Carlo failure-time simulator.

pub mod dag;
pub mod expect;
pub mod permute;
pub mod search;
pub mod simulate;
pub mod task;

pub use dag::TaskDag;
pub use expect::expected_time;
pub use permute::Permutations;
pub use search::{find_optimal, OptimalPlan, SearchOptions};
pub use simulate::Simulator;
pub use task::{Task, TaskId, TaskSpec, TaskTable};
