//! Optimal-order selection by exhaustive search.
//!
//! Generate-and-filter: enumerate all n! orderings, keep the ones that
//! respect precedence, score each with the exact closed form, and keep
//! the minimum. Brute force by design; the table size cap makes the
//! worst case bounded (≤ max_tasks! · max_tasks evaluations).

use crate::core::dag::TaskDag;
use crate::core::expect::expected_time;
use crate::core::permute::Permutations;
use crate::core::task::{TaskId, TaskTable};
use crate::error::{Error, Result};
use crate::{olog_debug, olog_trace};

/// Tuning knobs for the ordering search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Largest table the exhaustive search will accept.
    pub max_tasks: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_tasks: crate::config::DEFAULT_MAX_TASKS,
        }
    }
}

/// The search result: the minimizing ordering and the score landscape.
#[derive(Debug, Clone)]
pub struct OptimalPlan {
    /// The feasible ordering with the globally minimal expected time.
    /// Ties go to the first minimum in enumeration order.
    pub ordering: Vec<TaskId>,
    /// Expected total time of `ordering` (exact, not simulated).
    pub expected_time: f64,
    /// Overall success probability `∏(1-p_i)`; order-independent.
    pub success_probability: f64,
    /// Expected times of every feasible ordering, sorted ascending.
    pub all_expected_times: Vec<f64>,
    /// Number of feasible orderings examined.
    pub feasible_count: usize,
}

/// Find the feasible ordering minimizing expected total project time.
///
/// Validates capacity and acyclicity before enumerating, so the
/// exhaustive pass runs only on inputs it can finish.
///
/// # Errors
/// - [`Error::TooManyTasks`] if the table exceeds `options.max_tasks`
/// - [`Error::CyclicDependency`] if the precedence relation is cyclic
/// - [`Error::NoFeasibleOrdering`] if no ordering survives filtering
///   (unreachable for an acyclic table, kept as a guard rather than
///   letting an empty minimum panic)
pub fn find_optimal(table: &TaskTable, options: &SearchOptions) -> Result<OptimalPlan> {
    let n = table.len();
    if n > options.max_tasks {
        return Err(Error::TooManyTasks {
            count: n,
            max: options.max_tasks,
        });
    }

    let dag = TaskDag::from_table(table);
    dag.ensure_acyclic(table)?;

    let mut best: Option<(Vec<TaskId>, f64)> = None;
    let mut all_expected_times = Vec::new();

    for ordering in Permutations::new(n) {
        if !dag.is_feasible(table, &ordering) {
            continue;
        }
        let score = expected_time(table, &ordering);
        olog_trace!("ordering {:?} scored {}", ordering, score);
        all_expected_times.push(score);

        // Strict comparison keeps the first minimum on ties.
        match &best {
            Some((_, best_score)) if score >= *best_score => {}
            _ => best = Some((ordering, score)),
        }
    }

    let (ordering, expected_time) = best.ok_or(Error::NoFeasibleOrdering)?;
    let feasible_count = all_expected_times.len();
    all_expected_times.sort_by(|a, b| a.total_cmp(b));

    olog_debug!(
        "search done: {} feasible of {} tasks, best E[T]={}",
        feasible_count,
        n,
        expected_time
    );

    Ok(OptimalPlan {
        ordering,
        expected_time,
        success_probability: table.success_probability(),
        all_expected_times,
        feasible_count,
    })
}
