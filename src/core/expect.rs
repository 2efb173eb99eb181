//! Closed-form expected project time for one ordering.
//!
//! Model: each attempted task fails independently with its probability
//! `p`; conditioned on failing, time-to-failure within the task's window
//! is exponential with rate `λ = ln(1/(1-p)) / t`, truncated to `[0, t)`.
//! A surviving task consumes exactly `t` before the next one starts.
//!
//! With tasks indexed 1..n in *ordering* sequence and prefix durations
//! `prefix_i = Σ_{j<i} t_j`:
//!
//! - `P(L=i) = p_i · ∏_{k<i}(1-p_k)` (reach step i and fail there)
//! - `P(L=0) = ∏(1-p_i)` (full success)
//! - `E[T|L=i] = prefix_i − t_i/p_i + t_i/ln(1/(1-p_i)) + t_i`
//! - `E[T] = P(L=0)·Σt_i + Σ_i P(L=i)·E[T|L=i]`
//!
//! Exact, no simulation; O(n) per ordering via running sums. Assumes a
//! validated table (`0 < p < 1`, `t > 0`), so every term is finite.

use crate::core::task::{TaskId, TaskTable};

/// Expected total elapsed time until the project completes or first
/// fails, for the given attempt ordering.
pub fn expected_time(table: &TaskTable, ordering: &[TaskId]) -> f64 {
    let mut expected = 0.0;
    let mut prefix = 0.0; // Σ durations of earlier steps
    let mut reach = 1.0; // ∏ (1-p) over earlier steps

    for &id in ordering {
        let task = table.task(id);
        let t = task.duration;
        let p = task.fail_prob;

        let p_fail_here = reach * p;
        let mean_given_failure = prefix - t / p + t / (1.0 / (1.0 - p)).ln() + t;
        expected += p_fail_here * mean_given_failure;

        prefix += t;
        reach *= 1.0 - p;
    }

    // Full-success branch: all durations elapse.
    expected + reach * prefix
}
