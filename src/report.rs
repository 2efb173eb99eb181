//! Report assembly for the optimizer's outputs.
//!
//! Bundles the selected ordering, the two summary scalars, the score
//! landscape, and the simulated failure-time samples into one value the
//! presentation layer (terminal text or JSON) can consume.

use serde::Serialize;

use crate::core::{OptimalPlan, TaskTable};

/// Everything a caller needs to display one optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Selected ordering as task names, best first attempt first.
    pub ordering: Vec<String>,
    /// Minimal expected total project time (exact).
    pub expected_time: f64,
    /// Probability the whole project succeeds.
    pub success_probability: f64,
    /// Number of feasible orderings examined.
    pub feasible_count: usize,
    /// Expected times of all feasible orderings, sorted ascending.
    pub all_expected_times: Vec<f64>,
    /// Simulated elapsed times at which failing trials died.
    /// Empty when simulation was skipped.
    pub failure_samples: Vec<f64>,
}

impl Report {
    /// Assemble a report from the search result and optional simulation
    /// samples, resolving ids back to names for the boundary.
    pub fn new(table: &TaskTable, plan: &OptimalPlan, failure_samples: Vec<f64>) -> Self {
        Self {
            ordering: plan
                .ordering
                .iter()
                .map(|id| table.task(*id).name.clone())
                .collect(),
            expected_time: plan.expected_time,
            success_probability: plan.success_probability,
            feasible_count: plan.feasible_count,
            all_expected_times: plan.all_expected_times.clone(),
            failure_samples,
        }
    }

    /// Mean of the failure samples, if any failed.
    pub fn mean_failure_time(&self) -> Option<f64> {
        if self.failure_samples.is_empty() {
            return None;
        }
        Some(self.failure_samples.iter().sum::<f64>() / self.failure_samples.len() as f64)
    }

    /// Render a plain-text summary for the terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Optimal task order:\n");
        for (i, name) in self.ordering.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, name));
        }
        out.push('\n');
        out.push_str(&format!("  Expected time:       {:.4}\n", self.expected_time));
        out.push_str(&format!(
            "  Success probability: {:.4}\n",
            self.success_probability
        ));
        out.push_str(&format!(
            "  Feasible orderings:  {}",
            self.feasible_count
        ));
        if self.feasible_count > 1 {
            let worst = self.all_expected_times[self.all_expected_times.len() - 1];
            out.push_str(&format!(" (worst E[T] {:.4})", worst));
        }
        out.push('\n');

        if !self.failure_samples.is_empty() {
            out.push_str(&format!(
                "\nSimulation ({} failing trials):\n",
                self.failure_samples.len()
            ));
            if let Some(mean) = self.mean_failure_time() {
                out.push_str(&format!("  Mean failure time:   {:.4}\n", mean));
            }
        }
        out
    }

    /// Render the report as pretty JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
