//! Monte Carlo sampling of the failure-time distribution.
//!
//! The closed-form evaluator gives the expected total time; this module
//! approximates *where in the timeline* failures land, for a chosen
//! ordering, by simulating a pool of independent trials. Only failing
//! trials produce a sample; survivors fall out of the output entirely.

use rand::Rng;

use crate::core::task::{TaskId, TaskTable};

/// Monte Carlo failure-time sampler for one ordering.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    /// Number of independent trials entering the first task.
    pub trials: usize,
}

impl Simulator {
    pub fn new(trials: usize) -> Self {
        Self { trials }
    }

    /// Simulate the project under `ordering` and collect the elapsed
    /// time at which each failing trial died.
    ///
    /// Per task, every alive trial draws an exponential with the task's
    /// hazard rate; a draw within the task's window is a failure at
    /// `elapsed + draw`, anything later means the trial survives the
    /// task and the draw is discarded (the model is memoryless, so the
    /// next task re-draws from scratch). Elapsed time advances by the
    /// full task duration regardless of how many trials died inside it.
    pub fn run<R: Rng>(&self, table: &TaskTable, ordering: &[TaskId], rng: &mut R) -> Vec<f64> {
        let mut samples = Vec::new();
        let mut alive = self.trials;
        let mut elapsed = 0.0;

        for &id in ordering {
            let task = table.task(id);
            let rate = task.hazard_rate();

            let mut survivors = 0;
            for _ in 0..alive {
                // Inverse-transform sample on (0, 1] so ln never sees zero.
                let u = 1.0 - rng.gen::<f64>();
                let draw = -u.ln() / rate;
                if draw <= task.duration {
                    samples.push(elapsed + draw);
                } else {
                    survivors += 1;
                }
            }

            alive = survivors;
            elapsed += task.duration;
            if alive == 0 {
                break;
            }
        }

        samples
    }

    /// Fraction of trials that survived a run producing `samples`.
    pub fn survival_fraction(&self, samples: &[f64]) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.trials - samples.len()) as f64 / self.trials as f64
    }
}
