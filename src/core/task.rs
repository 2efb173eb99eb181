//! Task data model for the ordering optimizer.
//!
//! Tasks are the atomic units of a project plan. Each task carries an
//! estimated duration, an estimated probability of failing (and ending
//! the project) if attempted, and the set of tasks that must complete
//! before it can be attempted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Unique identifier for a task within a table.
///
/// Ids are stable 1-based positions in the table, so they survive a
/// round-trip through the search and index directly into reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub usize);

impl TaskId {
    /// Create an id from a 1-based table position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The 0-based offset into the table's task vector.
    pub fn offset(&self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task with validated parameters.
///
/// Invariants (enforced by [`TaskTable::new`]):
/// - `duration > 0`
/// - `0 < fail_prob < 1`
/// - every id in `deps` resolves to another task in the same table
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Stable 1-based identifier within the owning table.
    pub id: TaskId,
    /// Unique human-readable name.
    pub name: String,
    /// Estimated duration (positive real, arbitrary time unit).
    pub duration: f64,
    /// Probability the task fails (ending the project) if attempted.
    pub fail_prob: f64,
    /// Tasks that must complete before this one may start.
    pub deps: Vec<TaskId>,
}

impl Task {
    /// Constant hazard rate implied by `(duration, fail_prob)` under the
    /// memoryless failure model: `ln(1/(1-p)) / t`, chosen so that the
    /// exponential clock fires before `t` with probability exactly `p`.
    pub fn hazard_rate(&self) -> f64 {
        (1.0 / (1.0 - self.fail_prob)).ln() / self.duration
    }
}

/// One row of the external task file.
///
/// Dependencies are stored by name rather than index so files remain
/// valid when rows are reordered or new rows are inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskSpec {
    pub name: String,
    pub duration: f64,
    pub fail_prob: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// Validated, immutable collection of tasks, indexed 1..n.
///
/// Construction performs all input validation; the optimizer assumes a
/// pre-validated table and does not re-check invariants per ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTable {
    tasks: Vec<Task>,
}

impl TaskTable {
    /// Build a table from external rows, validating every invariant.
    ///
    /// # Errors
    /// - [`Error::EmptyTable`] if no rows are given
    /// - [`Error::EmptyTaskName`] / [`Error::DuplicateTask`] on bad names
    /// - [`Error::InvalidDuration`] if a duration is not positive
    /// - [`Error::InvalidProbability`] if a probability is not strictly
    ///   inside (0, 1); a value of exactly 0 or 1 is rejected, never
    ///   clamped, since the hazard-rate formula is undefined there
    /// - [`Error::UnknownDependency`] / [`Error::SelfDependency`] on bad
    ///   dependency references
    pub fn new(specs: Vec<TaskSpec>) -> Result<Self> {
        if specs.is_empty() {
            return Err(Error::EmptyTable);
        }

        let mut name_to_id: HashMap<String, TaskId> = HashMap::new();
        for (i, spec) in specs.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(Error::EmptyTaskName);
            }
            if name_to_id
                .insert(spec.name.clone(), TaskId::new(i + 1))
                .is_some()
            {
                return Err(Error::DuplicateTask(spec.name.clone()));
            }
        }

        let mut tasks = Vec::with_capacity(specs.len());
        for (i, spec) in specs.into_iter().enumerate() {
            let id = TaskId::new(i + 1);

            if !spec.duration.is_finite() || spec.duration <= 0.0 {
                return Err(Error::InvalidDuration {
                    task: spec.name,
                    value: spec.duration,
                });
            }
            if !spec.fail_prob.is_finite() || spec.fail_prob <= 0.0 || spec.fail_prob >= 1.0 {
                return Err(Error::InvalidProbability {
                    task: spec.name,
                    value: spec.fail_prob,
                });
            }

            let mut deps = Vec::with_capacity(spec.depends_on.len());
            for dep_name in &spec.depends_on {
                let dep_id =
                    *name_to_id
                        .get(dep_name)
                        .ok_or_else(|| Error::UnknownDependency {
                            task: spec.name.clone(),
                            dependency: dep_name.clone(),
                        })?;
                if dep_id == id {
                    return Err(Error::SelfDependency { task: spec.name });
                }
                if !deps.contains(&dep_id) {
                    deps.push(dep_id);
                }
            }

            tasks.push(Task {
                id,
                name: spec.name,
                duration: spec.duration,
                fail_prob: spec.fail_prob,
                deps,
            });
        }

        Ok(Self { tasks })
    }

    /// Number of tasks in the table.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get a task by id. Panics never; unknown ids return `None`.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id.offset())
    }

    /// Get a task by id, assuming the id came from this table.
    pub fn task(&self, id: TaskId) -> &Task {
        &self.tasks[id.offset()]
    }

    /// Look up a task by name.
    pub fn by_name(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Iterate over tasks in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// All task ids in table order (the identity ordering 1..n).
    pub fn ids(&self) -> Vec<TaskId> {
        (1..=self.tasks.len()).map(TaskId::new).collect()
    }

    /// Probability that every task succeeds: `∏(1-p_i)`.
    ///
    /// Order-independent, so computed over table order.
    pub fn success_probability(&self) -> f64 {
        self.tasks.iter().map(|t| 1.0 - t.fail_prob).product()
    }

    /// Sum of all task durations (the all-success total time).
    pub fn total_duration(&self) -> f64 {
        self.tasks.iter().map(|t| t.duration).sum()
    }

    /// Convert back to external rows, dependencies by name.
    pub fn to_specs(&self) -> Vec<TaskSpec> {
        self.tasks
            .iter()
            .map(|t| TaskSpec {
                name: t.name.clone(),
                duration: t.duration,
                fail_prob: t.fail_prob,
                depends_on: t
                    .deps
                    .iter()
                    .map(|d| self.task(*d).name.clone())
                    .collect(),
            })
            .collect()
    }

    /// Load and validate a table from a JSON file of [`TaskSpec`] rows.
    pub fn load(path: &Path) -> Result<Self> {
        let specs: Vec<TaskSpec> = serde_json::from_str(&fs::read_to_string(path)?)?;
        Self::new(specs)
    }

    /// Save the table as a JSON file of [`TaskSpec`] rows.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(&self.to_specs())?)?;
        Ok(())
    }
}
