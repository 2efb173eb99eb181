//! Dependency graph for precedence constraints.
//!
//! This module provides the TaskDag structure that represents task
//! precedence as a directed graph, used for explicit cycle detection
//! and for checking whether a candidate ordering is feasible.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

use crate::core::task::{TaskId, TaskTable};
use crate::error::{Error, Result};

/// The precedence graph implied by a task table.
///
/// Nodes are task ids; an edge `dep -> task` means `dep` must complete
/// before `task` may start.
pub struct TaskDag {
    /// The underlying directed graph.
    graph: DiGraph<TaskId, ()>,
    /// Index mapping from TaskId to NodeIndex for fast lookups.
    task_index: HashMap<TaskId, NodeIndex>,
}

impl TaskDag {
    /// Build the precedence graph from a validated table.
    ///
    /// The table guarantees every dependency resolves, so edge insertion
    /// cannot fail here.
    pub fn from_table(table: &TaskTable) -> Self {
        let mut graph = DiGraph::new();
        let mut task_index = HashMap::new();

        for task in table.iter() {
            let index = graph.add_node(task.id);
            task_index.insert(task.id, index);
        }
        for task in table.iter() {
            for dep in &task.deps {
                graph.add_edge(task_index[dep], task_index[&task.id], ());
            }
        }

        Self { graph, task_index }
    }

    /// Number of tasks in the graph.
    pub fn task_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of precedence edges.
    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Reject the table up front if the precedence relation is cyclic.
    ///
    /// A cyclic relation admits no valid sequence at all; detecting it
    /// here gives a clearer diagnosis than an empty search result.
    ///
    /// # Errors
    /// Returns [`Error::CyclicDependency`] naming a task that sits on a
    /// cycle.
    pub fn ensure_acyclic(&self, table: &TaskTable) -> Result<()> {
        // A strongly connected component with more than one node is a
        // cycle; every node inside it sits on that cycle. Self-loops
        // cannot occur since the table rejects self-dependencies.
        let culprit = tarjan_scc(&self.graph)
            .into_iter()
            .find(|scc| scc.len() > 1)
            .and_then(|scc| self.graph.node_weight(scc[0]).copied());

        match culprit {
            None => Ok(()),
            Some(id) => {
                let task = table
                    .get(id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(Error::CyclicDependency { task })
            }
        }
    }

    /// Check whether an ordering respects every precedence constraint.
    ///
    /// Walks the ordering left to right, maintaining the set of tasks
    /// placed so far; a task is only admissible once all of its declared
    /// dependencies are in that set. Short-circuits on the first
    /// violation. Tasks with no dependencies are feasible anywhere,
    /// including first.
    pub fn is_feasible(&self, table: &TaskTable, ordering: &[TaskId]) -> bool {
        let mut placed: HashSet<TaskId> = HashSet::with_capacity(ordering.len());
        for &id in ordering {
            if !self.task_index.contains_key(&id) {
                return false;
            }
            let task = table.task(id);
            if !task.deps.iter().all(|dep| placed.contains(dep)) {
                return false;
            }
            placed.insert(id);
        }
        true
    }
}

impl std::fmt::Debug for TaskDag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskDag")
            .field("tasks", &self.task_count())
            .field("dependencies", &self.dependency_count())
            .finish()
    }
}
