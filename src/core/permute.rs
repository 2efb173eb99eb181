//! Lazy enumeration of task orderings.
//!
//! Produces every permutation of the ids `{1, ..., n}` in lexicographic
//! order, one at a time. The factorial blow-up is the caller's problem:
//! the search layer caps `n` before constructing one of these.

use crate::core::task::TaskId;

/// Iterator over all `n!` orderings of `TaskId(1)..=TaskId(n)`.
///
/// Finite and not restartable; construct a new one to enumerate again.
pub struct Permutations {
    current: Vec<TaskId>,
    done: bool,
}

impl Permutations {
    /// Enumerate orderings of `n` tasks. `n == 0` yields nothing.
    pub fn new(n: usize) -> Self {
        Self {
            current: (1..=n).map(TaskId::new).collect(),
            done: n == 0,
        }
    }

    /// Advance `current` to its lexicographic successor in place.
    /// Returns false once the last permutation has been passed.
    fn advance(&mut self) -> bool {
        let v = &mut self.current;
        // Longest non-increasing suffix marks the pivot.
        let Some(i) = (0..v.len() - 1).rev().find(|&i| v[i] < v[i + 1]) else {
            return false;
        };
        // Smallest element in the suffix greater than the pivot.
        let j = (i + 1..v.len()).rev().find(|&j| v[j] > v[i]).unwrap();
        v.swap(i, j);
        v[i + 1..].reverse();
        true
    }
}

impl Iterator for Permutations {
    type Item = Vec<TaskId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        if self.current.len() < 2 || !self.advance() {
            self.done = true;
        }
        Some(item)
    }
}
