//! Counting the ways to get from one node to another.
//!
//! [`Graph::num_of_paths`] counts walks: it expands every partial walk
//! breadth first without remembering visited nodes, so a walk may pass
//! through a node any number of times.  If a cycle is reachable from the
//! start without passing through the target, the count never finishes.
//! [`Graph::num_of_paths_with`] takes [`PathCountOptions`] to count simple
//! paths instead, to bound the work, or both.
//!
//! In every mode a walk or path ends at the first arrival at the target, and
//! paths are told apart by the edges they use, so parallel edges give
//! distinct paths.
use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::{
    Graph,
    edge::NodeId,
    error::GraphError,
    tracing_support::{info_span, warn},
};

/// What [`Graph::num_of_paths_with`] counts.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PathCounting {
    /// Walks, which may revisit nodes.  Diverges on reachable cycles unless
    /// an expansion limit is set.
    #[default]
    Walks,
    /// Paths that visit each node at most once.  Always terminates.
    SimplePaths,
}

/// Options for [`Graph::num_of_paths_with`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PathCountOptions {
    pub counting: PathCounting,
    /// Maximum number of partial paths to expand before giving up with
    /// [`GraphError::WalkLimitExceeded`].  `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl PathCountOptions {
    /// Counts walks without a limit, like [`Graph::num_of_paths`].
    pub fn walks() -> Self {
        Self::default()
    }

    pub fn simple_paths() -> Self {
        Self {
            counting: PathCounting::SimplePaths,
            max_expansions: None,
        }
    }

    pub fn with_max_expansions(self, limit: usize) -> Self {
        Self {
            max_expansions: Some(limit),
            ..self
        }
    }
}

/// Counts expansions against an optional limit.
struct Budget {
    used: usize,
    limit: Option<usize>,
}

impl Budget {
    fn spend(&mut self) -> Result<(), GraphError> {
        self.used += 1;
        match self.limit {
            Some(limit) if self.used > limit => {
                warn!(limit, "path count expansion limit exceeded");
                Err(GraphError::WalkLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}

impl Graph {
    /// Counts the walks from `from` to `to`.  Returns 0 if either id is not a
    /// node of the graph.
    ///
    /// This does not terminate if a cycle is reachable from `from` other
    /// than through `to`; use [`Self::num_of_paths_with`] for graphs that
    /// may contain cycles.
    pub fn num_of_paths(&self, from: NodeId, to: NodeId) -> usize {
        if self.check_node_id(from).is_err() || self.check_node_id(to).is_err() {
            return 0;
        }
        let mut budget = Budget {
            used: 0,
            limit: None,
        };
        // Without a limit the budget never runs out.
        self.count_walks(from, to, &mut budget).unwrap_or(0)
    }

    /// Like [`Self::num_of_paths`], taking node names.  Returns 0 if either
    /// node does not exist.
    pub fn num_of_paths_between(&self, from: &str, to: &str) -> usize {
        match (self.id_of(from), self.id_of(to)) {
            (Some(from), Some(to)) => self.num_of_paths(from, to),
            _ => 0,
        }
    }

    /// Counts walks or simple paths from `from` to `to` as selected by
    /// `options`.  Returns `Ok(0)` if either id is not a node of the graph.
    pub fn num_of_paths_with(
        &self,
        from: NodeId,
        to: NodeId,
        options: PathCountOptions,
    ) -> Result<usize, GraphError> {
        if self.check_node_id(from).is_err() || self.check_node_id(to).is_err() {
            return Ok(0);
        }
        let _span = info_span!("num_of_paths", %from, %to, ?options).entered();
        let mut budget = Budget {
            used: 0,
            limit: options.max_expansions,
        };
        match options.counting {
            PathCounting::Walks => self.count_walks(from, to, &mut budget),
            PathCounting::SimplePaths => self.count_simple_paths(from, to, &mut budget),
        }
    }

    fn count_walks(
        &self,
        from: NodeId,
        to: NodeId,
        budget: &mut Budget,
    ) -> Result<usize, GraphError> {
        let mut count = 0;
        let mut queue = VecDeque::from([from]);
        while let Some(id) = queue.pop_front() {
            budget.spend()?;
            if id == to {
                count += 1;
                continue;
            }
            queue.extend(self[id].neighbors());
        }
        Ok(count)
    }

    fn count_simple_paths(
        &self,
        from: NodeId,
        to: NodeId,
        budget: &mut Budget,
    ) -> Result<usize, GraphError> {
        budget.spend()?;
        if from == to {
            return Ok(1);
        }

        let mut count = 0;
        let mut on_path = bitvec![0; self.size()];
        on_path.set(from.index(), true);
        let mut stack = vec![(from, 0)];
        while let Some((id, next_edge)) = stack.last_mut() {
            let id = *id;
            match self[id].edges().get(*next_edge) {
                Some(edge) => {
                    *next_edge += 1;
                    let next = edge.to();
                    if next == to {
                        count += 1;
                    } else if !on_path[next.index()] {
                        budget.spend()?;
                        on_path.set(next.index(), true);
                        stack.push((next, 0));
                    }
                }
                None => {
                    on_path.set(id.index(), false);
                    stack.pop();
                }
            }
        }
        Ok(count)
    }
}
