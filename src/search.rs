//! Breadth- and depth-first traversal.
//!
//! Both orders share one frontier-driven cursor: BFS takes the next node from
//! the front of the frontier, DFS from the back.  A node is marked visited
//! when it is pushed onto the frontier rather than when it is taken off, so
//! no node is ever queued twice.  For DFS this means the order is not the
//! preorder a recursive search would produce.
use std::{collections::VecDeque, iter::FusedIterator};

use bitvec::prelude::*;
use derivative::Derivative;

use crate::{Graph, edge::NodeId, node::Node};

/// Selects which end of the frontier a traversal takes nodes from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TraversalOrder {
    /// Breadth first: the frontier is a queue.
    Bfs,
    /// Depth first: the frontier is a stack.
    Dfs,
}

/// A cursor over the nodes reachable from a start node, in discovery order.
///
/// The cursor is either positioned on a node ([`Self::current`] is `Some`)
/// or exhausted.  It starts on the start node; [`Self::advance`] moves it to
/// the next node.  Two cursors are equal when they have the same order and
/// are positioned on the same node of the same graph.  Exhausted cursors of
/// the same order are equal regardless of graph, so every exhausted cursor
/// equals any `*_end` cursor of its order.
///
/// As an [`Iterator`], the cursor yields its current node and then advances,
/// so iterating and stepping manually visit nodes in the same order.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Traversal<'g> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph,
    order: TraversalOrder,
    current: Option<NodeId>,
    visited: BitVec,
    frontier: VecDeque<NodeId>,
}

impl PartialEq for Traversal<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self.current == other.current
            && (self.current.is_none() || std::ptr::eq(self.graph, other.graph))
    }
}

impl Eq for Traversal<'_> {}

impl<'g> Traversal<'g> {
    /// Creates a cursor positioned on `start`.  If `start` is `None` or not a
    /// node of `graph`, the cursor is created exhausted.
    pub fn new(graph: &'g Graph, start: Option<NodeId>, order: TraversalOrder) -> Self {
        let mut traversal = Self {
            graph,
            order,
            current: start.filter(|id| id.index() < graph.size()),
            visited: bitvec![0; graph.size()],
            frontier: VecDeque::new(),
        };
        if let Some(start) = traversal.current {
            traversal.visited.set(start.index(), true);
            traversal.discover(start);
        }
        traversal
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Gets the node the cursor is positioned on.
    pub fn current(&self) -> Option<&'g Node> {
        self.current.map(|id| &self.graph[id])
    }

    pub fn current_id(&self) -> Option<NodeId> {
        self.current
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// Checks whether [`Self::advance`] would move to another node.
    pub fn has_next(&self) -> bool {
        !self.frontier.is_empty()
    }

    /// Moves to the next node in traversal order.  Returns false, leaving
    /// the cursor exhausted, once the frontier is empty.
    pub fn advance(&mut self) -> bool {
        let next = match self.order {
            TraversalOrder::Bfs => self.frontier.pop_front(),
            TraversalOrder::Dfs => self.frontier.pop_back(),
        };
        self.current = next;
        match next {
            Some(id) => {
                self.discover(id);
                true
            }
            None => false,
        }
    }

    /// Pushes the unvisited successors of `id` onto the frontier.
    fn discover(&mut self, id: NodeId) {
        let graph = self.graph;
        for to in graph[id].neighbors() {
            if !self.visited.replace(to.index(), true) {
                self.frontier.push_back(to);
            }
        }
    }
}

impl<'g> Iterator for Traversal<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current()?;
        self.advance();
        Some(node)
    }
}

impl FusedIterator for Traversal<'_> {}

impl Graph {
    /// Creates a traversal cursor of the given order positioned on `start`.
    pub fn traverse(&self, start: NodeId, order: TraversalOrder) -> Traversal<'_> {
        Traversal::new(self, Some(start), order)
    }

    /// Performs a breadth-first search starting from the given node.
    pub fn bfs(&self, start: NodeId) -> Traversal<'_> {
        self.traverse(start, TraversalOrder::Bfs)
    }

    /// Performs a breadth-first search starting from the named node.  The
    /// cursor is exhausted from the start if there is no such node.
    pub fn bfs_from(&self, name: &str) -> Traversal<'_> {
        Traversal::new(self, self.id_of(name), TraversalOrder::Bfs)
    }

    /// Gets the exhausted breadth-first cursor.
    pub fn bfs_end(&self) -> Traversal<'_> {
        Traversal::new(self, None, TraversalOrder::Bfs)
    }

    /// Performs a depth-first search starting from the given node.
    pub fn dfs(&self, start: NodeId) -> Traversal<'_> {
        self.traverse(start, TraversalOrder::Dfs)
    }

    /// Performs a depth-first search starting from the named node.  The
    /// cursor is exhausted from the start if there is no such node.
    pub fn dfs_from(&self, name: &str) -> Traversal<'_> {
        Traversal::new(self, self.id_of(name), TraversalOrder::Dfs)
    }

    /// Gets the exhausted depth-first cursor.
    pub fn dfs_end(&self) -> Traversal<'_> {
        Traversal::new(self, None, TraversalOrder::Dfs)
    }
}
