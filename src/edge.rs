use std::fmt::{self, Display, Formatter};

/// The cost type carried by edges and produced by shortest-path searches.
pub type Cost = i64;

/// Distance reported for nodes that cannot be reached.  Never a valid edge
/// cost sum: relaxation skips any addition that would reach or pass it.
pub const INF_COST: Cost = Cost::MAX;

/// The cost given to edges added without an explicit one.
pub const DEFAULT_COST: Cost = 1;

/// Identifies a node by its position in the graph's node storage.
///
/// Ids are dense and zero-based.  Removing a node shifts every later node
/// down by one, so an id is only meaningful until the next removal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position this id refers to.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted arc stored inline in its source node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    pub(crate) from: NodeId,
    pub(crate) to: NodeId,
    pub(crate) cost: Cost,
}

impl Edge {
    pub(crate) fn new(from: NodeId, to: NodeId, cost: Cost) -> Self {
        Self { from, to, cost }
    }

    /// The node owning this edge.
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// The node this edge points at.
    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn set_cost(&mut self, cost: Cost) {
        self.cost = cost;
    }

    /// Compares target and cost only, which is what distinguishes two edges
    /// stored at the same position of nodes at the same position.
    pub fn same_shape(&self, other: &Edge) -> bool {
        (self.to, self.cost) == (other.to, other.cost)
    }

    /// Rewrites both endpoints after the node at `removed` was deleted.
    /// Endpoints past the removed position move down by one.
    pub(crate) fn shift_after_removal(&mut self, removed: NodeId) {
        if self.from > removed {
            self.from = NodeId(self.from.0 - 1);
        }
        if self.to > removed {
            self.to = NodeId(self.to.0 - 1);
        }
    }
}
