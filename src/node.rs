use crate::edge::{Cost, Edge, NodeId};

/// A named vertex owning its outgoing edges.
///
/// Edges keep their insertion order.  Several edges may point at the same
/// target; every lookup by target acts on the first one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    id: NodeId,
    name: String,
    edges: Vec<Edge>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Gets the outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Gets the number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Gets the target of every outgoing edge, in edge order.  A target
    /// appears once per edge pointing at it.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().map(|edge| edge.to)
    }

    /// Checks whether at least one edge points at `to`.
    pub fn has_edge(&self, to: NodeId) -> bool {
        self.edges.iter().any(|edge| edge.to == to)
    }

    pub(crate) fn add_edge(&mut self, to: NodeId, cost: Cost) {
        self.edges.push(Edge::new(self.id, to, cost));
    }

    /// Removes the first edge pointing at `to`.
    pub(crate) fn remove_edge(&mut self, to: NodeId) -> bool {
        match self.edges.iter().position(|edge| edge.to == to) {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn edge_to_mut(&mut self, to: NodeId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|edge| edge.to == to)
    }

    /// Drops every edge into `removed` and renumbers this node and the
    /// remaining edges for the compacted storage.
    pub(crate) fn forget_node(&mut self, removed: NodeId) {
        self.edges.retain(|edge| edge.to != removed);
        if self.id > removed {
            self.id = NodeId::new(self.id.index() - 1);
        }
        for edge in &mut self.edges {
            edge.shift_after_removal(removed);
        }
    }

    /// Compares degree and the `(target, cost)` sequence of the edges.
    pub fn compare(&self, other: &Node) -> bool {
        self.degree() == other.degree()
            && self
                .edges
                .iter()
                .zip(&other.edges)
                .all(|(lhs, rhs)| lhs.same_shape(rhs))
    }
}
