//! The [`Graph`] type: node storage, the name index and the mutation API.
//!
//! Nodes live in a vector whose positions double as their [`NodeId`]s, and
//! edges are stored inline in their source node, referring to their target
//! by id.  Removing a node compacts the vector, so every later node, every
//! edge endpoint and the name index are renumbered in the same operation.
//!
//! Traversals and algorithms are implemented in their own modules as further
//! `impl Graph` blocks:
//!
//! - [`crate::search`]: breadth- and depth-first cursors
//! - [`crate::shortest_path`]: Dijkstra and Bellman-Ford negative cycles
//! - [`crate::cycle`]: cycle detection
//! - [`crate::paths`]: path counting
//! - [`crate::mother`]: mother vertex discovery
//! - [`crate::serialize`]: the text round-trip format
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    io,
    ops::Index,
};

use crate::{
    edge::{Cost, DEFAULT_COST, INF_COST, NodeId},
    error::GraphError,
    node::Node,
    tracing_support::{debug, trace},
};

/// A directed multigraph whose nodes are addressed by unique names.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Gets the number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets the number of edges over all nodes.
    pub fn num_edges(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Checks whether a node with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Gets the id currently assigned to `name`.
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.id_of(name).map(|id| &self.nodes[id.index()])
    }

    /// Gets an iterator over the nodes in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Gets an iterator over all node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Adds a node named `name`.  Returns false, leaving the graph untouched,
    /// if the name is already taken.
    pub fn add_node(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.push_node(name.to_string());
        self.debug_check_consistency();
        true
    }

    fn push_node(&mut self, name: String) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        debug!(%id, name = name.as_str(), "adding node");
        self.index.insert(name.clone(), id);
        self.nodes.push(Node::new(id, name));
        id
    }

    fn get_or_create_node(&mut self, name: &str) -> NodeId {
        match self.id_of(name) {
            Some(id) => id,
            None => self.push_node(name.to_string()),
        }
    }

    /// Removes the node named `name` together with its outgoing edges and
    /// every edge pointing at it.  Nodes after it move down one position.
    /// Returns false if no such node exists.
    pub fn remove_node(&mut self, name: &str) -> bool {
        let Some(removed) = self.index.remove(name) else {
            return false;
        };
        debug!(id = %removed, name, "removing node");
        self.nodes.remove(removed.index());
        for node in &mut self.nodes {
            node.forget_node(removed);
        }
        for id in self.index.values_mut() {
            if *id > removed {
                *id = NodeId::new(id.index() - 1);
            }
        }
        self.debug_check_consistency();
        true
    }

    /// Adds an edge from `from` to `to`, creating either node if needed.
    /// Parallel edges are kept.  Returns false, leaving the graph untouched,
    /// only if `cost` is the [`INF_COST`] sentinel.
    pub fn add_edge(&mut self, from: &str, to: &str, cost: Cost) -> bool {
        if cost == INF_COST {
            debug!(from, to, "refusing edge with infinite cost");
            return false;
        }
        let from_id = self.get_or_create_node(from);
        let to_id = self.get_or_create_node(to);
        self.add_edge_by_id(from_id, to_id, cost);
        self.debug_check_consistency();
        true
    }

    /// Adds an edge with the default cost of 1.
    pub fn add_edge_default(&mut self, from: &str, to: &str) -> bool {
        self.add_edge(from, to, DEFAULT_COST)
    }

    /// Appends an edge between two existing positions without touching the
    /// name index.
    pub(crate) fn add_edge_by_id(&mut self, from: NodeId, to: NodeId, cost: Cost) {
        trace!(%from, %to, cost, "adding edge");
        self.nodes[from.index()].add_edge(to, cost);
    }

    /// Removes the first edge from `from` to `to`.  Returns false if either
    /// node or the edge does not exist.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let (Some(from_id), Some(to_id)) = (self.id_of(from), self.id_of(to)) else {
            return false;
        };
        let removed = self.nodes[from_id.index()].remove_edge(to_id);
        if removed {
            debug!(from, to, "removed edge");
        }
        removed
    }

    /// Checks if there is at least one edge from `from` to `to`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_by_name(from), self.id_of(to)) {
            (Some(node), Some(to_id)) => node.has_edge(to_id),
            _ => false,
        }
    }

    /// Changes the cost of the first edge from `from` to `to`.  Returns
    /// false if there is no such edge or if `cost` is [`INF_COST`].
    pub fn set_edge_cost(&mut self, from: &str, to: &str, cost: Cost) -> bool {
        if cost == INF_COST {
            return false;
        }
        let (Some(from_id), Some(to_id)) = (self.id_of(from), self.id_of(to)) else {
            return false;
        };
        match self.nodes[from_id.index()].edge_to_mut(to_id) {
            Some(edge) => {
                edge.set_cost(cost);
                true
            }
            None => false,
        }
    }

    /// Gets `(target name, cost)` for every outgoing edge of `name`, in edge
    /// insertion order.  Empty if the node does not exist.
    pub fn neighbors<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = (&'a str, Cost)> + use<'a> {
        self.node_by_name(name)
            .into_iter()
            .flat_map(|node| node.edges())
            .map(move |edge| (self.nodes[edge.to().index()].name(), edge.cost()))
    }

    /// Gets the names of all nodes.  Callers should not rely on the order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(Node::name)
    }

    /// Gets every edge as `(source name, target name, cost)`.  Edges of one
    /// node keep their insertion order; the order across nodes is
    /// unspecified.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Cost)> + '_ {
        self.nodes.iter().flat_map(move |node| {
            node.edges().iter().map(move |edge| {
                (
                    node.name(),
                    self.nodes[edge.to().index()].name(),
                    edge.cost(),
                )
            })
        })
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    /// Writes the human-readable listing produced by the `Display` impl.
    pub fn dump(&self, mut sink: impl io::Write) -> io::Result<()> {
        write!(sink, "{self}")
    }

    /// Compares the structure of two graphs: node count and, position by
    /// position, the `(target, cost)` sequence of each node's edges.  Names
    /// are not compared.
    pub fn compare(&self, other: &Graph) -> bool {
        self.size() == other.size()
            && self
                .nodes
                .iter()
                .zip(&other.nodes)
                .all(|(lhs, rhs)| lhs.compare(rhs))
    }

    /// Returns an error if `id` is not a position of this graph.
    pub(crate) fn check_node_id(&self, id: NodeId) -> Result<(), GraphError> {
        if id.index() < self.size() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                id,
                size: self.size(),
            })
        }
    }

    /// Builds a graph from nodes whose ids already match their positions.
    /// Fails with the duplicated name if two nodes share one.
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Result<Self, String> {
        let mut index = HashMap::with_capacity(nodes.len());
        for node in &nodes {
            if index.insert(node.name().to_string(), node.id()).is_some() {
                return Err(node.name().to_string());
            }
        }
        let graph = Self { nodes, index };
        graph.debug_check_consistency();
        Ok(graph)
    }

    /// Checks every structural invariant of the graph, returning a reason if
    /// one does not hold.  This is linear in the size of the graph.
    pub fn check_consistency(&self) -> Result<(), &'static str> {
        if self.index.len() != self.nodes.len() {
            return Err("name index and node storage differ in size");
        }
        for (pos, node) in self.nodes.iter().enumerate() {
            if node.id().index() != pos {
                return Err("node id does not match its position");
            }
            if self.index.get(node.name()) != Some(&node.id()) {
                return Err("name index does not map the node's name to its id");
            }
            for edge in node.edges() {
                if edge.from() != node.id() {
                    return Err("edge source does not match its owning node");
                }
                if edge.to().index() >= self.nodes.len() {
                    return Err("edge target is out of range");
                }
            }
        }
        Ok(())
    }

    /// Panics if [`Self::check_consistency`] fails, but only in debug builds
    /// without the `unchecked` feature.
    fn debug_check_consistency(&self) {
        #[cfg(all(debug_assertions, not(feature = "unchecked")))]
        if let Err(reason) = self.check_consistency() {
            panic!("Graph invariant violated: {reason}");
        }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for Graph {}

impl Index<NodeId> for Graph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl<'g> IntoIterator for &'g Graph {
    type Item = &'g Node;
    type IntoIter = std::slice::Iter<'g, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}:", node.name())?;
            for edge in node.edges() {
                writeln!(
                    f,
                    "  to: {}, cost: {}",
                    self.nodes[edge.to().index()].name(),
                    edge.cost()
                )?;
            }
        }
        Ok(())
    }
}
