//! An in-memory directed multigraph with named nodes and weighted edges.
//!
//! ```
//! use namegraph::{Graph, NodeId};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 5);
//! graph.add_edge("A", "C", 2);
//! graph.add_edge("C", "B", 1);
//!
//! assert_eq!(graph.dijkstra(NodeId::new(0)).unwrap(), vec![0, 3, 2]);
//! assert!(!graph.is_cyclic());
//! let order: Vec<_> = graph.bfs_from("A").map(|node| node.name()).collect();
//! assert_eq!(order, ["A", "B", "C"]);
//! ```
pub mod edge;
pub mod error;
pub mod generate_large_graph;
pub mod graph;
pub mod node;
pub mod paths;
pub mod search;
pub mod tracing_support;

mod cycle;
mod mother;
mod serialize;
mod shortest_path;

pub use edge::{Cost, DEFAULT_COST, Edge, INF_COST, NodeId};
pub use error::{FormatError, GraphError};
pub use graph::Graph;
pub use node::Node;
pub use paths::{PathCountOptions, PathCounting};
pub use search::{Traversal, TraversalOrder};
