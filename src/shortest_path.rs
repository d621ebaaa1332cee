use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    Graph,
    edge::{Cost, Edge, INF_COST, NodeId},
    error::GraphError,
    node::Node,
    tracing_support::{debug, info_span},
};

/// Adds an edge cost to a known distance.  Returns `None` if the distance is
/// infinite or if the sum overflows or lands on the infinity sentinel, so
/// such a sum never relaxes anything.
fn extend(dist: Cost, cost: Cost) -> Option<Cost> {
    if dist == INF_COST {
        return None;
    }
    dist.checked_add(cost).filter(|&total| total != INF_COST)
}

impl Graph {
    /// Computes the cost of the cheapest path from `start` to every node
    /// using Dijkstra's algorithm.  The result is indexed by node id, with
    /// [`INF_COST`] for unreachable nodes.
    ///
    /// Edge costs are assumed to be non-negative; with negative costs the
    /// result is unspecified.  Use [`Self::has_negative_cycle`] to check
    /// graphs that may contain them.
    pub fn dijkstra(&self, start: NodeId) -> Result<Vec<Cost>, GraphError> {
        self.check_node_id(start)?;
        let _span = info_span!("dijkstra", %start, nodes = self.size()).entered();

        let mut dist = vec![INF_COST; self.size()];
        dist[start.index()] = 0;
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((0, start)));

        while let Some(Reverse((cost, id))) = queue.pop() {
            // A cheaper entry for this node was already processed.
            if cost > dist[id.index()] {
                continue;
            }
            for edge in self[id].edges() {
                let Some(total) = extend(cost, edge.cost()) else {
                    continue;
                };
                let to = edge.to();
                if total < dist[to.index()] {
                    dist[to.index()] = total;
                    queue.push(Reverse((total, to)));
                }
            }
        }
        Ok(dist)
    }

    /// Convenience wrapper around [`Self::dijkstra`] taking a node name.
    /// Returns `None` if there is no such node.
    pub fn dijkstra_from(&self, name: &str) -> Option<Vec<Cost>> {
        let start = self.id_of(name)?;
        self.dijkstra(start).ok()
    }

    /// Checks for a negative-cost cycle with the Bellman-Ford algorithm,
    /// using the node with id 0 as the source.
    ///
    /// Only cycles reachable from node 0 are found.  Fails with
    /// [`GraphError::EmptyGraph`] if the graph has no nodes.
    pub fn has_negative_cycle(&self) -> Result<bool, GraphError> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let _span = info_span!("has_negative_cycle", nodes = self.size()).entered();

        let mut dist = vec![INF_COST; self.size()];
        dist[0] = 0;
        for round in 1..self.size() {
            let mut changed = false;
            for edge in self.iter().flat_map(Node::edges) {
                if let Some(total) = relaxation(&dist, edge) {
                    dist[edge.to().index()] = total;
                    changed = true;
                }
            }
            if !changed {
                debug!(round, "distances settled early");
                break;
            }
        }

        Ok(self
            .iter()
            .flat_map(Node::edges)
            .any(|edge| relaxation(&dist, edge).is_some()))
    }
}

/// Returns the improved distance to the target of `edge`, if going through
/// the edge is cheaper than the current one.
fn relaxation(dist: &[Cost], edge: &Edge) -> Option<Cost> {
    extend(dist[edge.from().index()], edge.cost())
        .filter(|&total| total < dist[edge.to().index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyclic_positive_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5);
        graph.add_edge("A", "C", 2);
        graph.add_edge("B", "D", 1);
        graph.add_edge("D", "E", 3);
        graph.add_edge("C", "E", 3);
        graph.add_edge("E", "A", 1);
        graph
    }

    fn mixed_sign_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", -1);
        graph.add_edge("A", "C", 4);
        graph.add_edge("B", "C", 3);
        graph.add_edge("B", "D", 2);
        graph.add_edge("A", "E", 2);
        graph.add_edge("D", "C", 5);
        graph.add_edge("D", "B", 1);
        graph.add_edge("E", "D", -3);
        graph
    }

    #[test]
    fn test_dijkstra_example() {
        let graph = cyclic_positive_graph();
        assert_eq!(graph.dijkstra(NodeId::new(0)).unwrap(), vec![0, 5, 2, 6, 5]);
    }

    #[test]
    fn test_dijkstra_from_other_start() {
        let graph = cyclic_positive_graph();
        assert_eq!(graph.dijkstra_from("E"), Some(vec![1, 6, 3, 7, 0]));
        assert_eq!(graph.dijkstra_from("missing"), None);
    }

    #[test]
    fn test_dijkstra_unreachable_is_infinite() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_node("C");
        assert_eq!(
            graph.dijkstra(NodeId::new(1)).unwrap(),
            vec![INF_COST, 0, INF_COST]
        );
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_parallel_edge() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 9);
        graph.add_edge("A", "B", 4);
        assert_eq!(graph.dijkstra(NodeId::new(0)).unwrap(), vec![0, 4]);
    }

    #[test]
    fn test_dijkstra_overflow_does_not_wrap() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", Cost::MAX - 1);
        graph.add_edge("B", "C", 10);
        graph.add_edge("B", "D", 0);
        let dist = graph.dijkstra(NodeId::new(0)).unwrap();
        assert_eq!(dist, vec![0, Cost::MAX - 1, INF_COST, Cost::MAX - 1]);
    }

    #[test]
    fn test_dijkstra_out_of_range() {
        let graph = cyclic_positive_graph();
        assert!(matches!(
            graph.dijkstra(NodeId::new(5)),
            Err(GraphError::NodeOutOfRange { size: 5, .. })
        ));
    }

    #[test]
    fn test_negative_cycle_example() {
        let mut graph = mixed_sign_graph();
        assert!(!graph.has_negative_cycle().unwrap());
        graph.add_edge("D", "A", -1);
        assert!(graph.has_negative_cycle().unwrap());
    }

    #[test]
    fn test_negative_self_loop() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", -1);
        assert!(graph.has_negative_cycle().unwrap());
    }

    #[test]
    fn test_negative_cycle_unreachable_from_first_node() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_edge("B", "C", -2);
        graph.add_edge("C", "B", -2);
        assert!(!graph.has_negative_cycle().unwrap());
    }

    #[test]
    fn test_negative_cycle_on_empty_graph() {
        assert!(matches!(
            Graph::new().has_negative_cycle(),
            Err(GraphError::EmptyGraph)
        ));
    }
}
