use crate::{Graph, edge::Cost, tracing_support::debug};

/// Adds a large graph with an irregular, deterministic structure to `graph`.
///
/// The graph structure includes:
/// - Cluster 1: Dense cluster (50 nodes, ~60% connectivity)
/// - Cluster 2: Medium cluster (80 nodes, ~30% connectivity)
/// - Cluster 3: Large sparse cluster (150 nodes, ~8% connectivity)
/// - Hub nodes (20 nodes with many outgoing edges)
/// - Scattered nodes (100 nodes with few connections)
/// - Bridge nodes pointing into each cluster (10 nodes)
/// - Long-range edges, reciprocal pairs and self-loops
///
/// Nodes are named `v0`, `v1`, ... in insertion order, continuing past the
/// highest such name already used so existing nodes are left alone.  The
/// cost of the `i`th edge added is `edge_cost(i)`.
pub fn generate_large_graph(graph: &mut Graph, mut edge_cost: impl FnMut(usize) -> Cost) {
    let mut builder = Builder {
        graph,
        names: Vec::new(),
        next_edge: 0,
    };

    // Clusters only link forward, so on their own they are acyclic.
    let cluster1_start = builder.add_nodes(50);
    builder.connect_within(cluster1_start, |i, j| (i * 7 + j * 11) % 10 < 6, &mut edge_cost);
    let cluster2_start = builder.add_nodes(80);
    builder.connect_within(cluster2_start, |i, j| (i * 13 + j * 17) % 10 < 3, &mut edge_cost);
    let cluster3_start = builder.add_nodes(150);
    builder.connect_within(cluster3_start, |i, j| (i * 19 + j * 23) % 100 < 8, &mut edge_cost);

    let hubs_start = builder.names.len();
    for _ in 0..20 {
        let hub = builder.add_nodes(1);
        for i in 0..hub {
            if (hubs_start * 29 + i * 31) % 7 < 4 {
                builder.connect(hub, i, &mut edge_cost);
            }
        }
    }

    let scattered_start = builder.names.len();
    for _ in 0..100 {
        let node = builder.add_nodes(1);
        let len = builder.names.len();
        let num_connections = (scattered_start + len) % 3 + 1;
        for c in 0..num_connections {
            let target = (scattered_start * 37 + len * 41 + c * 43) % (len - 1);
            builder.connect(node, target, &mut edge_cost);
        }
    }

    for i in 0..10 {
        let bridge = builder.add_nodes(1);
        let into1 = (i * 47) % (cluster2_start - cluster1_start) + cluster1_start;
        let into2 = (i * 53) % (cluster3_start - cluster2_start) + cluster2_start;
        let into3 = (i * 59) % (hubs_start - cluster3_start) + cluster3_start;
        for target in [into1, into2, into3] {
            builder.connect(bridge, target, &mut edge_cost);
        }
    }

    let len = builder.names.len();
    for i in 0..200 {
        let (a, b) = ((i * 61) % len, (i * 67 + 100) % len);
        if a != b {
            builder.connect(a, b, &mut edge_cost);
        }
    }

    for i in 0..50 {
        let (a, b) = ((i * 73 + 7) % len, (i * 79 + 11) % len);
        if a != b {
            builder.connect(a, b, &mut edge_cost);
            builder.connect(b, a, &mut edge_cost);
        }
    }

    for i in 0..50 {
        let a = (i * 71) % len;
        builder.connect(a, a, &mut edge_cost);
    }

    debug!(
        nodes = builder.names.len(),
        edges = builder.next_edge,
        "generated large graph"
    );
}

struct Builder<'g> {
    graph: &'g mut Graph,
    names: Vec<String>,
    next_edge: usize,
}

impl Builder<'_> {
    /// Adds `count` fresh nodes and returns the position of the first one in
    /// `names`.
    fn add_nodes(&mut self, count: usize) -> usize {
        let start = self.names.len();
        let mut suffix = self.graph.size();
        while self.names.len() < start + count {
            let name = format!("v{suffix}");
            suffix += 1;
            if self.graph.add_node(&name) {
                self.names.push(name);
            }
        }
        start
    }

    fn connect_within(
        &mut self,
        start: usize,
        linked: impl Fn(usize, usize) -> bool,
        edge_cost: &mut impl FnMut(usize) -> Cost,
    ) {
        for i in start..self.names.len() {
            for j in (i + 1)..self.names.len() {
                if linked(i, j) {
                    self.connect(i, j, edge_cost);
                }
            }
        }
    }

    fn connect(&mut self, from: usize, to: usize, edge_cost: &mut impl FnMut(usize) -> Cost) {
        let cost = edge_cost(self.next_edge);
        self.next_edge += 1;
        self.graph.add_edge(&self.names[from], &self.names[to], cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let mut graph = Graph::new();
        generate_large_graph(&mut graph, |_| 1);
        assert_eq!(graph.size(), 410);
        assert!(graph.num_edges() > 1_000);
        assert!(graph.is_cyclic());
        assert_eq!(graph.check_consistency(), Ok(()));
    }

    #[test]
    fn test_keeps_existing_nodes() {
        let mut graph = Graph::new();
        graph.add_edge("v0", "v1", 3);
        generate_large_graph(&mut graph, |i| i as Cost);
        assert_eq!(graph.size(), 412);
        assert_eq!(graph.node_by_name("v0").map(|node| node.degree()), Some(1));
    }

    #[test]
    fn test_deterministic() {
        let mut first = Graph::new();
        let mut second = Graph::new();
        generate_large_graph(&mut first, |i| (i % 17) as Cost);
        generate_large_graph(&mut second, |i| (i % 17) as Cost);
        assert_eq!(first, second);
    }
}
