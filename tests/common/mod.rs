#![allow(dead_code)]

use std::collections::HashSet;

use namegraph::{Cost, Graph, NodeId};
use quickcheck::{Arbitrary, Gen};

/// A random graph of up to 20 nodes, built through the public API so it
/// includes parallel edges, self-loops, isolated nodes and the renumbering
/// left behind by node removal.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % 20;
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_parallel_edges = usize::arbitrary(g) % 5;
        let num_extra_self_loops = usize::arbitrary(g) % 5;
        let num_removals = usize::arbitrary(g) % 3;

        let mut graph = Graph::new();
        for i in 0..num_nodes {
            graph.add_node(&format!("n{i}"));
        }
        for i in 0..num_edges {
            if num_nodes == 0 {
                break;
            }
            let source = format!("n{}", usize::arbitrary(g) % num_nodes);
            let target = format!("n{}", usize::arbitrary(g) % num_nodes);
            graph.add_edge(&source, &target, arbitrary_cost(g));
            if i < num_extra_parallel_edges {
                graph.add_edge(&source, &target, arbitrary_cost(g));
            }
            if i < num_extra_self_loops {
                graph.add_edge(&source, &source, arbitrary_cost(g));
            }
        }
        for _ in 0..num_removals {
            if num_nodes > 0 {
                graph.remove_node(&format!("n{}", usize::arbitrary(g) % num_nodes));
            }
        }

        ArbGraph { graph }
    }
}

fn arbitrary_cost(g: &mut Gen) -> Cost {
    Cost::from(i16::arbitrary(g))
}

/// Copies `graph` with every edge cost replaced by its absolute value.
pub fn with_non_negative_costs(graph: &Graph) -> Graph {
    let mut copy = Graph::new();
    for name in graph.nodes() {
        copy.add_node(name);
    }
    for (from, to, cost) in graph.edges() {
        copy.add_edge(from, to, cost.abs());
    }
    copy
}

/// Every node reachable from `start`, found by a plain worklist search.
pub fn reachable_from(graph: &Graph, start: NodeId) -> HashSet<NodeId> {
    let mut seen = HashSet::from([start]);
    let mut work = vec![start];
    while let Some(id) = work.pop() {
        for next in graph[id].neighbors() {
            if seen.insert(next) {
                work.push(next);
            }
        }
    }
    seen
}

pub fn has_duplicates<T: Eq + std::hash::Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    items.into_iter().any(|item| !seen.insert(item))
}
