#![cfg(feature = "slow_tests")]

mod common;

use common::reachable_from;
use namegraph::{
    Cost, Graph, INF_COST, NodeId, PathCountOptions, generate_large_graph::generate_large_graph,
    tracing_support::init_tracing,
};

fn large_graph() -> Graph {
    init_tracing();
    let mut graph = Graph::new();
    generate_large_graph(&mut graph, |i| (i % 23 + 1) as Cost);
    graph
}

#[test]
fn test_serialize_round_trip() {
    let graph = large_graph();
    let path = std::env::temp_dir().join(format!("namegraph-large-{}.txt", std::process::id()));
    graph.save(&path).unwrap();
    let loaded = Graph::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(loaded.compare(&graph));
    assert_eq!(loaded, graph);
}

#[test]
fn test_traversals_match_reachability() {
    let graph = large_graph();
    for start in graph.node_ids().step_by(37) {
        let expected = reachable_from(&graph, start).len();
        assert_eq!(graph.bfs(start).count(), expected);
        assert_eq!(graph.dfs(start).count(), expected);
    }
}

#[test]
fn test_dijkstra_reaches_what_bfs_reaches() {
    let graph = large_graph();
    let dist = graph.dijkstra(NodeId::new(0)).unwrap();
    let reached = dist.iter().filter(|&&d| d != INF_COST).count();
    assert_eq!(reached, graph.bfs(NodeId::new(0)).count());
    assert!(!graph.has_negative_cycle().unwrap());
}

#[test]
fn test_mother_nodes_agree() {
    let graph = large_graph();
    let exhaustive = graph.mother_nodes_exhaustive();
    match graph.mother_node() {
        Some(mother) => assert!(exhaustive.iter().any(|node| node.id() == mother.id())),
        None => assert!(exhaustive.is_empty()),
    }
}

#[test]
fn test_walk_count_is_bounded() {
    let graph = large_graph();
    assert!(graph.is_cyclic());
    let options = PathCountOptions::walks().with_max_expansions(100_000);
    let (from, to) = (NodeId::new(0), NodeId::new(graph.size() - 1));
    match graph.num_of_paths_with(from, to, options) {
        Ok(_) | Err(namegraph::GraphError::WalkLimitExceeded { limit: 100_000 }) => {}
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn test_remove_half_the_nodes() {
    let mut graph = large_graph();
    let victims: Vec<String> = graph.nodes().step_by(2).map(str::to_string).collect();
    for name in &victims {
        assert!(graph.remove_node(name));
    }
    assert_eq!(graph.size(), 205);
    assert_eq!(graph.check_consistency(), Ok(()));
}
