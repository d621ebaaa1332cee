//! Loads a serialized graph, prints it and runs the graph algorithms on it.
//!
//! This example demonstrates how to:
//! - Read a graph from a file, from stdin, or generate a large one
//! - Walk it breadth or depth first from a named node
//! - Run shortest paths, cycle checks, path counting and mother node search
//! - Write the graph back out in serialized form
//!
//! Try `cargo run --example graph_tool -- --generate --from v0 --to v42`.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use namegraph::{
    Cost, Graph, INF_COST, NodeId, PathCountOptions, TraversalOrder,
    generate_large_graph::generate_large_graph,
    tracing_support::{LevelFilter, init_tracing_with},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Bfs,
    Dfs,
}

impl From<Order> for TraversalOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Bfs => TraversalOrder::Bfs,
            Order::Dfs => TraversalOrder::Dfs,
        }
    }
}

/// Inspect a serialized graph and run algorithms on it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Serialized graph to read (reads stdin if neither this nor --generate is given)
    input: Option<String>,

    /// Use a large generated graph instead of reading one
    #[arg(long, conflicts_with = "input")]
    generate: bool,

    /// Node to start traversals, shortest paths and path counts from
    #[arg(short, long)]
    from: Option<String>,

    /// Node to count paths to
    #[arg(short, long, requires = "from")]
    to: Option<String>,

    /// Traversal order
    #[arg(long, value_enum, default_value = "bfs")]
    order: Order,

    /// Count simple paths instead of walks
    #[arg(long)]
    simple: bool,

    /// Give up path counting after this many expansions
    #[arg(long, default_value_t = 1_000_000)]
    max_expansions: usize,

    /// Print the human-readable listing of the graph
    #[arg(long)]
    dump: bool,

    /// Write the graph in serialized form to this file
    #[arg(short, long)]
    output: Option<String>,

    /// Log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_graph(args: &Args) -> Result<Graph, Box<dyn std::error::Error>> {
    if args.generate {
        let mut graph = Graph::new();
        generate_large_graph(&mut graph, |i| (i % 9 + 1) as Cost);
        return Ok(graph);
    }
    Ok(match args.input {
        Some(ref path) => Graph::load(path)?,
        None => Graph::from_reader(io::stdin().lock())?,
    })
}

fn format_cost(cost: Cost) -> String {
    if cost == INF_COST {
        "unreachable".to_string()
    } else {
        cost.to_string()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing_with(match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    });

    let graph = load_graph(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "nodes: {}, edges: {}", graph.size(), graph.num_edges())?;
    if args.dump {
        graph.dump(&mut out)?;
    }
    writeln!(out, "cyclic: {}", graph.is_cyclic())?;
    if !graph.is_empty() {
        let first = graph[NodeId::new(0)].name();
        writeln!(out, "negative cycle from {first}: {}", graph.has_negative_cycle()?)?;
    }
    match graph.mother_node() {
        Some(node) => writeln!(out, "mother node: {}", node.name())?,
        None => writeln!(out, "mother node: none")?,
    }
    #[cfg(feature = "pathfinding")]
    writeln!(out, "mother nodes: {}", graph.mother_nodes_exhaustive().len())?;

    if let Some(ref from) = args.from {
        let Some(start) = graph.id_of(from) else {
            return Err(format!("no node named {from:?}").into());
        };
        let order: Vec<_> = graph
            .traverse(start, args.order.into())
            .map(|node| node.name())
            .collect();
        writeln!(out, "{:?} from {from}: {}", args.order, order.join(" "))?;

        writeln!(out, "distances from {from}:")?;
        for (node, cost) in graph.iter().zip(graph.dijkstra(start)?) {
            writeln!(out, "  {}: {}", node.name(), format_cost(cost))?;
        }

        if let Some(ref to) = args.to {
            let Some(target) = graph.id_of(to) else {
                return Err(format!("no node named {to:?}").into());
            };
            let options = if args.simple {
                PathCountOptions::simple_paths()
            } else {
                PathCountOptions::walks()
            }
            .with_max_expansions(args.max_expansions);
            match graph.num_of_paths_with(start, target, options) {
                Ok(count) => writeln!(out, "paths from {from} to {to}: {count}")?,
                Err(err) => writeln!(out, "paths from {from} to {to}: {err}")?,
            }
        }
    }

    if let Some(ref path) = args.output {
        graph.save(path)?;
        eprintln!("Graph written to {path}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run()
}
