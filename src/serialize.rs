//! Whitespace-delimited text encoding of a whole graph.
//!
//! The first line holds the node count.  Each node follows on its own line,
//! in id order, as its name, its edge count and a `target cost` pair per
//! edge, where `target` is the target node's id:
//!
//! ```text
//! 3
//! A 2 1 5 2 -1
//! B 1 2 3
//! C 0
//! ```
//!
//! Names are written verbatim, so a name that is empty or contains
//! whitespace cannot be read back.  Edge costs never equal [`INF_COST`],
//! and input that uses it is rejected.
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
    str::{FromStr, SplitWhitespace},
};

use crate::{
    Graph,
    edge::{Cost, INF_COST, NodeId},
    error::{FormatError, GraphError},
    node::Node,
    tracing_support::{debug, info_span, warn},
};

impl Graph {
    /// Writes the graph in the text format described in the module docs.
    pub fn serialize(&self, mut sink: impl Write) -> io::Result<()> {
        writeln!(sink, "{}", self.size())?;
        for node in self {
            write!(sink, "{} {}", node.name(), node.degree())?;
            for edge in node.edges() {
                write!(sink, " {} {}", edge.to(), edge.cost())?;
            }
            writeln!(sink)?;
        }
        Ok(())
    }

    /// Replaces the contents of this graph with a graph read from `source`.
    /// If the input is malformed the graph is left unchanged.
    pub fn deserialize(&mut self, mut source: impl Read) -> Result<(), GraphError> {
        let _span = info_span!("deserialize").entered();
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        match String::from_utf8(bytes)
            .map_err(FormatError::from)
            .and_then(|text| text.parse::<Graph>())
        {
            Ok(graph) => {
                debug!(
                    nodes = graph.size(),
                    edges = graph.num_edges(),
                    "read serialized graph"
                );
                *self = graph;
                Ok(())
            }
            Err(err) => {
                warn!(%err, "rejected serialized graph");
                Err(err.into())
            }
        }
    }

    /// Reads a new graph from `source`.
    pub fn from_reader(source: impl Read) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        graph.deserialize(source)?;
        Ok(graph)
    }

    /// Serializes the graph into the file at `path`, replacing it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GraphError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.serialize(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a graph from the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }
}

impl FromStr for Graph {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens(text.split_whitespace());
        let size: usize = tokens.number("node count")?;
        // Every node needs at least a name and an edge count, so a larger
        // count cannot be satisfied and is rejected before allocating.
        if size > text.split_whitespace().count().saturating_sub(1) / 2 {
            return Err(FormatError::Truncated {
                expected: "node name",
            });
        }

        let mut nodes: Vec<_> = (0..size)
            .map(|i| Node::new(NodeId::new(i), String::new()))
            .collect();
        for (i, node) in nodes.iter_mut().enumerate() {
            let name = tokens.next("node name")?;
            node.set_name(name.to_string());
            let degree: usize = tokens.number("edge count")?;
            for _ in 0..degree {
                let target: usize = tokens.number("edge target")?;
                if target >= size {
                    return Err(FormatError::TargetOutOfRange {
                        node: i,
                        target,
                        size,
                    });
                }
                let cost: Cost = tokens.number("edge cost")?;
                if cost == INF_COST {
                    return Err(FormatError::SentinelCost { node: i });
                }
                node.add_edge(NodeId::new(target), cost);
            }
        }
        if let Some(extra) = tokens.0.next() {
            return Err(FormatError::TrailingData(extra.to_string()));
        }

        Graph::from_nodes(nodes).map_err(FormatError::DuplicateName)
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next(&mut self, expected: &'static str) -> Result<&'a str, FormatError> {
        self.0.next().ok_or(FormatError::Truncated { expected })
    }

    fn number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, FormatError> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| FormatError::InvalidNumber {
            token: token.to_string(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5);
        graph.add_edge("A", "C", -1);
        graph.add_edge("B", "C", 3);
        graph.add_node("D");
        graph.add_edge("C", "A", 2);
        graph.add_edge("C", "A", 2);
        graph
    }

    fn serialized(graph: &Graph) -> String {
        let mut out = Vec::new();
        graph.serialize(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn parse_err(text: &str) -> FormatError {
        text.parse::<Graph>().unwrap_err()
    }

    #[test]
    fn test_serialize_format() {
        assert_eq!(
            serialized(&example_graph()),
            "4\nA 2 1 5 2 -1\nB 1 2 3\nC 2 0 2 0 2\nD 0\n"
        );
        assert_eq!(serialized(&Graph::new()), "0\n");
    }

    #[test]
    fn test_round_trip() {
        let graph = example_graph();
        let mut copy = Graph::new();
        copy.add_edge("stale", "data", 1);
        copy.deserialize(serialized(&graph).as_bytes()).unwrap();
        assert!(copy.compare(&graph));
        assert_eq!(copy, graph);
        assert_eq!(copy.id_of("C"), Some(NodeId::new(2)));
        assert!(!copy.contains("stale"));
        assert_eq!(copy.check_consistency(), Ok(()));
    }

    #[test]
    fn test_accepts_any_whitespace_layout() {
        let graph: Graph = "2\nx 1\n1 4\n\n y   0".parse().unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![("x", "y", 4)]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_err(""),
            FormatError::Truncated {
                expected: "node count"
            }
        );
        assert!("0".parse::<Graph>().unwrap().is_empty());
    }

    #[test]
    fn test_truncated() {
        assert_eq!(
            parse_err("2\nA 1 1"),
            FormatError::Truncated {
                expected: "edge cost"
            }
        );
        assert_eq!(
            parse_err("3\nA 0\nB 0"),
            FormatError::Truncated {
                expected: "node name"
            }
        );
        assert_eq!(
            parse_err("2\nA 0\nB"),
            FormatError::Truncated {
                expected: "node name"
            }
        );
    }

    #[test]
    fn test_huge_node_count_is_rejected() {
        assert!(matches!(
            parse_err("18446744073709551615\nA 0"),
            FormatError::Truncated { .. }
        ));
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(
            parse_err("-1"),
            FormatError::InvalidNumber {
                token: "-1".to_string(),
                expected: "node count"
            }
        );
        assert_eq!(
            parse_err("1\nA many"),
            FormatError::InvalidNumber {
                token: "many".to_string(),
                expected: "edge count"
            }
        );
        assert_eq!(
            parse_err("1\nA 1 0 cheap"),
            FormatError::InvalidNumber {
                token: "cheap".to_string(),
                expected: "edge cost"
            }
        );
    }

    #[test]
    fn test_infinite_cost_is_rejected() {
        assert_eq!(
            parse_err("2\nA 1 1 9223372036854775807\nB 0"),
            FormatError::SentinelCost { node: 0 }
        );
        let graph: Graph = "2\nA 1 1 9223372036854775806\nB 0".parse().unwrap();
        assert_eq!(graph.dijkstra_from("A"), Some(vec![0, INF_COST - 1]));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut graph = example_graph();
        let err = graph.deserialize(&b"1\n\xff\xfe 0\n"[..]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Format(FormatError::InvalidUtf8(_))
        ));
        assert_eq!(graph, example_graph());
    }

    #[test]
    fn test_read_failure_is_io_error() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        assert!(matches!(Graph::from_reader(Broken), Err(GraphError::Io(_))));
    }

    #[test]
    fn test_target_out_of_range() {
        assert_eq!(
            parse_err("2\nA 1 2 1\nB 0"),
            FormatError::TargetOutOfRange {
                node: 0,
                target: 2,
                size: 2
            }
        );
    }

    #[test]
    fn test_duplicate_name() {
        assert_eq!(
            parse_err("2\nA 0\nA 0"),
            FormatError::DuplicateName("A".to_string())
        );
    }

    #[test]
    fn test_trailing_data() {
        assert_eq!(
            parse_err("1\nA 0\nB 0"),
            FormatError::TrailingData("B".to_string())
        );
    }

    #[test]
    fn test_failed_deserialize_keeps_graph() {
        let mut graph = example_graph();
        let err = graph.deserialize("2\nA 1 7 1\nB 0".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Format(FormatError::TargetOutOfRange { target: 7, .. })
        ));
        assert_eq!(graph, example_graph());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("namegraph-{}.txt", std::process::id()));
        let graph = example_graph();
        graph.save(&path).unwrap();
        let loaded = Graph::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, graph);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("namegraph-does-not-exist/graph.txt");
        assert!(matches!(Graph::load(path), Err(GraphError::Io(_))));
    }
}
