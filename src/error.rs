use std::io;

use crate::NodeId;

/// Errors reported by graph algorithms and by deserialization.
///
/// Lookups that merely miss (unknown node names, absent edges) are not
/// errors; they are reported through `bool` and `Option` return values.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// The operation needs at least one node.
    #[error("operation requires a non-empty graph")]
    EmptyGraph,
    /// A node id did not refer to a node of the graph.
    #[error("node id {id} is out of range for a graph of {size} nodes")]
    NodeOutOfRange { id: NodeId, size: usize },
    /// A guarded path count expanded more entries than allowed.
    #[error("path counting exceeded the limit of {limit} expansions")]
    WalkLimitExceeded { limit: usize },
    /// Serialized graph data could not be parsed.
    #[error("malformed graph data: {0}")]
    Format(#[from] FormatError),
    /// Reading or writing serialized data failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The ways serialized graph text can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The input ended while more tokens were expected.
    #[error("unexpected end of input, expected {expected}")]
    Truncated { expected: &'static str },
    /// A token that should be a number was not one.
    #[error("expected {expected}, found {token:?}")]
    InvalidNumber {
        token: String,
        expected: &'static str,
    },
    /// An edge referenced a node position past the declared node count.
    #[error("edge of node {node} targets id {target}, but only {size} nodes are declared")]
    TargetOutOfRange {
        node: usize,
        target: usize,
        size: usize,
    },
    /// An edge carried the cost reserved for unreachable distances.
    #[error("edge of node {node} uses the reserved infinite cost")]
    SentinelCost { node: usize },
    /// The input was not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// Two nodes carried the same name.
    #[error("node name {0:?} appears more than once")]
    DuplicateName(String),
    /// Tokens remained after the last declared node.
    #[error("unexpected trailing data starting at {0:?}")]
    TrailingData(String),
}
