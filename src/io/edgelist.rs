//! Edge-list parsing and community output
//!
//! Two input line forms are accepted, freely mixed:
//!
//! ```text
//! 0 1            # plain pair "u v"
//! 2: 0 3 4       # adjacency form "node: n1 n2 ..."
//! 7:             # adjacency form with no neighbors registers an isolated node
//! ```
//!
//! Blank lines and `#` comments are skipped. Self-loops and non-numeric
//! identifiers are rejected here, before a graph is ever built; the
//! algorithm layer assumes a well-formed symmetric graph.
//!
//! Output is the legacy convention: one community per line, space-separated
//! ascending node ids.

use crate::algorithms::Partition;
use crate::graph::{AdjacencyGraph, NodeId};
use std::io::Write;
use thiserror::Error;

/// Edge-list parse failure, with the offending 1-based line number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token was not a non-negative integer node id.
    #[error("line {line}: invalid node id {token:?}")]
    InvalidNodeId {
        /// 1-based line number.
        line: usize,
        /// The rejected token.
        token: String,
    },

    /// A pair line did not hold exactly two node ids.
    #[error("line {line}: expected \"u v\", got {count} fields")]
    WrongFieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of whitespace-separated fields found.
        count: usize,
    },

    /// An edge joined a node to itself.
    #[error("line {line}: self-loop on node {node}")]
    SelfLoop {
        /// 1-based line number.
        line: usize,
        /// The looping node id.
        node: u32,
    },
}

fn parse_node(token: &str, line: usize) -> Result<NodeId, ParseError> {
    token
        .parse::<u32>()
        .map(NodeId)
        .map_err(|_| ParseError::InvalidNodeId {
            line,
            token: token.to_string(),
        })
}

/// Parse an edge-list document into a graph.
///
/// # Errors
///
/// Returns a [`ParseError`] for non-numeric ids, malformed pair lines, or
/// self-loops.
///
/// # Example
///
/// ```
/// use edgecut::parse_edge_list;
///
/// let graph = parse_edge_list("0 1\n1 2\n# comment\n3:\n").unwrap();
/// assert_eq!(graph.num_nodes(), 4); // 3 is isolated
/// assert_eq!(graph.num_edges(), 2);
/// ```
pub fn parse_edge_list(input: &str) -> Result<AdjacencyGraph, ParseError> {
    let mut graph = AdjacencyGraph::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        if let Some((head, tail)) = content.split_once(':') {
            // Adjacency form
            let node = parse_node(head.trim(), line)?;
            graph.add_node(node);
            for token in tail.split_whitespace() {
                let neighbor = parse_node(token, line)?;
                add_checked(&mut graph, node, neighbor, line)?;
            }
        } else {
            // Pair form
            let fields: Vec<&str> = content.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(ParseError::WrongFieldCount {
                    line,
                    count: fields.len(),
                });
            }
            let u = parse_node(fields[0], line)?;
            let v = parse_node(fields[1], line)?;
            add_checked(&mut graph, u, v, line)?;
        }
    }

    Ok(graph)
}

fn add_checked(
    graph: &mut AdjacencyGraph,
    u: NodeId,
    v: NodeId,
    line: usize,
) -> Result<(), ParseError> {
    if u == v {
        return Err(ParseError::SelfLoop { line, node: u.0 });
    }
    // Self-loops are already screened, so the store cannot refuse this
    graph.add_edge(u, v).map_err(|_| ParseError::SelfLoop { line, node: u.0 })
}

/// Write a partition in the legacy format: one community per line,
/// space-separated ascending node ids.
///
/// # Errors
///
/// Propagates I/O errors from the writer.
///
/// # Example
///
/// ```
/// use edgecut::{write_partition, connected_components, parse_edge_list};
///
/// let graph = parse_edge_list("0 1\n2 3\n").unwrap();
/// let partition = connected_components(&graph);
///
/// let mut out = Vec::new();
/// write_partition(&mut out, &partition).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "0 1\n2 3\n");
/// ```
pub fn write_partition<W: Write>(writer: &mut W, partition: &Partition) -> std::io::Result<()> {
    for community in partition {
        let mut first = true;
        for node in community {
            if first {
                write!(writer, "{node}")?;
                first = false;
            } else {
                write!(writer, " {node}")?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}
