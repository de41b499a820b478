//! # EdgeList
//!
//! Raw edge lists are read line by line: every non-empty, non-comment line `u v` is an edge.
//! Unlike files with a header, the number of nodes is not stated but inferred when the
//! edges are turned into a [`Graph`](crate::graph::Graph).
//!
//! ```
//! use graph_reprs::{io::EdgeListReader, prelude::*};
//!
//! let input = "c a triangle\n0 1\n1 2\n\n2 0\n";
//! let edges = EdgeListReader::new().try_read_edges(input.as_bytes()).unwrap();
//! assert_eq!(edges, vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
//!
//! let graph = build_graph(edges).unwrap();
//! assert_eq!(graph.number_of_nodes(), 3);
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::*;

/// A reader for raw edge lists
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Nodes in the input are numbered `1..=n` and are decremented by one
    one_indexed: bool,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
            one_indexed: false,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// If *true*, nodes are read as `1..=n` and stored as `0..n`
    pub fn one_indexed(mut self, one_indexed: bool) -> EdgeListReader {
        self.one_indexed = one_indexed;
        self
    }

    /// Reads all edges from `reader`.
    ///
    /// # Errors
    /// Returns an error if reading fails, a line does not contain two non-negative integers,
    /// or a node is `0` in one-indexed mode.
    pub fn try_read_edges<R: BufRead>(&self, reader: R) -> Result<Vec<Edge>> {
        let mut edges = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty()
                || (!self.comment_identifier.is_empty()
                    && line.starts_with(self.comment_identifier.as_str()))
            {
                continue;
            }

            edges.push(self.parse_edge_line(line)?);
        }
        Ok(edges)
    }

    /// Reads all edges from the file at `path`
    pub fn try_read_edges_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Edge>> {
        self.try_read_edges(BufReader::new(File::open(path)?))
    }

    /// Tries to parse an edge from a non-comment-line
    fn parse_edge_line(&self, line: &str) -> Result<Edge> {
        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Unexpected trailing tokens in edge line '{line}'.")
        );

        if self.one_indexed {
            raise_error_unless!(
                from > 0 && dest > 0,
                ErrorKind::InvalidData,
                format!("Node 0 in one-indexed edge line '{line}'.")
            );
            Ok(Edge(from - 1, dest - 1))
        } else {
            Ok(Edge(from, dest))
        }
    }
}
