//! # Text
//!
//! Human readable output of the representations:
//!
//! ```text
//! Adjacency matrix:
//! [0, 1, 1]
//! [1, 0, 0]
//! [1, 0, 0]
//!
//! Adjacency list:
//! 0: [1, 2]
//! 1: [0]
//! 2: [0]
//!
//! Incidence matrix:
//! 01 02  edges
//! [1, 1]
//! [1, 0]
//! [0, 1]
//! ```

use std::{fmt::Display, io::Write};

use itertools::Itertools;

use super::*;
use crate::{graph::Graph, ops::*, repr::*};

/// A writer printing representations as text
#[derive(Debug, Clone)]
pub struct TextWriter {
    /// Print a title line before each representation
    titles: bool,
}

impl Default for TextWriter {
    fn default() -> Self {
        Self { titles: true }
    }
}

impl TextWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, representations are written without title line
    pub fn titles(mut self, titles: bool) -> Self {
        self.titles = titles;
        self
    }

    fn write_title<W: Write>(&self, writer: &mut W, title: &str) -> Result<()> {
        if self.titles {
            writeln!(writer, "{title}:")?;
        }
        Ok(())
    }

    fn write_row<W, I>(writer: &mut W, row: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator,
        I::Item: Display,
    {
        writeln!(writer, "[{}]", row.into_iter().join(", "))
    }

    /// Writes one `[0, 1, ...]` line per row
    pub fn write_adjacency_matrix<W: Write>(
        &self,
        writer: &mut W,
        matrix: &AdjMatrix,
    ) -> Result<()> {
        self.write_title(writer, "Adjacency matrix")?;
        for u in matrix.vertices() {
            Self::write_row(writer, matrix.vertices().map(|v| matrix.entry(u, v)))?;
        }
        Ok(())
    }

    /// Writes one `u: [neighbors]` line per node
    pub fn write_adjacency_list<W: Write>(&self, writer: &mut W, list: &AdjList) -> Result<()> {
        self.write_title(writer, "Adjacency list")?;
        for u in list.vertices() {
            write!(writer, "{u}: ")?;
            Self::write_row(writer, list.neighbors_of(u))?;
        }
        Ok(())
    }

    /// Writes a header line naming the edge of every column, followed by one line per row
    pub fn write_incidence_matrix<W: Write>(
        &self,
        writer: &mut W,
        matrix: &IncidenceMatrix,
    ) -> Result<()> {
        self.write_title(writer, "Incidence matrix")?;

        let header: Vec<String> = matrix
            .columns()
            .map_ok(|Edge(u, v)| format!("{u}{v}"))
            .collect::<std::result::Result<_, _>>()
            .map_err(|err| io_error!(ErrorKind::InvalidData, err))?;
        writeln!(writer, "{}  edges", header.join(" "))?;

        let m = matrix.number_of_edges();
        for u in matrix.vertices() {
            Self::write_row(writer, (0..m).map(|k| matrix.entry(u, k)))?;
        }
        Ok(())
    }

    /// Writes all three representations of `graph`, separated by empty lines
    pub fn write_graph<W: Write>(&self, writer: &mut W, graph: &Graph) -> Result<()> {
        self.write_adjacency_matrix(writer, graph.adjacency_matrix())?;
        writeln!(writer)?;
        self.write_adjacency_list(writer, graph.adjacency_list())?;
        writeln!(writer)?;
        self.write_incidence_matrix(writer, graph.incidence_matrix())
    }
}
