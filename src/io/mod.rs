/*!
# IO

Reading raw edge lists from text and writing the representations of a graph as text.
Neither is involved in building or converting graphs; both only use the public constructors
and read-only accessors.

- [`EdgeListReader`] parses lines `u v` into [`Edge`]s that can be passed to
  [`build_graph`](crate::graph::build_graph).
- [`TextWriter`] prints adjacency matrices, adjacency lists and incidence matrices.
*/

pub mod edge_list;
pub mod text;

use std::io::{ErrorKind, Result};

use crate::{edge::*, node::*};

pub use edge_list::*;
pub use text::*;

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
