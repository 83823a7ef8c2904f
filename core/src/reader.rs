//! Text adjacency format.
//!
//! ```text
//! G          graph kind: "D" directed, "G" undirected
//! A,B,C,D    comma-separated vertex ids
//! (A,B)      one edge per line, parentheses optional
//! (C,D)
//! ```
//!
//! A leading UTF-8 byte order mark is ignored, as are blank lines and
//! whitespace around ids.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphKind};

/// Build a graph from text in the adjacency format.
pub fn parse_graph(text: &str) -> Result<Graph> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (_, marker) = lines
        .next()
        .ok_or_else(|| Error::parse(1, "missing graph kind line"))?;
    let kind: GraphKind = marker.parse()?;
    let mut graph = Graph::from_kind(kind);

    let (_, vertex_line) = lines
        .next()
        .ok_or_else(|| Error::parse(2, "missing vertex list"))?;
    for id in vertex_line.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !graph.contains_id(id) {
            graph.add_vertex(id);
        }
    }

    for (line_no, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (from, to) = parse_edge(line).ok_or_else(|| {
            Error::parse(line_no, format!("expected an edge like (A,B), got '{}'", line))
        })?;
        graph.add_edge(from, to);
    }

    debug!(
        kind = kind.marker(),
        vertices = graph.node_count(),
        edges = graph.edge_count(),
        "graph parsed"
    );
    Ok(graph)
}

/// Read and parse a graph file.
pub fn read_graph_from_file(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read graph file");
    parse_graph(&text)
}

/// Split `(A,B)` or `A,B` into its two ids.
fn parse_edge(line: &str) -> Option<(&str, &str)> {
    let inner = match line.strip_prefix('(') {
        Some(rest) => rest.strip_suffix(')')?,
        None => line,
    };

    let mut parts = inner.split(',').map(str::trim);
    let from = parts.next().filter(|s| !s.is_empty())?;
    let to = parts.next().filter(|s| !s.is_empty())?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to))
}

impl FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_graph(s)
    }
}
