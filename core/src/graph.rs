use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::node::{Node, NodeIndex};

/// Edge orientation of a graph, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl GraphKind {
    pub fn is_directed(self) -> bool {
        matches!(self, GraphKind::Directed)
    }

    /// One-letter marker used by the text format.
    pub fn marker(self) -> &'static str {
        match self {
            GraphKind::Directed => "D",
            GraphKind::Undirected => "G",
        }
    }
}

impl FromStr for GraphKind {
    type Err = Error;

    /// Accepts "D" (directed) or "G" (undirected), ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "D" => Ok(GraphKind::Directed),
            "G" => Ok(GraphKind::Undirected),
            other => Err(Error::InvalidConstruction {
                marker: other.to_string(),
            }),
        }
    }
}

/// In-memory graph: an arena of nodes plus an id index.
///
/// Nodes live in `nodes` in first-insertion order and refer to each other by
/// [`NodeIndex`]. For directed graphs each node also records its incoming
/// links so that weak connectivity can be computed without a reverse pass.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    nodes: Vec<Node>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(directed: bool, node_count: usize) -> Self {
        Self {
            directed,
            nodes: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
        }
    }

    pub fn from_kind(kind: GraphKind) -> Self {
        Self::new(kind.is_directed())
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn kind(&self) -> GraphKind {
        if self.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }

    /// Insert a vertex and return it.
    ///
    /// Re-adding an id that already exists resets its adjacency: every edge
    /// touching it is dropped (in both directions), while the vertex keeps
    /// its position in [`Graph::vertices`]. Use [`Graph::add_edge`] alone if
    /// existing edges must be preserved.
    pub fn add_vertex(&mut self, id: impl Into<String>) -> &Node {
        let id = id.into();
        let idx = match self.index.get(&id) {
            Some(&idx) => {
                self.reset_adjacency(idx);
                idx
            }
            None => self.insert_node(id),
        };
        &self.nodes[idx]
    }

    pub fn get_vertex(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Resolve a neighbor handle.
    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Add an edge from `from` to `to` (and back, for undirected graphs).
    ///
    /// Missing endpoints are created; existing endpoints keep their edges.
    /// Adding the same edge twice is a no-op.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let u = self.ensure_node(from);
        let v = self.ensure_node(to);

        if !self.nodes[u].add_neighbor(v) {
            return;
        }
        if self.directed {
            self.nodes[v].add_incoming(u);
        } else {
            self.nodes[v].add_neighbor(u);
        }
    }

    /// All vertices in first-insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Resolve a node's neighbor handles, in adjacency order.
    pub fn neighbors<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> {
        node.neighbors().iter().map(move |&idx| &self.nodes[idx])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges. Undirected edges and self loops count once.
    pub fn edge_count(&self) -> usize {
        if self.directed {
            return self.nodes.iter().map(Node::degree).sum();
        }
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, n)| n.neighbors().iter().filter(|&&other| other >= idx).count())
            .sum()
    }

    /// Render a node as `"<id> adjacent to [<ids>]"`.
    pub fn describe_node(&self, node: &Node) -> String {
        let ids: Vec<&str> = self.neighbors(node).map(Node::id).collect();
        format!("{} adjacent to [{}]", node.id(), ids.join(", "))
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Look up an id a traversal depends on, failing with `NotFound`.
    pub(crate) fn require(&self, id: &str) -> Result<NodeIndex> {
        self.index_of(id).ok_or_else(|| Error::not_found(id))
    }

    pub(crate) fn node_at(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx]
    }

    pub(crate) fn id_at(&self, idx: NodeIndex) -> &str {
        self.nodes[idx].id()
    }

    /// Neighbors with edge direction ignored: outgoing followed by incoming.
    /// For undirected graphs incoming is always empty.
    pub(crate) fn neighbors_all(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let node = &self.nodes[idx];
        node.neighbors()
            .iter()
            .chain(node.incoming().iter())
            .copied()
    }

    fn insert_node(&mut self, id: String) -> NodeIndex {
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(Node::new(id));
        idx
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        match self.index.get(id) {
            Some(&idx) => idx,
            None => self.insert_node(id.to_string()),
        }
    }

    /// Drop every edge incident to `idx`, keeping the mirrored links of
    /// other nodes consistent.
    fn reset_adjacency(&mut self, idx: NodeIndex) {
        let (outgoing, incoming) = self.nodes[idx].take_adjacency();
        for other in outgoing {
            if self.directed {
                self.nodes[other].remove_incoming(idx);
            } else {
                self.nodes[other].remove_neighbor(idx);
            }
        }
        for other in incoming {
            self.nodes[other].remove_neighbor(idx);
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let described: Vec<String> = self.vertices().map(|n| self.describe_node(n)).collect();
        write!(f, "Graph with vertices: [{}]", described.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_ids<'a>(g: &'a Graph, id: &str) -> Vec<&'a str> {
        let node = g.get_vertex(id).unwrap();
        g.neighbors(node).map(Node::id).collect()
    }

    #[test]
    fn test_add_vertex_and_lookup() {
        let mut g = Graph::new(true);
        let n = g.add_vertex("A");
        assert_eq!(n.id(), "A");
        assert!(g.contains_id("A"));
        assert!(!g.contains_id("B"));
        assert!(g.get_vertex("B").is_none());
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut g = Graph::new(true);
        g.add_edge("A", "B");
        assert!(g.contains_id("A"));
        assert!(g.contains_id("B"));
        assert_eq!(neighbor_ids(&g, "A"), vec!["B"]);
        assert!(neighbor_ids(&g, "B").is_empty());
    }

    #[test]
    fn test_undirected_edge_is_symmetric() {
        let mut g = Graph::new(false);
        g.add_edge("A", "B");
        g.add_edge("A", "C");
        assert_eq!(neighbor_ids(&g, "A"), vec!["B", "C"]);
        assert_eq!(neighbor_ids(&g, "B"), vec!["A"]);
        assert_eq!(neighbor_ids(&g, "C"), vec!["A"]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_duplicate_edge_is_idempotent() {
        let mut g = Graph::new(false);
        g.add_edge("A", "B");
        g.add_edge("B", "A");
        g.add_edge("A", "B");
        assert_eq!(neighbor_ids(&g, "A"), vec!["B"]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_directed_hub_incoming_links_unique() {
        let mut g = Graph::new(true);
        for i in 0..1_000 {
            g.add_edge(&format!("n{}", i), "hub");
        }
        // Repeats must not add reverse links
        g.add_edge("n0", "hub");
        g.add_edge("n999", "hub");
        g.add_edge("hub", "n0");

        let hub = g.get_vertex("hub").unwrap();
        assert_eq!(hub.incoming().len(), 1_000);
        let unique: std::collections::HashSet<_> = hub.incoming().iter().collect();
        assert_eq!(unique.len(), 1_000);
        assert_eq!(g.get_vertex("n0").unwrap().incoming().len(), 1);
        assert_eq!(g.edge_count(), 1_001);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let mut g = Graph::new(false);
        g.add_edge("A", "A");
        assert_eq!(neighbor_ids(&g, "A"), vec!["A"]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_does_not_reset_existing() {
        let mut g = Graph::new(true);
        g.add_edge("A", "B");
        g.add_edge("A", "C");
        assert_eq!(neighbor_ids(&g, "A"), vec!["B", "C"]);
    }

    #[test]
    fn test_readd_vertex_resets_adjacency_undirected() {
        let mut g = Graph::new(false);
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        let n = g.add_vertex("B");
        assert_eq!(n.degree(), 0);
        // Mirrored links are dropped too, so symmetry still holds
        assert!(neighbor_ids(&g, "A").is_empty());
        assert!(neighbor_ids(&g, "C").is_empty());
        assert_eq!(g.edge_count(), 0);
        // Position in vertex order is preserved
        let order: Vec<&str> = g.vertices().map(Node::id).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_readd_vertex_resets_adjacency_directed() {
        let mut g = Graph::new(true);
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        g.add_vertex("B");
        assert!(neighbor_ids(&g, "A").is_empty());
        assert!(neighbor_ids(&g, "B").is_empty());
        assert!(g.get_vertex("C").unwrap().incoming().is_empty());
        // Edges can be re-added afterwards
        g.add_edge("A", "B");
        assert_eq!(neighbor_ids(&g, "A"), vec!["B"]);
    }

    #[test]
    fn test_vertices_insertion_order() {
        let mut g = Graph::new(true);
        g.add_vertex("C");
        g.add_vertex("A");
        g.add_edge("B", "A");
        let order: Vec<&str> = g.vertices().map(Node::id).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_node_handle_resolution() {
        let mut g = Graph::new(true);
        g.add_edge("A", "B");
        let a = g.get_vertex("A").unwrap();
        let b = g.node(a.neighbors()[0]).unwrap();
        assert_eq!(b.id(), "B");
        assert!(g.node(99).is_none());
    }

    #[test]
    fn test_directed_edge_count() {
        let mut g = Graph::new(true);
        g.add_edge("A", "B");
        g.add_edge("B", "A");
        g.add_edge("A", "A");
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_graph_kind_markers() {
        assert_eq!("D".parse::<GraphKind>().unwrap(), GraphKind::Directed);
        assert_eq!(" G \n".parse::<GraphKind>().unwrap(), GraphKind::Undirected);
        let err = "X".parse::<GraphKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidConstruction { ref marker } if marker == "X"));
        assert_eq!(GraphKind::Directed.marker(), "D");
        assert!(Graph::from_kind(GraphKind::Undirected).kind() == GraphKind::Undirected);
    }

    #[test]
    fn test_display() {
        let mut g = Graph::new(false);
        g.add_edge("A", "B");
        assert_eq!(
            g.to_string(),
            "Graph with vertices: [A adjacent to [B], B adjacent to [A]]"
        );
        let a = g.get_vertex("A").unwrap();
        assert_eq!(g.describe_node(a), "A adjacent to [B]");
    }

    #[test]
    fn test_require_missing_is_not_found() {
        let g = Graph::new(true);
        assert!(matches!(g.require("Z"), Err(Error::NotFound { ref id }) if id == "Z"));
    }
}
