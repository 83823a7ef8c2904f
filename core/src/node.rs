use std::collections::HashSet;

/// Handle to a node inside its owning [`Graph`](crate::Graph) arena.
pub type NodeIndex = usize;

/// A vertex: its id plus adjacency handles.
///
/// Neighbors keep insertion order and set semantics. Links are plain indices
/// into the graph's arena, never owning references, so the two-way links of
/// an undirected edge do not form an ownership cycle.
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    neighbors: Vec<NodeIndex>,
    neighbor_set: HashSet<NodeIndex>,
    /// Reverse links, only maintained for directed graphs.
    incoming: Vec<NodeIndex>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            neighbors: Vec::new(),
            neighbor_set: HashSet::new(),
            incoming: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Add `other` as a neighbor. Re-adding an existing neighbor is a no-op
    /// and keeps its original position. Self loops are allowed.
    ///
    /// Returns true if the neighbor was not present before.
    pub fn add_neighbor(&mut self, other: NodeIndex) -> bool {
        if !self.neighbor_set.insert(other) {
            return false;
        }
        self.neighbors.push(other);
        true
    }

    /// Neighbor handles in insertion order.
    pub fn neighbors(&self) -> &[NodeIndex] {
        &self.neighbors
    }

    pub fn has_neighbor(&self, other: NodeIndex) -> bool {
        self.neighbor_set.contains(&other)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn incoming(&self) -> &[NodeIndex] {
        &self.incoming
    }

    /// Caller guarantees `from` is not already listed: `Graph::add_edge`
    /// only records a reverse link for a newly added outgoing edge.
    pub(crate) fn add_incoming(&mut self, from: NodeIndex) {
        self.incoming.push(from);
    }

    pub(crate) fn remove_neighbor(&mut self, other: NodeIndex) {
        if self.neighbor_set.remove(&other) {
            self.neighbors.retain(|&n| n != other);
        }
    }

    pub(crate) fn remove_incoming(&mut self, from: NodeIndex) {
        self.incoming.retain(|&n| n != from);
    }

    /// Drop all adjacency, returning the old (outgoing, incoming) handles.
    pub(crate) fn take_adjacency(&mut self) -> (Vec<NodeIndex>, Vec<NodeIndex>) {
        self.neighbor_set.clear();
        (
            std::mem::take(&mut self.neighbors),
            std::mem::take(&mut self.incoming),
        )
    }
}
