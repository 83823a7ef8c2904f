//! graph-trav-core: In-memory graphs and traversal algorithms.
//!
//! A pure Rust library holding directed or undirected graphs keyed by string
//! ids, plus breadth-first and depth-first traversal, shortest and DFS path
//! search, distance-bounded discovery, bipartiteness testing and connected
//! component enumeration.
//!
//! Nodes live in an arena owned by [`Graph`] and link to each other by
//! index, so traversals only ever borrow the graph. A small text reader
//! builds graphs from the `D`/`G` adjacency format.

mod error;
mod graph;
mod node;
mod reader;
mod traversal;

pub use error::{Error, Result};
pub use graph::{Graph, GraphKind};
pub use node::{Node, NodeIndex};
pub use reader::{parse_graph, read_graph_from_file};
pub use traversal::{
    bipartition, breadth_first_order, breadth_first_traversal, connected_components,
    depth_first_order, depth_first_traversal, find_path_dfs, is_bipartite, nodes_at_distance,
    shortest_path,
};
