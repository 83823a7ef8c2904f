use graph_trav_core::{
    bipartition, breadth_first_order, connected_components, depth_first_order, find_path_dfs,
    nodes_at_distance, shortest_path, Graph, Node, Result,
};
use tracing::info;

use crate::config::Command;
use crate::output::{PathMethod, Report, Strategy, VertexReport};

/// Run one command against a loaded graph.
pub fn execute(graph: &Graph, command: &Command) -> Result<Report> {
    info!(?command, vertices = graph.node_count(), "running command");

    let report = match command {
        Command::Show => Report::Show {
            directed: graph.is_directed(),
            edge_count: graph.edge_count(),
            vertices: graph
                .vertices()
                .map(|node| VertexReport {
                    id: node.id().to_string(),
                    neighbors: graph.neighbors(node).map(Node::id).map(String::from).collect(),
                })
                .collect(),
        },
        Command::Bfs { start } => Report::Traversal {
            strategy: Strategy::BreadthFirst,
            start: start.clone(),
            visited: breadth_first_order(graph, start)?,
        },
        Command::Dfs { start } => Report::Traversal {
            strategy: Strategy::DepthFirst,
            start: start.clone(),
            visited: depth_first_order(graph, start)?,
        },
        Command::Path { from, to, dfs } => {
            let (method, path) = if *dfs {
                (PathMethod::DepthFirst, find_path_dfs(graph, from, to)?)
            } else {
                (PathMethod::Shortest, shortest_path(graph, from, to)?)
            };
            Report::Path {
                from: from.clone(),
                to: to.clone(),
                method,
                path,
            }
        }
        Command::Distance { start, k } => Report::Distance {
            start: start.clone(),
            distance: *k,
            vertices: nodes_at_distance(graph, start, *k)?,
        },
        Command::Bipartite => match bipartition(graph) {
            Some((left, right)) => Report::Bipartite {
                bipartite: true,
                left,
                right,
            },
            None => Report::Bipartite {
                bipartite: false,
                left: Vec::new(),
                right: Vec::new(),
            },
        },
        Command::Components => Report::Components {
            components: connected_components(graph),
        },
    };

    Ok(report)
}
