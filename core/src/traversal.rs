use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeIndex};

/// Breadth-first traversal from `start`, calling `visit` once per reachable node.
///
/// Nodes are visited in non-decreasing distance from `start`; ties follow
/// adjacency insertion order. A node is marked seen when enqueued, so it is
/// never queued twice.
pub fn breadth_first_traversal<F>(graph: &Graph, start: &str, mut visit: F) -> Result<()>
where
    F: FnMut(&Node),
{
    let start = graph.require(start)?;

    let mut seen = vec![false; graph.node_count()];
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    seen[start] = true;
    queue.push_back(start);

    let mut visited = 0usize;
    while let Some(current) = queue.pop_front() {
        let node = graph.node_at(current);
        trace!(vertex = node.id(), "processing vertex");
        visit(node);
        visited += 1;

        for &next in node.neighbors() {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }

    debug!(start = graph.id_at(start), visited, "breadth-first traversal done");
    Ok(())
}

/// Collect the ids produced by [`breadth_first_traversal`].
pub fn breadth_first_order(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let mut order = Vec::new();
    breadth_first_traversal(graph, start, |n| order.push(n.id().to_string()))?;
    Ok(order)
}

/// Recursive depth-first traversal from `start`, calling `visit` in pre-order.
///
/// Each unvisited neighbor's whole subtree is explored before the next
/// sibling, siblings taken in adjacency insertion order. Recursion depth is
/// bounded by the longest path in the DFS tree.
pub fn depth_first_traversal<F>(graph: &Graph, start: &str, mut visit: F) -> Result<()>
where
    F: FnMut(&Node),
{
    let start = graph.require(start)?;
    let mut seen = vec![false; graph.node_count()];
    let visited = dfs_visit(graph, start, &mut seen, &mut visit);

    debug!(start = graph.id_at(start), visited, "depth-first traversal done");
    Ok(())
}

fn dfs_visit<F>(graph: &Graph, current: NodeIndex, seen: &mut [bool], visit: &mut F) -> usize
where
    F: FnMut(&Node),
{
    seen[current] = true;
    let node = graph.node_at(current);
    trace!(vertex = node.id(), "processing vertex");
    visit(node);

    let mut visited = 1;
    for &next in node.neighbors() {
        if !seen[next] {
            visited += dfs_visit(graph, next, seen, visit);
        }
    }
    visited
}

/// Collect the ids produced by [`depth_first_traversal`].
pub fn depth_first_order(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let mut order = Vec::new();
    depth_first_traversal(graph, start, |n| order.push(n.id().to_string()))?;
    Ok(order)
}

/// Shortest path (by edge count) from `start` to `target`, both endpoints included.
///
/// FIFO BFS storing each node's discoverer; the search stops once `target`
/// is dequeued. Among equally short paths the first discovered wins, so the
/// result is deterministic for a given adjacency order.
///
/// Returns `Ok(None)` when `target` is unreachable.
pub fn shortest_path(graph: &Graph, start: &str, target: &str) -> Result<Option<Vec<String>>> {
    let start_idx = graph.require(start)?;
    let target_idx = graph.require(target)?;

    // Start uses itself as parent
    let mut parent: Vec<Option<NodeIndex>> = vec![None; graph.node_count()];
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    parent[start_idx] = Some(start_idx);
    queue.push_back(start_idx);

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        if current == target_idx {
            found = true;
            break;
        }

        for &next in graph.node_at(current).neighbors() {
            if parent[next].is_none() {
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    let path = found.then(|| reconstruct_path(graph, &parent, start_idx, target_idx));
    debug!(
        start,
        target,
        hops = path.as_ref().map(|p| p.len() - 1),
        "shortest path search done"
    );
    Ok(path)
}

/// Some path from `start` to `target` found by iterative depth-first search.
///
/// Uses an explicit LIFO stack. Each node records the node that first pushed
/// it, and the search stops when `target` is popped. Neighbors are pushed in
/// adjacency order, so the last-listed neighbor is explored first. The path
/// is not necessarily the shortest.
pub fn find_path_dfs(graph: &Graph, start: &str, target: &str) -> Result<Option<Vec<String>>> {
    let start_idx = graph.require(start)?;
    let target_idx = graph.require(target)?;

    let mut parent: Vec<Option<NodeIndex>> = vec![None; graph.node_count()];
    let mut stack: Vec<NodeIndex> = vec![start_idx];
    parent[start_idx] = Some(start_idx);

    let mut found = false;
    while let Some(current) = stack.pop() {
        if current == target_idx {
            found = true;
            break;
        }

        for &next in graph.node_at(current).neighbors() {
            if parent[next].is_none() {
                parent[next] = Some(current);
                stack.push(next);
            }
        }
    }

    let path = found.then(|| reconstruct_path(graph, &parent, start_idx, target_idx));
    debug!(
        start,
        target,
        hops = path.as_ref().map(|p| p.len() - 1),
        "depth-first path search done"
    );
    Ok(path)
}

/// Walk parent pointers from `target` back to `start`.
fn reconstruct_path(
    graph: &Graph,
    parent: &[Option<NodeIndex>],
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = target;

    loop {
        path.push(graph.id_at(current).to_string());
        if current == start {
            break;
        }
        match parent[current] {
            Some(p) => current = p,
            None => break,
        }
    }

    path.reverse();
    path
}

/// All ids whose minimum distance from `start` is exactly `distance`, in BFS order.
///
/// The queue is drained completely. Nodes at `distance` are collected but not
/// expanded, since nothing beyond them can match. `distance == 0` yields
/// `[start]`; a distance past the eccentricity of `start` yields an empty Vec.
pub fn nodes_at_distance(graph: &Graph, start: &str, distance: usize) -> Result<Vec<String>> {
    let start_idx = graph.require(start)?;

    let mut seen = vec![false; graph.node_count()];
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();
    seen[start_idx] = true;
    queue.push_back((start_idx, 0));

    let mut found = Vec::new();
    while let Some((current, depth)) = queue.pop_front() {
        if depth == distance {
            found.push(graph.id_at(current).to_string());
            continue;
        }

        for &next in graph.node_at(current).neighbors() {
            if !seen[next] {
                seen[next] = true;
                queue.push_back((next, depth + 1));
            }
        }
    }

    debug!(start, distance, found = found.len(), "distance search done");
    Ok(found)
}

/// Two-color the graph by BFS layer, returning both color classes.
///
/// Every weakly connected component is colored, each seeded from its first
/// vertex in insertion order. A node always gets the opposite color of the
/// node that discovered it, so a BFS layer shares one color. Edge direction
/// is ignored. Returns `None` as soon as an edge joins two same-colored
/// nodes (a self loop included).
pub fn bipartition(graph: &Graph) -> Option<(Vec<String>, Vec<String>)> {
    let mut color: Vec<Option<bool>> = vec![None; graph.node_count()];
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut queue: VecDeque<(NodeIndex, bool)> = VecDeque::new();

    for seed in 0..graph.node_count() {
        if color[seed].is_some() {
            continue;
        }
        color[seed] = Some(false);
        queue.push_back((seed, false));

        while let Some((current, side)) = queue.pop_front() {
            let id = graph.id_at(current).to_string();
            if side {
                right.push(id);
            } else {
                left.push(id);
            }

            for next in graph.neighbors_all(current) {
                match color[next] {
                    None => {
                        color[next] = Some(!side);
                        queue.push_back((next, !side));
                    }
                    Some(other) if other == side => {
                        debug!(
                            from = graph.id_at(current),
                            to = graph.id_at(next),
                            "edge joins same-colored vertices, not bipartite"
                        );
                        return None;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    Some((left, right))
}

/// Whether the whole graph (every component) is bipartite.
pub fn is_bipartite(graph: &Graph) -> bool {
    bipartition(graph).is_some()
}

/// Partition the vertex set into weakly connected components.
///
/// Seeds are taken in vertex insertion order; each component lists the ids
/// reached by a full BFS from its seed (edge direction ignored), in BFS order.
/// Every id appears in exactly one component.
pub fn connected_components(graph: &Graph) -> Vec<Vec<String>> {
    let mut seen = vec![false; graph.node_count()];
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    let mut components = Vec::new();

    for seed in 0..graph.node_count() {
        if seen[seed] {
            continue;
        }
        seen[seed] = true;
        queue.push_back(seed);

        let mut members = Vec::new();
        while let Some(current) = queue.pop_front() {
            members.push(graph.id_at(current).to_string());
            for next in graph.neighbors_all(current) {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        components.push(members);
    }

    debug!(components = components.len(), "component enumeration done");
    components
}
