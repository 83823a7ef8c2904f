use graph_trav_core::{
    breadth_first_traversal, connected_components, depth_first_traversal, find_path_dfs,
    is_bipartite, nodes_at_distance, shortest_path, Graph,
};
use std::time::Instant;

/// Recursive DFS on a ring or chain nests one frame per vertex.
const BENCH_STACK_BYTES: usize = 512 * 1024 * 1024;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-trav-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Ternary branching tree (deep paths, bipartite)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges (many components)");
        println!("  barbell     Two dense clusters connected by a thin bridge");
        println!();
        println!("Default node_count: 200000");
        return;
    }

    let generators: Vec<(&str, fn(usize) -> Graph)> = match mode {
        "tree" => vec![("Ternary tree", gen_tree)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Ternary tree", gen_tree as fn(usize) -> Graph),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    println!("graph-trav-bench");
    println!("================");
    println!();

    let worker = std::thread::Builder::new()
        .name("bench".into())
        .stack_size(BENCH_STACK_BYTES)
        .spawn(move || {
            for (name, generator) in generators {
                run_benchmark(name, generator, node_count);
            }
        });

    match worker {
        Ok(handle) => {
            if handle.join().is_err() {
                eprintln!("benchmark thread panicked");
            }
        }
        Err(e) => eprintln!("failed to spawn benchmark thread: {}", e),
    }
}

fn node_id(i: usize) -> String {
    format!("n{}", i)
}

fn ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: fn(usize) -> Graph, node_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    println!(
        "Generated in {:.2}s: {} nodes, {} edges",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
    );
    if graph.node_count() == 0 {
        println!();
        return;
    }

    let start = node_id(0);
    let far = node_id(graph.node_count() - 1);

    println!();
    println!("{:<28} {:>12} {:>10}", "operation", "result", "time");
    println!("{:-<28} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let mut visited = 0usize;
    let bfs = breadth_first_traversal(&graph, &start, |_| visited += 1);
    report("bfs traversal", bfs.map(|_| visited.to_string()), t);

    let t = Instant::now();
    let mut visited = 0usize;
    let dfs = depth_first_traversal(&graph, &start, |_| visited += 1);
    report("dfs traversal (recursive)", dfs.map(|_| visited.to_string()), t);

    let t = Instant::now();
    let path = shortest_path(&graph, &start, &far);
    report("shortest path 0 -> last", path.map(|p| hops(p.as_deref())), t);

    let t = Instant::now();
    let path = find_path_dfs(&graph, &start, &far);
    report("dfs path 0 -> last", path.map(|p| hops(p.as_deref())), t);

    for k in [1, 2, 3, 5, 10] {
        let t = Instant::now();
        let found = nodes_at_distance(&graph, &start, k);
        report(
            &format!("nodes at distance {}", k),
            found.map(|v| v.len().to_string()),
            t,
        );
    }

    let t = Instant::now();
    let comps = connected_components(&graph);
    println!(
        "{:<28} {:>12} {:>8.1}ms",
        "connected components",
        comps.len(),
        ms(t)
    );

    let t = Instant::now();
    let bip = is_bipartite(&graph);
    println!("{:<28} {:>12} {:>8.1}ms", "bipartite", bip, ms(t));
    println!();
}

fn hops(path: Option<&[String]>) -> String {
    match path {
        Some(p) => format!("{} hops", p.len().saturating_sub(1)),
        None => "no path".to_string(),
    }
}

fn report(op: &str, result: graph_trav_core::Result<String>, t: Instant) {
    let elapsed = ms(t);
    match result {
        Ok(value) => println!("{:<28} {:>12} {:>8.1}ms", op, value, elapsed),
        Err(e) => println!("{:<28} {:>12} {:>8.1}ms", op, format!("error: {}", e), elapsed),
    }
}

// ---------------------------------------------------------------------------
// Generators: O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Ternary tree built level by level.
///
/// Log depth with exponential width. Trees are bipartite and have exactly
/// one path between any pair, so DFS and BFS paths coincide.
fn gen_tree(node_count: usize) -> Graph {
    let mut graph = Graph::with_capacity(false, node_count);
    let branching = 3;
    graph.add_vertex(node_id(0));

    let mut next = 1;
    let mut frontier = vec![0];
    while next < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next >= node_count {
                    break;
                }
                graph.add_edge(&node_id(parent), &node_id(next));
                next_frontier.push(next);
                next += 1;
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each node links to its K nearest ring neighbors; each link is rewired to
/// a random node with probability p. High clustering, short paths, and a
/// ring long enough to make recursive DFS deep.
fn gen_small_world(node_count: usize) -> Graph {
    let k = 5;
    let p = 0.05f64;
    let mut graph = Graph::with_capacity(false, node_count);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        graph.add_vertex(node_id(i));
    }

    for i in 0..node_count {
        for j in 1..=k {
            let mut neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i {
                    neighbor = rewired;
                }
            }
            graph.add_edge(&node_id(i), &node_id(neighbor));
        }
    }

    graph
}

/// Erdos-Renyi: uniform random edges, ~1 per node on average.
///
/// Sparse enough to leave many small components and isolated vertices.
fn gen_random(node_count: usize) -> Graph {
    let mut graph = Graph::with_capacity(false, node_count);
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        graph.add_vertex(node_id(i));
    }

    for _ in 0..node_count {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_edge(&node_id(from), &node_id(to));
        }
    }

    graph
}

/// Barbell: two dense clusters joined by a chain of bridge nodes.
///
/// Worst case for paths through a bottleneck: every path between the
/// clusters crosses the bridge.
fn gen_barbell(node_count: usize) -> Graph {
    let bridge_len = 10;
    let cluster = node_count.saturating_sub(bridge_len) / 2;
    let mut graph = Graph::with_capacity(false, node_count);
    let mut rng = FastRng::new(99999);

    let mut wire_cluster = |graph: &mut Graph, offset: usize| {
        for i in 0..cluster {
            graph.add_vertex(node_id(offset + i));
        }
        for i in 0..cluster {
            for _ in 0..20usize.min(cluster.saturating_sub(1)) {
                let target = rng.next(cluster);
                if target != i {
                    graph.add_edge(&node_id(offset + i), &node_id(offset + target));
                }
            }
        }
    };

    wire_cluster(&mut graph, 0);

    // Bridge chain from the last node of cluster A to the first of cluster B
    let bridge_start = cluster;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        let prev = if id == 0 { id } else { id - 1 };
        graph.add_edge(&node_id(prev), &node_id(id));
    }

    let b_start = bridge_start + bridge_len;
    wire_cluster(&mut graph, b_start);
    if cluster > 0 {
        graph.add_edge(&node_id(b_start - 1), &node_id(b_start));
    }

    graph
}
