//! graph-trav: command-line front end for graph-trav-core.
//!
//! Loads a graph file, runs a single traversal and prints the result.
//! Exit codes: 0 success, 1 generic failure, 2 unknown vertex id,
//! 3 malformed graph file.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use graph_trav_core::read_graph_from_file;
use tracing::debug;

mod commands;
mod config;
mod logging;
mod output;

use config::Config;

/// Recursive depth-first traversal nests one frame per vertex on a chain.
const RUN_STACK_BYTES: usize = 512 * 1024 * 1024;

fn main() -> ExitCode {
    let config = Config::parse();

    let log_level = config.log_level.as_deref();
    if let Err(e) = logging::init_tracing(config.verbose, log_level, config.log_json) {
        eprintln!("warning: failed to initialize logging: {}", e);
    }

    match run_on_large_stack(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Run `run` on a dedicated thread whose stack fits deep recursive traversals.
fn run_on_large_stack(config: &Config) -> anyhow::Result<()> {
    std::thread::scope(|scope| {
        let handle = std::thread::Builder::new()
            .name("graph-trav".into())
            .stack_size(RUN_STACK_BYTES)
            .spawn_scoped(scope, || run(config))
            .context("failed to spawn worker thread")?;
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("worker thread panicked"))?
    })
}

fn run(config: &Config) -> anyhow::Result<()> {
    let graph = read_graph_from_file(&config.file)
        .with_context(|| format!("failed to load graph from {}", config.file.display()))?;
    debug!(
        vertices = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "graph loaded"
    );

    let report = commands::execute(&graph, &config.command)?;
    println!("{}", output::render(&report, config.format)?);
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<graph_trav_core::Error>())
        .map_or(1, |e| e.exit_code() as u8)
}
