use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Load a graph from a `D`/`G` adjacency file and run one traversal on it.
#[derive(Parser, Debug)]
#[command(name = "graph-trav", version, about, long_about = None)]
pub struct Config {
    /// Graph file: kind marker, vertex list, then one edge per line
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, env = "GRAPH_TRAV_FORMAT", default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Log traversal activity at debug level
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (overrides --verbose); GRAPH_TRAV_LOG overrides both
    #[arg(long, value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every vertex with its neighbors
    Show,

    /// Breadth-first traversal order from START
    Bfs { start: String },

    /// Recursive depth-first traversal order from START
    Dfs { start: String },

    /// Path from FROM to TO (shortest unless --dfs)
    Path {
        from: String,
        to: String,

        /// Use depth-first search; the path may not be the shortest
        #[arg(long)]
        dfs: bool,
    },

    /// Vertices exactly K edges away from START
    Distance { start: String, k: usize },

    /// Check whether the graph is bipartite and print both sides
    Bipartite,

    /// List connected components (edge direction ignored)
    Components,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_command() {
        let cfg = Config::try_parse_from(["graph-trav", "g.txt", "path", "A", "C"]).unwrap();
        assert_eq!(cfg.file, PathBuf::from("g.txt"));
        assert_eq!(
            cfg.command,
            Command::Path {
                from: "A".into(),
                to: "C".into(),
                dfs: false
            }
        );
        assert!(!cfg.verbose);
        assert!(cfg.log_level.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cfg = Config::try_parse_from([
            "graph-trav",
            "--format",
            "json",
            "-v",
            "--log-level",
            "trace",
            "g.txt",
            "path",
            "--dfs",
            "A",
            "B",
        ])
        .unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.verbose);
        assert_eq!(cfg.log_level.as_deref(), Some("trace"));
        assert!(matches!(cfg.command, Command::Path { dfs: true, .. }));
    }

    #[test]
    fn test_parse_distance() {
        let cfg = Config::try_parse_from(["graph-trav", "g.txt", "distance", "A", "2"]).unwrap();
        assert_eq!(
            cfg.command,
            Command::Distance {
                start: "A".into(),
                k: 2
            }
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::try_parse_from(["graph-trav", "g.txt", "distance", "A", "-1"]).is_err());
        assert!(
            Config::try_parse_from(["graph-trav", "--format", "xml", "g.txt", "show"]).is_err()
        );
        assert!(
            Config::try_parse_from(["graph-trav", "--log-level", "loud", "g.txt", "show"]).is_err()
        );
        assert!(Config::try_parse_from(["graph-trav", "g.txt"]).is_err());
    }
}
