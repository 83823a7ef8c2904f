use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive that overrides the flags.
pub const LOG_ENV: &str = "GRAPH_TRAV_LOG";

/// Filter directive for the CLI flags, covering both the binary and the core crate.
pub fn level_directive(verbose: bool, log_level: Option<&str>) -> String {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };
    format!("graph_trav={level},graph_trav_core={level}")
}

/// Install the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn init_tracing(verbose: bool, log_level: Option<&str>, log_json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive() {
        assert_eq!(
            level_directive(false, None),
            "graph_trav=warn,graph_trav_core=warn"
        );
        assert_eq!(
            level_directive(true, None),
            "graph_trav=debug,graph_trav_core=debug"
        );
        assert_eq!(
            level_directive(true, Some("trace")),
            "graph_trav=trace,graph_trav_core=trace"
        );
    }
}
