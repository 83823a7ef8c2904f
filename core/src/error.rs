use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by graph construction, loading and traversal.
///
/// Unreachable targets, disconnected graphs and out-of-range distances are
/// not errors: those surface as empty or `None` results.
#[derive(Error, Debug)]
pub enum Error {
    /// A traversal referenced a vertex id that is not in the graph.
    #[error("vertex not found: {id}")]
    NotFound { id: String },

    /// The directedness marker was neither "D" nor "G".
    #[error("invalid graph kind '{marker}' (expected 'D' for directed or 'G' for undirected)")]
    InvalidConstruction { marker: String },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Process exit code for front ends: 2 for a bad caller-supplied id,
    /// 3 for malformed graph data, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotFound { .. } => 2,
            Error::InvalidConstruction { .. } | Error::Parse { .. } => 3,
            Error::Io(_) => 1,
        }
    }
}
