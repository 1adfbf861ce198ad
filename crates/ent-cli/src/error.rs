use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the `ent` binary. All of them exit with status 2.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Error writing report: {0}")]
    Write(#[source] std::io::Error),

    #[error("Error encoding report: {0}")]
    Json(#[from] serde_json::Error),
}
