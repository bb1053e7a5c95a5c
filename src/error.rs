use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Faults that abort a run.
///
/// A failed WiFi connection is not one of them: it is inferred from
/// command output and surfaced as a notification only.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with an error: {stderr}")]
    ToolFailed { tool: &'static str, stderr: String },

    #[error("could not resolve a configuration directory")]
    NoConfigDir,
}
