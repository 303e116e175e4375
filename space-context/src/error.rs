//! Error types for environment detection.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Failure of an external command.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} timed out after {timeout:?}")]
    TimedOut { program: String, timeout: Duration },
}

impl ExecError {
    /// True for expected steady states: the binary is not installed, or it
    /// ran and reported failure (e.g. "not a git repository").
    pub fn is_absence(&self) -> bool {
        match self {
            ExecError::Spawn { source, .. } => source.kind() == io::ErrorKind::NotFound,
            ExecError::Failed { .. } => true,
            ExecError::TimedOut { .. } => false,
        }
    }
}

/// Detection error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Exec(#[from] ExecError),
}
