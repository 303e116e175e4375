//! Per-render snapshot of the caller's state and environment.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::cli::Args;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("could not determine home directory")]
    NoHome,
}

/// Immutable facts every module renders from.
#[derive(Debug, Clone)]
pub struct Context {
    /// Running inside an SSH session.
    pub in_ssh: bool,
    /// Duration of the last command.
    pub duration: Duration,
    /// Exit status of the last command.
    pub status: i32,
    /// Number of background jobs.
    pub jobs: u32,
    /// Home directory of the current user.
    pub home: PathBuf,
    /// Directory the prompt is drawn in.
    pub working_dir: PathBuf,
}

impl Context {
    /// Build the context from hook arguments and the process environment.
    ///
    /// Fails only when the home directory can't be resolved.
    pub fn from_env(args: &Args) -> Result<Self, ContextError> {
        let home = dirs::home_dir().ok_or(ContextError::NoHome)?;
        let working_dir = std::env::current_dir().unwrap_or_else(|e| {
            debug!(error = %e, "current directory unavailable");
            PathBuf::from(".")
        });
        let in_ssh = std::env::var_os("SSH_CONNECTION").is_some_and(|v| !v.is_empty());

        Ok(Self {
            in_ssh,
            duration: parse_duration(&args.duration),
            status: args.status,
            jobs: args.jobs,
            home,
            working_dir,
        })
    }
}

/// Parse a nanosecond count. Empty or unparsable text means "not timed".
pub fn parse_duration(raw: &str) -> Duration {
    let raw = raw.trim();
    if raw.is_empty() {
        return Duration::ZERO;
    }
    match raw.parse::<u64>() {
        Ok(nanos) => Duration::from_nanos(nanos),
        Err(e) => {
            debug!(raw, error = %e, "ignoring duration");
            Duration::ZERO
        }
    }
}
