//! space-context - Environment detection for space-prompt.
//!
//! This library talks to the world outside the prompt process. It detects:
//! - Git branch, change flags and upstream relation (from porcelain status)
//! - Go toolchain version
//! - Active Kubernetes context
//!
//! Every external command goes through a [`CommandRunner`], so callers can
//! bound it with a timeout or replace it in tests.
//!
//! # Example
//!
//! ```no_run
//! use space_context::{SystemRunner, detectors::git};
//! use std::path::Path;
//!
//! # async fn run() {
//! let runner = SystemRunner::default();
//! let status = git::detect(&runner, Path::new(".")).await.ok().flatten();
//! println!("Git branch: {:?}", status.as_ref().map(|s| &s.branch));
//! # }
//! ```

mod context;
pub mod detectors;
mod error;
mod exec;
mod scanner;

pub use context::{AheadBehind, ChangeFlag, Environment, GitStatus, GoVersion};
pub use error::{Error, ExecError};
pub use exec::{CommandRunner, DEFAULT_TIMEOUT, SystemRunner};
pub use scanner::scan;
