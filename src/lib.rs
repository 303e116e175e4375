//! space-prompt - a concurrent zsh prompt renderer.
//!
//! Each render probes the environment (user, Kubernetes context, directory,
//! git status, Go toolchain, hostname, last command status and duration)
//! with independent modules running in parallel, then joins their fragments
//! in a fixed layout.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use clap::Parser;
//! use space_context::SystemRunner;
//! use space_prompt::{Args, Context, Prompt};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let ctx = Context::from_env(&Args::parse())?;
//! let prompt = Prompt::standard(Arc::new(SystemRunner::default()), "blue");
//! print!("{}", prompt.render(Arc::new(ctx)).await);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod modules;
pub mod prompt;
pub mod style;

pub use cli::Args;
pub use config::Settings;
pub use context::{Context, ContextError};
pub use prompt::{Prompt, STANDARD_LAYOUT, Segment};
