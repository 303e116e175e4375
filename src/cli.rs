//! Command-line arguments supplied by the shell hook.

use clap::Parser;

/// Render a zsh prompt for the current directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "space-prompt")]
#[command(version)]
pub struct Args {
    /// Exit status of the last command
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub status: i32,

    /// Duration of the last command in nanoseconds (empty when not timed)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub duration: String,

    /// Number of background jobs
    #[arg(long, default_value_t = 0)]
    pub jobs: u32,
}
