use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use space_context::SystemRunner;
use space_prompt::{Args, Context, Prompt, Settings};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Home directory could not be resolved.
const EXIT_NO_HOME: u8 = 1;

/// The prompt was rendered but could not be written.
const EXIT_WRITE_FAILED: u8 = 2;

/// Diagnostics go to stderr so stdout carries nothing but the prompt.
fn setup_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .init();
}

fn write_prompt(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("writing prompt to stdout")
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let settings = Settings::from_env();
    setup_logging(&settings.log_filter);

    let ctx = match Context::from_env(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("space-prompt: {}", e);
            return ExitCode::from(EXIT_NO_HOME);
        }
    };

    let runner = Arc::new(SystemRunner::new(settings.command_timeout));
    let prompt = Prompt::standard(runner, &settings.color);
    let output = prompt.render(Arc::new(ctx)).await;

    if let Err(e) = write_prompt(&output) {
        error!(error = %format!("{:#}", e), "prompt not written");
        return ExitCode::from(EXIT_WRITE_FAILED);
    }
    ExitCode::SUCCESS
}
