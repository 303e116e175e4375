//! space-context CLI - debugging tool for environment detection.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use space_context::SystemRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let dir = match env::args().nth(1).map(PathBuf::from) {
        Some(dir) => dir,
        None => match env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("space-context: current directory: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };
    let home = env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| dir.clone());

    let ctx = space_context::scan(&SystemRunner::default(), &dir, &home).await;

    match serde_json::to_string_pretty(&ctx) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("space-context: {}", e);
            ExitCode::FAILURE
        }
    }
}
