//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `reqforge` library that handles:
//! - Environment variable loading (.env file, e.g. proxy settings)
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the response

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use reqforge::app::{build_request, write_response};
use reqforge::config::Cli;
use reqforge::initialization::init_logger_with;

#[tokio::main]
async fn main() -> Result<()> {
    // Proxy variables may live in a .env file, either in the current
    // directory or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(&cli).await {
        eprintln!("reqforge error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(cli: &Cli) -> Result<()> {
    let mut request = build_request(cli).context("Invalid request options")?;
    let response = request.send().await.context("Request failed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_response(response, cli.include, &mut out).await
}
