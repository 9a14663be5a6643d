//! voice-todo - voice-driven to-do service
//!
//! Loads configuration, initializes logging and serves the HTTP API.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use voice_todo_rs::utils::logging::init_logging;
use voice_todo_rs::{Config, server};

#[derive(Debug, Parser)]
#[command(name = "voice-todo", version, about = "Voice-driven to-do service")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        env = "VOICE_TODO_CONFIG",
        default_value = "config/voice-todo.yaml"
    )]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = if cli.config.exists() {
        Config::load(&cli.config)
            .await
            .with_context(|| format!("loading {}", cli.config.display()))?
    } else {
        Config::from_env().context("loading configuration from environment")?
    };

    if let Some(host) = &cli.host {
        config.app.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.app.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli).await?;
    init_logging(config.logging())?;
    if !cli.config.exists() {
        tracing::info!(
            "No config file at {}, using defaults and environment",
            cli.config.display()
        );
    }
    server::run_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line bind errors readable
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
