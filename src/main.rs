//! LearnKit - AI learning assistant.
//!
//! Runs the proxy server by default; the other subcommands are thin clients
//! of a running proxy.

mod cli;
mod client;
mod server;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = server::load_config(&cli.config)?;
    server::init_tracing(&config.logging)?;

    match cli.command {
        None => {
            server::run_server(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::run_server(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(command) => client::run_command(command, &config.gateway).await,
    }
}
