//! Kineto command-line client.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use kineto::{KinetoConfig, KinetoResult, init_tracing};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_tracing("info", cli.log_format()) {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> KinetoResult<()> {
    info!(config_file = ?cli.config, "Loading configuration");
    let config = KinetoConfig::from_file(&cli.config)?;

    match cli.command {
        Commands::Generate { request, output } => {
            cli::handle_generate_command(&config, request, output).await
        }
        Commands::Probe { request } => cli::handle_probe_command(&config, request).await,
        Commands::Api => cli::handle_api_command(&config).await,
    }
}
