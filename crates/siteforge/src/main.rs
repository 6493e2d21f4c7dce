//! siteforge binary: serve the prompt-to-website interface.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, handle_serve_command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { addr } => handle_serve_command(addr).await?,
    }

    Ok(())
}
