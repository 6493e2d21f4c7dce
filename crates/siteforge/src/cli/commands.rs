//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Prompt-to-website generator.
#[derive(Debug, Parser)]
#[command(name = "siteforge", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the web interface
    Serve {
        /// Address to bind, overriding SITEFORGE_ADDR
        #[arg(long)]
        addr: Option<String>,
    },
}
