//! Larder CLI
//!
//! Command-line interface for the Larder recipe service.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Larder recipe CLI", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(long, env = "LARDER_URL", default_value = "http://localhost:8080")]
    server_url: String,

    /// User the requests are made as
    #[arg(long, short, env = "LARDER_USER")]
    user: String,

    /// Print raw JSON instead of formatted output
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        server_url: cli.server_url,
        user: cli.user,
        json: cli.json,
    };

    handle_command(cli.command, &config).await
}
