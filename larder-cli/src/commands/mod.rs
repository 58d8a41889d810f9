//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod recipe;

pub use recipe::RecipeCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Recipe management
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Recipe { command } => recipe::handle_recipe_command(command, config).await,
    }
}
