//! Recipe command handlers
//!
//! Handles all recipe-related CLI commands: creation, lookup, script
//! download, search, update and deletion.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use larder_client::LarderClient;
use larder_core::dto::recipe::{NewRecipe, RecipeDescriptor, RecipeSearch, RecipeUpdate};

use crate::config::Config;

/// Recipe subcommands
#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Create a new recipe from a script file
    Create {
        /// Recipe name
        #[arg(short, long)]
        name: String,

        /// Recipe type (e.g., dockerfile, compose)
        #[arg(short = 't', long = "type")]
        recipe_type: String,

        /// Path to the script file
        #[arg(short, long)]
        script: String,

        /// Tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Get recipe details
    Get {
        /// Recipe ID
        id: String,
    },
    /// Print the raw script of a recipe
    Script {
        /// Recipe ID
        id: String,
    },
    /// Search your recipes
    Search {
        /// Required tag (repeatable, all must match)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Exact recipe type
        #[arg(short = 't', long = "type")]
        recipe_type: Option<String>,

        /// Number of matches to skip
        #[arg(long)]
        skip: Option<usize>,

        /// Maximum number of matches to return
        #[arg(long)]
        max: Option<usize>,
    },
    /// Update a recipe; options left out keep their current value
    Update {
        /// Recipe ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New type
        #[arg(short = 't', long = "type")]
        recipe_type: Option<String>,

        /// Path to the new script file
        #[arg(short, long)]
        script: Option<String>,

        /// New tags (comma-separated), replacing the current ones
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },
    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: String,
    },
}

/// Handle recipe commands
///
/// Routes recipe subcommands to their respective handlers.
pub async fn handle_recipe_command(command: RecipeCommands, config: &Config) -> Result<()> {
    let client = LarderClient::new(&config.server_url, &config.user);

    match command {
        RecipeCommands::Create {
            name,
            recipe_type,
            script,
            tags,
        } => create_recipe(&client, config, name, recipe_type, &script, tags).await,
        RecipeCommands::Get { id } => get_recipe(&client, config, &id).await,
        RecipeCommands::Script { id } => print_script(&client, &id).await,
        RecipeCommands::Search {
            tags,
            recipe_type,
            skip,
            max,
        } => {
            let search = RecipeSearch::new(tags, recipe_type, skip, max);
            search_recipes(&client, config, &search).await
        }
        RecipeCommands::Update {
            id,
            name,
            recipe_type,
            script,
            tags,
        } => {
            let changes = RecipeChanges {
                name,
                recipe_type,
                script: script.as_deref().map(read_script).transpose()?,
                tags,
            };
            update_recipe(&client, config, &id, changes).await
        }
        RecipeCommands::Delete { id } => delete_recipe(&client, &id).await,
    }
}

fn read_script(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read script file: {}", path))
}

/// Create a new recipe
async fn create_recipe(
    client: &LarderClient,
    config: &Config,
    name: String,
    recipe_type: String,
    script_path: &str,
    tags: Vec<String>,
) -> Result<()> {
    let script = read_script(script_path)?;
    let req = NewRecipe::new(name, recipe_type, script).with_tags(tags);

    let recipe = client.create_recipe(&req).await?;

    if config.json {
        return print_json(&recipe);
    }

    println!("{}", "✓ Recipe created successfully!".green().bold());
    println!("  ID:   {}", recipe.id.cyan());
    println!("  Name: {}", recipe.name.bold());
    println!("  Type: {}", recipe.recipe_type.dimmed());

    Ok(())
}

/// Get and display a single recipe
async fn get_recipe(client: &LarderClient, config: &Config, id: &str) -> Result<()> {
    let recipe = client.get_recipe(id).await?;

    if config.json {
        return print_json(&recipe);
    }

    print_recipe_details(&recipe);
    Ok(())
}

/// Print the raw script, exactly as stored
async fn print_script(client: &LarderClient, id: &str) -> Result<()> {
    let script = client.get_script(id).await?;
    print!("{}", script);
    Ok(())
}

/// Search recipes
async fn search_recipes(
    client: &LarderClient,
    config: &Config,
    search: &RecipeSearch,
) -> Result<()> {
    let recipes = client.search_recipes(search).await?;

    if config.json {
        return print_json(&recipes);
    }

    if recipes.is_empty() {
        println!("{}", "No recipes found.".yellow());
    } else {
        println!("{}", format!("Found {} recipe(s):", recipes.len()).bold());
        println!();
        for recipe in &recipes {
            print_recipe_summary(recipe);
        }
    }

    Ok(())
}

/// Fields given on the command line for an update
#[derive(Debug, Default)]
struct RecipeChanges {
    name: Option<String>,
    recipe_type: Option<String>,
    script: Option<String>,
    tags: Option<Vec<String>>,
}

impl RecipeChanges {
    /// Build the full replacement the server expects from the current state
    fn apply(self, current: RecipeDescriptor) -> RecipeUpdate {
        RecipeUpdate {
            id: Some(current.id),
            name: Some(self.name.unwrap_or(current.name)),
            recipe_type: Some(self.recipe_type.unwrap_or(current.recipe_type)),
            script: Some(self.script.unwrap_or(current.script)),
            tags: self.tags.unwrap_or(current.tags),
        }
    }
}

/// Update a recipe
///
/// The server replaces the whole record, so the current state is fetched
/// first and only the given fields are changed.
async fn update_recipe(
    client: &LarderClient,
    config: &Config,
    id: &str,
    changes: RecipeChanges,
) -> Result<()> {
    let current = client.get_recipe(id).await?;
    let update = changes.apply(current);

    let recipe = client.update_recipe(&update).await?;

    if config.json {
        return print_json(&recipe);
    }

    println!(
        "{}",
        format!("✓ Recipe {} updated successfully!", recipe.id)
            .green()
            .bold()
    );
    Ok(())
}

/// Delete a recipe
async fn delete_recipe(client: &LarderClient, id: &str) -> Result<()> {
    client.remove_recipe(id).await?;

    println!(
        "{}",
        format!("✓ Recipe {} deleted successfully!", id)
            .green()
            .bold()
    );

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a recipe summary
fn print_recipe_summary(recipe: &RecipeDescriptor) {
    println!("  {} {}", "▸".cyan(), recipe.name.bold());
    println!("    ID:   {}", recipe.id.dimmed());
    println!("    Type: {}", recipe.recipe_type.dimmed());
    if !recipe.tags.is_empty() {
        println!("    Tags: {}", recipe.tags.join(", ").dimmed());
    }
    println!();
}

/// Print detailed recipe information
fn print_recipe_details(recipe: &RecipeDescriptor) {
    println!("{}", "Recipe Details:".bold());
    println!("  ID:      {}", recipe.id.cyan());
    println!("  Name:    {}", recipe.name.bold());
    println!("  Type:    {}", recipe.recipe_type);
    println!("  Creator: {}", recipe.creator);
    if !recipe.tags.is_empty() {
        println!("  Tags:    {}", recipe.tags.join(", "));
    }
    println!("  Size:    {} bytes", recipe.script.len());

    if !recipe.links.is_empty() {
        println!("\n{}", "Links:".bold());
        for link in &recipe.links {
            println!(
                "  {:<18} {:?} {}",
                link.rel,
                link.method,
                link.href.dimmed()
            );
        }
    }

    println!("\n{}", "Script:".bold());
    println!("{}", "─".repeat(80).dimmed());
    println!("{}", recipe.script);
    println!("{}", "─".repeat(80).dimmed());
}
