//! CLI administration tool for the favorites store.
//!
//! Inspects and edits the record document and the typed cache without going
//! through the bot.
//!
//! # Usage
//!
//! ```bash
//! # Favorite an actor
//! cargo run --bin favctl -- stars add abc123 "Actor Name"
//!
//! # List favorited titles
//! cargo run --bin favctl -- titles list
//!
//! # Register a group
//! cargo run --bin favctl -- groups upsert -- -100123 "Movie Night"
//!
//! # Drop a cached entry
//! cargo run --bin favctl -- cache delete title abc-001
//!
//! # Check Redis connectivity
//! cargo run --bin favctl -- cache check
//! ```
//!
//! # Environment Variables
//!
//! See [`favstore::config`]. `RECORD_FILE`, `USE_CACHE` and the `REDIS_*`
//! variables are honored; a `.env` file is loaded if present.

use favstore::config;
use favstore::domain::entities::Record;
use favstore::infrastructure::cache::CacheCategory;
use favstore::state::BotContext;
use favstore::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing the favorites store.
#[derive(Parser)]
#[command(name = "favctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage favorited actors
    Stars {
        #[command(subcommand)]
        action: StarAction,
    },

    /// Manage favorited titles
    Titles {
        #[command(subcommand)]
        action: TitleAction,
    },

    /// Manage registered groups
    Groups {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Inspect the typed cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Print the whole record document
    Record,
}

#[derive(Subcommand)]
enum StarAction {
    /// List favorited actors
    List,

    /// Favorite an actor
    Add {
        /// Actor id (stored lower-cased)
        id: String,
        /// Display name
        name: String,
    },

    /// Remove a favorited actor
    Remove {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check whether an actor is favorited
    Has { id: String },
}

#[derive(Subcommand)]
enum TitleAction {
    /// List favorited titles
    List,

    /// Favorite a title
    Add {
        /// Title id (stored lower-cased)
        id: String,
        /// Ids of the actors appearing in the title
        actors: Vec<String>,
    },

    /// Remove a favorited title
    Remove {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check whether a title is favorited
    Has { id: String },
}

#[derive(Subcommand)]
enum GroupAction {
    /// List registered groups
    List,

    /// Register a group or rename it
    Upsert {
        #[arg(allow_hyphen_values = true)]
        id: i64,
        title: String,
    },

    /// Unregister a group
    Remove {
        #[arg(allow_hyphen_values = true)]
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Show the cached value for a key
    Get {
        category: CacheCategory,
        key: String,
    },

    /// Delete a cached key
    Delete {
        category: CacheCategory,
        key: String,
    },

    /// Check Redis connectivity
    Check,

    /// List categories with their prefixes and default TTLs
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init(&config)?;

    let ctx = BotContext::from_config(&config).await;

    match cli.command {
        Commands::Stars { action } => handle_star_action(action, &ctx).await?,
        Commands::Titles { action } => handle_title_action(action, &ctx).await?,
        Commands::Groups { action } => handle_group_action(action, &ctx).await?,
        Commands::Cache { action } => handle_cache_action(action, &ctx).await?,
        Commands::Record => show_record(&ctx).await?,
    }

    Ok(())
}

/// Dispatches actor commands.
async fn handle_star_action(action: StarAction, ctx: &BotContext) -> Result<()> {
    match action {
        StarAction::List => {
            println!("{}", "⭐ Favorited actors".bright_blue().bold());
            println!();

            let stars = ctx.favorites.list_favorite_actors().await;
            if stars.is_empty() {
                println!("{}", "  No actors favorited".yellow());
                return Ok(());
            }

            println!(
                "  {:<24} {}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold()
            );
            println!("  {}", "─".repeat(50).bright_black());
            for star in &stars {
                println!("  {:<24} {}", star.id.cyan(), star.name);
            }
            println!();
            println!("  Total: {}", stars.len().to_string().bright_white().bold());
        }
        StarAction::Add { id, name } => {
            ensure_persisted(ctx.favorites.add_favorite_actor(&name, &id).await)?;
            println!("{} {}", "✅ Favorited".green().bold(), id.to_lowercase().cyan());
        }
        StarAction::Remove { id, yes } => {
            if !confirm(&format!("Remove actor {}?", id), yes)? {
                return Ok(());
            }
            ensure_persisted(ctx.favorites.remove_favorite_actor(&id).await)?;
            println!("{} {}", "✅ Removed".green().bold(), id.cyan());
        }
        StarAction::Has { id } => {
            print_membership(&id, ctx.favorites.contains_actor(&id).await);
        }
    }

    Ok(())
}

/// Dispatches title commands.
async fn handle_title_action(action: TitleAction, ctx: &BotContext) -> Result<()> {
    match action {
        TitleAction::List => {
            println!("{}", "🎬 Favorited titles".bright_blue().bold());
            println!();

            let titles = ctx.favorites.list_favorite_titles().await;
            if titles.is_empty() {
                println!("{}", "  No titles favorited".yellow());
                return Ok(());
            }

            println!(
                "  {:<24} {}",
                "ID".bright_white().bold(),
                "Actors".bright_white().bold()
            );
            println!("  {}", "─".repeat(50).bright_black());
            for title in &titles {
                println!("  {:<24} {}", title.id.cyan(), title.stars.join(", "));
            }
            println!();
            println!("  Total: {}", titles.len().to_string().bright_white().bold());
        }
        TitleAction::Add { id, actors } => {
            ensure_persisted(ctx.favorites.add_favorite_title(&id, actors).await)?;
            println!("{} {}", "✅ Favorited".green().bold(), id.to_lowercase().cyan());
        }
        TitleAction::Remove { id, yes } => {
            if !confirm(&format!("Remove title {}?", id), yes)? {
                return Ok(());
            }
            ensure_persisted(ctx.favorites.remove_favorite_title(&id).await)?;
            println!("{} {}", "✅ Removed".green().bold(), id.cyan());
        }
        TitleAction::Has { id } => {
            print_membership(&id, ctx.favorites.contains_title(&id).await);
        }
    }

    Ok(())
}

/// Dispatches group commands.
async fn handle_group_action(action: GroupAction, ctx: &BotContext) -> Result<()> {
    match action {
        GroupAction::List => {
            println!("{}", "👥 Groups".bright_blue().bold());
            println!();

            let groups = ctx.favorites.list_groups().await;
            if groups.is_empty() {
                println!("{}", "  No groups registered".yellow());
                return Ok(());
            }

            for group in &groups {
                println!("  {:<16} {}", group.id.to_string().bright_black(), group.title.cyan());
            }
            println!();
            println!("  Total: {}", groups.len().to_string().bright_white().bold());
        }
        GroupAction::Upsert { id, title } => {
            ensure_persisted(ctx.favorites.upsert_group(id, &title).await)?;
            println!("{} {} {}", "✅ Saved group".green().bold(), id, title.cyan());
        }
        GroupAction::Remove { id, yes } => {
            if !confirm(&format!("Remove group {}?", id), yes)? {
                return Ok(());
            }
            ensure_persisted(ctx.favorites.remove_group(id).await)?;
            println!("{} {}", "✅ Removed group".green().bold(), id);
        }
    }

    Ok(())
}

/// Dispatches cache commands.
async fn handle_cache_action(action: CacheAction, ctx: &BotContext) -> Result<()> {
    match action {
        CacheAction::Get { category, key } => {
            ensure_cache_enabled(ctx)?;
            let value = ctx
                .cache
                .try_get::<serde_json::Value>(&key, category)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read cache: {}", e))?;

            match value {
                Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                None => println!("{} {}", "⚠️  Not cached:".yellow(), category.key(&key)),
            }
        }
        CacheAction::Delete { category, key } => {
            ensure_cache_enabled(ctx)?;
            ctx.cache
                .try_delete(&key, category)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to delete cache key: {}", e))?;
            println!("{} {}", "✅ Deleted".green().bold(), category.key(&key));
        }
        CacheAction::Check => {
            println!("{}", "🔍 Checking cache connection...".bright_blue());
            ensure_cache_enabled(ctx)?;

            if ctx.cache.health_check().await {
                println!("{}", "✅ Redis connection OK".green().bold());
            } else {
                anyhow::bail!("Redis did not answer PING");
            }
        }
        CacheAction::Categories => {
            println!(
                "  {:<22} {:<22} {}",
                "Category".bright_white().bold(),
                "Prefix".bright_white().bold(),
                "Default TTL".bright_white().bold()
            );
            println!("  {}", "─".repeat(60).bright_black());
            for category in CacheCategory::ALL {
                let ttl = match category.default_ttl() {
                    0 => "never expires".to_string(),
                    secs => format!("{}s", secs),
                };
                println!(
                    "  {:<22} {:<22} {}",
                    category.name().cyan(),
                    category.prefix(),
                    ttl.bright_black()
                );
            }
        }
    }

    Ok(())
}

/// Prints the record document as stored on disk.
async fn show_record(ctx: &BotContext) -> Result<()> {
    let record = ctx
        .favorites
        .try_load_record()
        .await
        .context("Failed to load record")?
        .unwrap_or_else(Record::default);

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn ensure_persisted(persisted: bool) -> Result<()> {
    if !persisted {
        anyhow::bail!("Failed to update the record file, see log for details");
    }
    Ok(())
}

fn ensure_cache_enabled(ctx: &BotContext) -> Result<()> {
    if !ctx.cache.is_enabled() {
        anyhow::bail!("Cache is disabled (set USE_CACHE=1 and check Redis connectivity)");
    }
    Ok(())
}

fn print_membership(id: &str, present: bool) {
    if present {
        println!("{} {}", id.cyan(), "is favorited".green());
    } else {
        println!("{} {}", id.cyan(), "is not favorited".yellow());
    }
}

/// Asks for confirmation unless `skip` is set.
fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
    }
    Ok(confirmed)
}
