//! CLI administration tool for tinylink.
//!
//! Provides commands for inspecting statistics and managing links without
//! requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Delete a link by code
//! cargo run --bin admin -- delete abc123
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show link and click statistics
    Stats,

    /// Delete a link by its short code
    Delete {
        /// Short code of the link to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Delete { code, yes } => handle_delete(&pool, &code, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints link totals and the most recent links with their click counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0) FROM links")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let recent = repo.list(0, 10).await?;

    if recent.is_empty() {
        println!("{}", "  No links yet".yellow());
        return Ok(());
    }

    println!("{}", "Most recent links:".bright_white().bold());
    println!(
        "  {:<10} {:<8} {:<20} Target",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &recent {
        println!(
            "  {:<10} {:<8} {:<20} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }
    println!();

    Ok(())
}

/// Deletes a link after confirmation.
async fn handle_delete(pool: &PgPool, code: &str, skip_confirm: bool) -> Result<()> {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    let link = repo
        .find_by_code(code)
        .await?
        .with_context(|| format!("No link found with code '{}'", code))?;

    println!("{}", "Delete link".bright_blue().bold());
    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.target_url);
    println!("  Clicks: {}", link.clicks.to_string().bright_green());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    repo.delete(code).await?;

    println!("{}", "Link deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i32>("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check query failed")?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
