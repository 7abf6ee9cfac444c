//! CLI administration tool for url-registry.
//!
//! Inspects and manages stored short links directly in PostgreSQL, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every link
//! cargo run --bin admin -- links list
//!
//! # Show one link
//! cargo run --bin admin -- links show abc123
//!
//! # Delete a link (asks for confirmation unless -y)
//! cargo run --bin admin -- links delete abc123
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server: `DATABASE_URL` or
//! `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`, plus the optional
//! `DB_*` pool settings.

use url_registry::config::Config;
use url_registry::domain::entities::UrlRecord;
use url_registry::domain::repositories::UrlRepository;
use url_registry::infrastructure::persistence::PgUrlRepository;
use url_registry::server::connect_pool;
use url_registry::utils::timestamp::to_iso8601;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-registry.
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
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, expired ones included
    List,

    /// Show a single link
    Show {
        /// Short code to look up
        short_code: String,
    },

    /// Permanently delete a link
    Delete {
        /// Short code to delete
        short_code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    let result = match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await,
        Commands::Stats => handle_stats(&pool).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    match action {
        LinkAction::List => list_links(&repo).await,
        LinkAction::Show { short_code } => show_link(&repo, &short_code).await,
        LinkAction::Delete { short_code, yes } => delete_link(&repo, &short_code, yes).await,
    }
}

/// Lists all links with their click counts.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   Code       Clicks   Created            Expires            URL
///   ────────────────────────────────────────────────────────────────
///   abc123     42       2024-01-15 10:30   never              https://example.com
///   old999     3        2024-01-10 08:00   2024-01-12 00:00   https://old.example.com
/// ```
///
/// Expired links are shown dimmed with their expiry in red.
async fn list_links(repo: &PgUrlRepository) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let records = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<8} {:<18} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Expires".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    let now = Utc::now();
    for record in &records {
        let expires = match record.expires_at {
            Some(at) if record.is_expired_at(now) => {
                at.format("%Y-%m-%d %H:%M").to_string().red()
            }
            Some(at) => at.format("%Y-%m-%d %H:%M").to_string().normal(),
            None => "never".bright_black(),
        };

        let code = if record.is_expired_at(now) {
            record.short_code.bright_black()
        } else {
            record.short_code.cyan()
        };

        println!(
            "  {:<10} {:<8} {:<18} {:<18} {}",
            code,
            record.clicks.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            expires,
            record.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows the statistics of a single link.
async fn show_link(repo: &PgUrlRepository, short_code: &str) -> Result<()> {
    let record = find_link(repo, short_code).await?;

    println!("{}", "🔗 Short Link".bright_blue().bold());
    println!();
    print_record(&record);
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(repo: &PgUrlRepository, short_code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    let record = find_link(repo, short_code).await?;
    print_record(&record);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete_by_code(short_code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    if deleted {
        println!("{}", "✅ Link deleted".green().bold());
    } else {
        println!("{}", "⚠️  Link was already gone".yellow());
    }
    println!();

    Ok(())
}

async fn find_link(repo: &PgUrlRepository, short_code: &str) -> Result<UrlRecord> {
    repo.find_by_code(short_code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Short code '{}' not found", short_code))
}

fn print_record(record: &UrlRecord) {
    let status = if record.is_expired() {
        "EXPIRED".red()
    } else {
        "ACTIVE".green()
    };

    println!("  Code:    {}", record.short_code.cyan());
    println!("  URL:     {}", record.original_url);
    println!("  Clicks:  {}", record.clicks.to_string().bright_green());
    println!(
        "  Created: {}",
        to_iso8601(record.created_at).bright_black()
    );
    println!(
        "  Expires: {}",
        record
            .expires_at
            .map(to_iso8601)
            .unwrap_or_else(|| "never".to_string())
            .bright_black()
    );
    println!("  Status:  {}", status);
}

/// Displays totals across all links.
///
/// Shows:
/// - Total number of links
/// - Number of expired links
/// - Total number of clicks
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let expired_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE expires_at IS NOT NULL AND expires_at < NOW()")
            .fetch_one(pool)
            .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM urls")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Expired: {}",
        expired_count.to_string().bright_yellow().bold()
    );
    println!(
        "  Clicks:  {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
