//! CLI administration tool for short-links.
//!
//! Inspects and manages links directly in the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show a link
//! cargo run --bin admin -- link show Ab12Cd34
//!
//! # Show its visit history
//! cargo run --bin admin -- link history Ab12Cd34 --limit 20 --offset 0
//!
//! # Soft-delete it
//! cargo run --bin admin -- link delete Ab12Cd34
//!
//! # Totals
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_DSN`, `DATABASE_URL` or
//! `DB_*`), read from `.env` when present.

use short_links::application::services::LinkService;
use short_links::config::{self, Config};
use short_links::domain::entities::Link;
use short_links::domain::repositories::HistoryRepository;
use short_links::infrastructure::database;
use short_links::infrastructure::persistence::{PgHistoryRepository, PgLinkRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for managing short-links.
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
    /// Inspect and manage links
    Link {
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

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show a link by its short code
    Show { code: String },

    /// Show visits of a link, oldest first
    History {
        code: String,

        #[arg(short, long, default_value_t = 10)]
        limit: i64,

        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },

    /// Soft-delete a link
    Delete {
        code: String,

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
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Db {
            action: DbAction::Check,
        } => return Ok(check_connection(&config).await),
        Commands::Db {
            action: DbAction::Info,
        } => show_db_info(&database::connect(&config).await?).await?,
        Commands::Link { action } => {
            handle_link_action(action, &config, database::connect(&config).await?).await?
        }
        Commands::Stats => handle_stats(&database::connect(&config).await?).await?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Probes the database; the exit code reflects the result.
async fn check_connection(config: &Config) -> ExitCode {
    println!("{}", "Checking database connection...".bright_blue());

    let result = async {
        let pool = database::connect(config).await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        anyhow::Ok(())
    }
    .await;

    match result {
        Ok(()) => {
            println!("{}", "✅ Database connection OK".green().bold());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{} {e:#}", "❌ Database unavailable:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: PgPool) -> Result<()> {
    let pool = Arc::new(pool);
    let links = LinkService::new(
        Arc::new(PgLinkRepository::new(pool.clone())),
        config.link_settings(),
    );

    match action {
        LinkAction::Show { code } => {
            let link = links.get_link(&code).await?;
            print_link(&link);
        }
        LinkAction::History {
            code,
            limit,
            offset,
        } => {
            let link = links.get_link(&code).await?;
            let history = PgHistoryRepository::new(pool.clone());
            show_history(&link, &history, limit, offset).await?;
        }
        LinkAction::Delete { code, yes } => {
            let link = links.resolve_active(&code).await?;
            print_link(&link);

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete this link?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            links.delete_link(&code).await?;
            println!("{}", "✅ Link deleted".green().bold());
        }
    }

    Ok(())
}

/// Prints one link as a key/value block.
fn print_link(link: &Link) {
    let status = if link.is_active {
        "ACTIVE".green()
    } else {
        "DELETED".red()
    };

    println!();
    println!("  Code:     {}", link.short_code.cyan().bold());
    println!("  Original: {}", link.original_url);
    println!("  Short:    {}", link.short_url.bright_white());
    println!("  Clicks:   {}", link.usages_count.to_string().bright_green());
    println!("  Status:   {status}");
    println!(
        "  Created:  {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Prints a page of visits.
///
/// # Output Format
///
/// ```text
///   ID      Used at              Client
///   ──────────────────────────────────────────────────
///   1       2024-01-15 10:30:00  127.0.0.1:50412
/// ```
async fn show_history(
    link: &Link,
    history: &PgHistoryRepository,
    limit: i64,
    offset: i64,
) -> Result<()> {
    let entries = history.list_by_link(link.id, limit, offset).await?;

    println!(
        "{} {}",
        "Visits of".bright_blue().bold(),
        link.short_code.cyan().bold()
    );
    println!();

    if entries.is_empty() {
        println!("{}", "  No visits in this range".yellow());
        return Ok(());
    }

    println!(
        "  {:<7} {:<20} {}",
        "ID".bright_white().bold(),
        "Used at".bright_white().bold(),
        "Client".bright_white().bold()
    );
    println!("  {}", "─".repeat(50).bright_black());

    for entry in &entries {
        println!(
            "  {:<7} {:<20} {}",
            entry.id.to_string().bright_black(),
            entry.used_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            entry.client_address.cyan()
        );
    }

    println!();
    println!(
        "  Shown: {} of {}",
        entries.len().to_string().bright_white().bold(),
        link.usages_count.to_string().bright_white().bold()
    );

    Ok(())
}

/// Displays totals across all links.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_link")
        .fetch_one(pool)
        .await?;

    let active_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM short_link WHERE is_active")
            .fetch_one(pool)
            .await?;

    let visits_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_link_history")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:        {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Active links: {}",
        active_count.to_string().bright_green().bold()
    );
    println!(
        "  Visits:       {}",
        visits_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints the PostgreSQL server version.
async fn show_db_info(pool: &PgPool) -> Result<()> {
    println!("{}", "Database Information".bright_blue().bold());
    println!();

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await?;

    println!("  PostgreSQL: {}", version.bright_white());
    println!();

    Ok(())
}
