//! CLI administration tool for link-shortener.
//!
//! Talks to the store directly, so links can be created and inspected
//! without the HTTP server running.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for the URL when omitted)
//! cargo run --bin admin -- shorten https://example.com --code promo
//!
//! # Show a link without counting a click
//! cargo run --bin admin -- info promo
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL`, `BASE_URL`, `SHORT_CODE_LENGTH`, ...

use link_shortener::application::services::LinkService;
use link_shortener::config::{self, Config};
use link_shortener::domain::entities::Link;
use link_shortener::infrastructure::persistence::{MIGRATOR, SqliteLinkRepository, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::SqlitePool;
use std::sync::Arc;

type Registry = LinkService<SqliteLinkRepository>;

/// CLI tool for managing link-shortener.
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
    /// Create a short link
    Shorten {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,

        /// Custom short code
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show a link without counting a click
    Info {
        /// Short code to look up
        code: String,
    },

    /// Show statistics
    Stats,

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

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect_pool(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Shorten { url, code } => {
            let registry = open_registry(pool, &config).await?;
            shorten(&registry, url, code).await?
        }
        Commands::Info { code } => {
            let registry = open_registry(pool, &config).await?;
            info(&registry, &code).await?
        }
        Commands::Stats => {
            let registry = open_registry(pool, &config).await?;
            handle_stats(&registry).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Applies pending migrations and wires the registry over `pool`.
async fn open_registry(pool: SqlitePool, config: &Config) -> Result<Registry> {
    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repository =
        SqliteLinkRepository::new(Arc::new(pool)).with_timeout(config.store_timeout());
    Ok(LinkService::new(Arc::new(repository), config.registry()))
}

/// Creates a short link, prompting for the URL when it was not passed.
async fn shorten(registry: &Registry, url: Option<String>, code: Option<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let link = registry
        .shorten(&url, code.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short link ready".green().bold());
    println!();
    print_link(registry, &link);

    Ok(())
}

async fn info(registry: &Registry, code: &str) -> Result<()> {
    let link = registry
        .info(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "ℹ️  Link Information".bright_blue().bold());
    println!();
    print_link(registry, &link);

    Ok(())
}

fn print_link(registry: &Registry, link: &Link) {
    println!(
        "  Short URL: {}",
        registry.short_url(&link.short_code).bright_yellow().bold()
    );
    println!("  Target:    {}", link.original_url.cyan());
    println!(
        "  Clicks:    {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:   {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Displays link and click totals.
async fn handle_stats(registry: &Registry) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let stats = registry
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Links:          {}",
        stats.total_urls.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:         {}",
        stats.total_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Clicks / link:  {}",
        format!("{:.2}", stats.average_clicks).bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
