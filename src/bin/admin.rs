//! CLI administration tool for company-catalog.
//!
//! Provides commands for viewing statistics, managing companies and
//! performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # List companies
//! cargo run --bin admin -- company list --limit 20
//!
//! # Delete a company and its products
//! cargo run --bin admin -- company delete 3
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server; see `company_catalog::config`.

use company_catalog::config::Config;
use company_catalog::domain::pagination::{DEFAULT_LIMIT, Window};
use company_catalog::infrastructure::persistence::pool;
use company_catalog::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing company-catalog.
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
    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage companies
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,

    /// Show database info
    Info,
}

/// Company management subcommands.
#[derive(Subcommand)]
enum CompanyAction {
    /// List companies
    List {
        /// Number of companies to skip
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Maximum number of companies to show
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u64,
    },

    /// Delete a company together with its products
    Delete {
        /// Company ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env();
    config.validate()?;

    let pool = pool::connect(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(pool.clone()).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Company { action } => handle_company_action(action, pool.clone()).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays record counts.
async fn handle_stats(pool: SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let state = AppState::new(Arc::new(pool.clone()));

    let companies_count = state
        .company_service
        .count_companies()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count companies: {}", e))?;

    let products_count = state
        .product_service
        .count_products()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count products: {}", e))?;

    let unattached_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE attachment_id IS NULL")
            .fetch_one(&pool)
            .await?;

    println!(
        "  Companies:           {}",
        companies_count.to_string().bright_green().bold()
    );
    println!(
        "  Products:            {}",
        products_count.to_string().bright_green().bold()
    );
    println!(
        "  Unattached products: {}",
        unattached_count.to_string().bright_green().bold()
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
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            pool::migrate(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Database schema is up to date".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  SQLite:     {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Dispatches company management commands.
async fn handle_company_action(action: CompanyAction, pool: SqlitePool) -> Result<()> {
    let state = AppState::new(Arc::new(pool.clone()));

    match action {
        CompanyAction::List { offset, limit } => {
            list_companies(&state, &pool, Window::new(offset, if limit == 0 { DEFAULT_LIMIT } else { limit })).await?;
        }
        CompanyAction::Delete { id, yes } => {
            delete_company(&state, &pool, id, yes).await?;
        }
    }

    Ok(())
}

/// Lists one window of companies.
///
/// # Output Format
///
/// ```text
/// 🏢 Companies
///
///   ID   Title                          Location             Products
///   ───────────────────────────────────────────────────────────────────
///   1    Test case                      L 120 right and left 2
/// ```
async fn list_companies(state: &AppState, pool: &SqlitePool, window: Window) -> Result<()> {
    println!("{}", "🏢 Companies".bright_blue().bold());
    println!();

    let companies = state
        .company_service
        .list_companies(window, Window::new(0, 1))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list companies: {}", e))?;

    if companies.is_empty() {
        println!("{}", "  No companies found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<20} {:<8}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Location".bright_white().bold(),
        "Products".bright_white().bold()
    );
    println!("  {}", "─".repeat(67).bright_black());

    for view in &companies {
        let products = count_products(pool, view.company.id).await?;

        println!(
            "  {:<4} {:<30} {:<20} {}",
            view.company.id.to_string().bright_black(),
            truncate(&view.company.title, 30).cyan(),
            truncate(&view.company.location, 20),
            products.to_string().bright_white()
        );
    }

    println!();
    println!(
        "  Shown: {}",
        companies.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a company after confirmation (default: No).
async fn delete_company(state: &AppState, pool: &SqlitePool, id: i64, yes: bool) -> Result<()> {
    println!("{}", "🗑  Delete Company".bright_blue().bold());
    println!();

    let view = state
        .company_service
        .get_company(id, Window::new(0, 1))
        .await
        .map_err(|_| anyhow::anyhow!("Company {id} not found"))?;
    let products = count_products(pool, id).await?;

    println!("  Company:  {}", view.company.title.cyan());
    println!("  ID:       {}", id.to_string().bright_black());
    println!(
        "  Products: {}",
        products.to_string().yellow()
    );
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this company and all of its products?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state
        .company_service
        .delete_company(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete company: {}", e))?;

    println!();
    println!("{}", "✅ Company deleted".green().bold());
    println!();

    Ok(())
}

async fn count_products(pool: &SqlitePool, company_id: i64) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE attachment_id = ?1")
        .bind(company_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
