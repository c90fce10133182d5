//! CLI administration tool for contact-service.
//!
//! Provides database provisioning and contact inspection without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Apply bundled migrations
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show server version and row counts
//! cargo run --bin admin -- db info
//!
//! # List contacts
//! cargo run --bin admin -- contacts list
//!
//! # Delete a contact (asks for confirmation)
//! cargo run --bin admin -- contacts delete 42
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL`, `DB_URL` or `DB_*`).

use contact_service::application::services::ContactService;
use contact_service::config::{self, Config};
use contact_service::infrastructure::database;
use contact_service::infrastructure::persistence::PgContactRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type Service = ContactService<PgContactRepository>;

/// CLI tool for managing contact-service.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect and manage contacts
    Contacts {
        #[command(subcommand)]
        action: ContactAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

/// Contact subcommands.
#[derive(Subcommand)]
enum ContactAction {
    /// List all contacts
    List,

    /// Permanently delete a contact
    Delete {
        /// Contact id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = database::connect(&config).await?;

    let service = ContactService::new(Arc::new(PgContactRepository::new(Arc::new(
        pool.clone(),
    ))));

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &config, &pool, &service).await?,
        Commands::Contacts { action } => handle_contact_action(action, &service).await?,
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(
    action: DbAction,
    config: &Config,
    pool: &PgPool,
    service: &Service,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            match service.health_check().await {
                Ok(()) => {
                    println!("{}", "Database connection OK".green().bold());
                    println!(
                        "  {}",
                        config::mask_connection_string(&config.database_url).bright_black()
                    );
                }
                Err(e) => {
                    println!("{}", "Database connection failed".red().bold());
                    println!("  Error: {}", e.to_string().red());
                    std::process::exit(1);
                }
            }
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let contacts = service
                .count_contacts()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count contacts: {}", e))?;

            println!("  {}: {}", "PostgreSQL".bright_white(), version.cyan());
            println!(
                "  {}: {}",
                "Contacts".bright_white(),
                contacts.to_string().bright_yellow().bold()
            );
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());
            database::migrate(pool).await?;
            println!("{}", "Schema is up to date".green().bold());
        }
    }

    Ok(())
}

/// Dispatches contact commands.
async fn handle_contact_action(action: ContactAction, service: &Service) -> Result<()> {
    match action {
        ContactAction::List => list_contacts(service).await,
        ContactAction::Delete { id, yes } => delete_contact(service, id, yes).await,
    }
}

/// Prints all contacts as a table.
async fn list_contacts(service: &Service) -> Result<()> {
    println!("{}", "Contacts".bright_blue().bold());
    println!();

    let contacts = service
        .list_contacts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list contacts: {}", e))?;

    if contacts.is_empty() {
        println!("{}", "  No contacts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {:<35} {:<15}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Phone".bright_white().bold()
    );
    println!("  {}", "-".repeat(86).bright_black());

    for contact in &contacts {
        println!(
            "  {:<6} {:<30} {:<35} {:<15}",
            contact.id.to_string().bright_black(),
            contact.full_name().cyan(),
            contact.email,
            contact.phone
        );
    }

    println!();
    println!(
        "  Total: {}",
        contacts.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a contact after confirmation.
async fn delete_contact(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    let contact = service
        .get_contact(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("Cannot delete contact {id}"))?;

    println!("  Contact: {}", contact.full_name().cyan());
    println!("  Email:   {}", contact.email.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this contact permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_contact(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete contact: {}", e))?;

    println!("{}", "Contact deleted".green().bold());

    Ok(())
}
