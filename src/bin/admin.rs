//! CLI administration tool for alias-shortener.
//!
//! Provides commands for managing users, inspecting short URLs, and
//! performing database operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for anything not given)
//! cargo run --bin admin -- user create --username alice
//!
//! # Show a user
//! cargo run --bin admin -- user show alice
//!
//! # Show a short URL (alias match is exact, including case)
//! cargo run --bin admin -- url show docs
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BCRYPT_COST` (optional): work factor for `user create` (default: 12)

use alias_shortener::api::dto::auth::RegisterRequest;
use alias_shortener::domain::entities::NewUser;
use alias_shortener::domain::repositories::{UrlGetter, UserFinder, UserRegistrar};
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::{PgUrlRepository, PgUserRepository};
use alias_shortener::infrastructure::security::PasswordHasher;
use alias_shortener::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing alias-shortener.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect short URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show a user by username
    Show { username: String },
}

#[derive(Subcommand)]
enum UrlAction {
    /// Show the short URL stored under an alias
    Show { alias: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Url { action } => handle_url_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            password,
            yes,
        } => create_user(repo, username, password, yes).await?,
        UserAction::Show { username } => show_user(repo, &username).await?,
    }

    Ok(())
}

/// Creates a user with interactive prompts.
///
/// The password is hashed with bcrypt before it is stored, exactly as
/// `POST /register` does.
async fn create_user(
    repo: Arc<PgUserRepository>,
    username: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    check_credentials(&username, &password)?;

    println!("  Username: {}", username.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let cost = std::env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(bcrypt::DEFAULT_COST);

    let hasher = PasswordHasher::new(cost)
        .map_err(|e| anyhow::anyhow!("Failed to initialize password hasher: {}", e))?;
    let password_digest = hasher
        .hash(&password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    let user = match repo
        .create_user(NewUser {
            id: None,
            username: username.clone(),
            password_digest,
        })
        .await
    {
        Ok(user) => user,
        Err(AppError::UsernameTaken { .. }) => {
            println!("{}", "⚠️  Username is already taken".yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to create user: {}", e)),
    };

    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID: {}", user.id.to_string().bright_black());
    println!();

    Ok(())
}

/// Applies the same username and password limits as `POST /register`, so a
/// user created here can always log in.
fn check_credentials(username: &str, password: &str) -> Result<()> {
    RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
    .validate()
    .map_err(|e| anyhow::anyhow!("{}", AppError::from(e)))
}

async fn show_user(repo: Arc<PgUserRepository>, username: &str) -> Result<()> {
    match repo.get_user_by_username(username).await {
        Ok(user) => {
            println!("  Username: {}", user.username.cyan());
            println!("  ID:       {}", user.id.to_string().bright_black());
        }
        Err(AppError::UserNotFound { .. }) => {
            println!("{}", "  User not found".yellow());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    }

    Ok(())
}

async fn handle_url_action(action: UrlAction, pool: &PgPool) -> Result<()> {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    match action {
        UrlAction::Show { alias } => {
            let url = repo
                .find_by_alias(&alias)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            let Some(url) = url else {
                println!("{}", "  Alias not found".yellow());
                return Ok(());
            };

            println!("  Alias:   {}", url.alias.cyan());
            println!("  Target:  {}", url.target.bright_white());
            println!("  Creator: {}", url.creator.to_string().bright_black());
            println!(
                "  Created: {}",
                url.created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
    }

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
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
