//! Glossa CLI - Database migrations and admin management tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! glossa migrate
//!
//! # Grant admin privilege to a caller identity
//! glossa admin add --id 555
//!
//! # Revoke admin privilege
//! glossa admin remove --id 555
//!
//! # List all admins
//! glossa admin list
//! ```
//!
//! # Commands
//!
//! - `migrate` - Apply database migrations
//! - `admin add/remove/list` - Manage the admin set out-of-band

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "glossa")]
#[command(author, version, about = "Glossa CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply database migrations
    Migrate,
    /// Manage the admin set
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Grant admin privilege to a caller identity
    Add {
        /// The caller identity to grant
        #[arg(short, long)]
        id: i64,
    },
    /// Revoke admin privilege from a caller identity
    Remove {
        /// The caller identity to revoke
        #[arg(short, long)]
        id: i64,
    },
    /// List all admins
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Add { id } => commands::admin::add(id).await?,
            AdminAction::Remove { id } => commands::admin::remove(id).await?,
            AdminAction::List => commands::admin::list().await?,
        },
    }
    Ok(())
}
