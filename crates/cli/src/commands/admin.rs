//! Admin set management commands.
//!
//! The out-of-band equivalent of the operator's `add_admin`,
//! `remove_admin`, and `admin_list` commands, for bootstrapping the first
//! admins or cleaning up from a terminal.
//!
//! # Usage
//!
//! ```bash
//! glossa admin add --id 555
//! glossa admin remove --id 555
//! glossa admin list
//! ```
//!
//! # Environment Variables
//!
//! - `GLOSSA_DATABASE_URL` - `SQLite` connection string (falls back to
//!   `DATABASE_URL`)

use thiserror::Error;

use glossa_core::CallerId;
use glossa_engine::db::{self, AdminRepository, RepositoryError};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Grant admin privilege to a caller identity.
///
/// Granting to an identity that already holds the privilege is a no-op.
///
/// # Errors
///
/// Returns `AdminError` if the database URL is missing or the grant fails.
pub async fn add(id: i64) -> Result<(), AdminError> {
    let pool = connect().await?;
    let caller = CallerId::new(id);

    AdminRepository::new(&pool).add(caller).await?;

    tracing::info!("Granted admin privilege to {caller}");
    Ok(())
}

/// Revoke admin privilege from a caller identity.
///
/// # Errors
///
/// Returns `AdminError` if the database URL is missing or the revoke fails.
pub async fn remove(id: i64) -> Result<(), AdminError> {
    let pool = connect().await?;
    let caller = CallerId::new(id);

    let removed = AdminRepository::new(&pool).remove(caller).await?;

    if removed {
        tracing::info!("Revoked admin privilege from {caller}");
    } else {
        tracing::warn!("{caller} was not an admin");
    }
    Ok(())
}

/// List all admins.
///
/// # Errors
///
/// Returns `AdminError` if the database URL is missing or the query fails.
pub async fn list() -> Result<(), AdminError> {
    let pool = connect().await?;

    let admins = AdminRepository::new(&pool).list().await?;

    if admins.is_empty() {
        tracing::info!("No admins granted yet");
        return Ok(());
    }

    for admin in admins {
        tracing::info!("{} (granted {})", admin.caller, admin.created_at);
    }
    Ok(())
}

/// Connect to the glossary database from the environment.
async fn connect() -> Result<sqlx::SqlitePool, AdminError> {
    dotenvy::dotenv().ok();

    let database_url =
        super::database_url().ok_or(AdminError::MissingEnvVar("GLOSSA_DATABASE_URL"))?;

    db::create_pool(&database_url).await.map_err(AdminError::from)
}
