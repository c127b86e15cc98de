//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! glossa migrate
//! ```
//!
//! # Environment Variables
//!
//! - `GLOSSA_DATABASE_URL` - `SQLite` connection string (falls back to
//!   `DATABASE_URL`)

use thiserror::Error;

use glossa_engine::db;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration failed to apply.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply all pending migrations to the glossary database.
///
/// # Errors
///
/// Returns `MigrateError` if the database URL is missing, the database is
/// unreachable, or a migration fails to apply.
pub async fn run() -> Result<(), MigrateError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url().ok_or(MigrateError::MissingEnvVar(
        "GLOSSA_DATABASE_URL",
    ))?;

    tracing::info!("Connecting to glossary database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Applying migrations...");
    db::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations applied successfully");
    Ok(())
}
