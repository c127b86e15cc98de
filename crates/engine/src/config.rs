//! Engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GLOSSA_DATABASE_URL` - `SQLite` connection string (falls back to
//!   `DATABASE_URL`)
//! - `GLOSSA_OPERATOR_ID` - The operator's external caller identity
//!
//! The operator identity is fixed at deployment time. It is never stored
//! in the admin table and cannot be revoked through any command.

use secrecy::SecretString;
use thiserror::Error;

use glossa_core::CallerId;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// `SQLite` database connection URL
    pub database_url: SecretString,
    /// The operator's caller identity
    pub operator: CallerId,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("GLOSSA_DATABASE_URL")?;
        let operator = get_required_env("GLOSSA_OPERATOR_ID")?
            .parse::<CallerId>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("GLOSSA_OPERATOR_ID".to_string(), e.to_string())
            })?;

        Ok(Self {
            database_url,
            operator,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get the database URL with fallback to the generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_id_parses() {
        let operator: CallerId = "2040196277".parse().unwrap();
        assert_eq!(operator.as_i64(), 2_040_196_277);
    }

    #[test]
    fn test_missing_env_error_display() {
        let err = ConfigError::MissingEnvVar("GLOSSA_OPERATOR_ID".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: GLOSSA_OPERATOR_ID"
        );
    }

    #[test]
    fn test_invalid_env_error_display() {
        let err = ConfigError::InvalidEnvVar("GLOSSA_OPERATOR_ID".to_string(), "nope".to_string());
        assert!(err.to_string().contains("GLOSSA_OPERATOR_ID"));
    }
}
