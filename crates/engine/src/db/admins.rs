//! Admin set repository.
//!
//! Membership is a flat set over caller identities. Inserts are idempotent
//! (unique index plus conflict-ignore), so redelivered grant commands are
//! harmless.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use glossa_core::{AdminId, CallerId};

use super::RepositoryError;
use crate::models::Admin;

/// Internal row type for admin queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: i64,
    caller_id: CallerId,
    created_at: DateTime<Utc>,
}

impl From<AdminRow> for Admin {
    fn from(row: AdminRow) -> Self {
        Self {
            id: AdminId::new(row.id),
            caller: row.caller_id,
            created_at: row.created_at,
        }
    }
}

/// Repository for admin set operations.
pub struct AdminRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Grant admin privilege to a caller identity.
    ///
    /// Granting to an identity that already holds the privilege is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(&self, caller: CallerId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO admins (caller_id, created_at)
            VALUES (?1, ?2)
            ON CONFLICT(caller_id) DO NOTHING
            ",
        )
        .bind(caller.as_i64())
        .bind(Utc::now())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Revoke admin privilege from a caller identity.
    ///
    /// Returns whether the identity was present.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove(&self, caller: CallerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM admins
            WHERE caller_id = ?1
            ",
        )
        .bind(caller.as_i64())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List all admins, in grant order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Admin>, RepositoryError> {
        let rows: Vec<AdminRow> = sqlx::query_as(
            r"
            SELECT id, caller_id, created_at
            FROM admins
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Whether a caller identity holds admin privilege.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn contains(&self, caller: CallerId) -> Result<bool, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*)
            FROM admins
            WHERE caller_id = ?1
            ",
        )
        .bind(caller.as_i64())
        .fetch_one(self.pool)
        .await?;

        Ok(count > 0)
    }
}
