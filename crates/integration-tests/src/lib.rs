//! Integration tests for Glossa.
//!
//! The tests drive [`Dispatcher::handle`] end-to-end against an in-memory
//! `SQLite` store, exactly the way a transport collaborator would: caller
//! identity plus command name plus argument tokens in, an `Outcome` back.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p glossa-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `glossary_flow` - Submission, search, verification, deletion
//! - `permissions` - Tier enforcement and admin-set lifecycle

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use secrecy::SecretString;
use sqlx::SqlitePool;

use glossa_core::{CallerId, Outcome};
use glossa_engine::Dispatcher;
use glossa_engine::db::{self, AdminRepository};

/// The operator identity every test context is configured with.
pub const OPERATOR: CallerId = CallerId::new(900_001);

/// An admin identity tests may grant privilege to.
pub const ADMIN: CallerId = CallerId::new(555);

/// A plain user identity with no privilege.
pub const USER: CallerId = CallerId::new(42);

/// A dispatcher over a fresh in-memory store.
pub struct TestContext {
    pub dispatcher: Dispatcher,
    pub pool: SqlitePool,
}

impl TestContext {
    /// Create a fresh in-memory store, apply migrations, and wrap it in a
    /// dispatcher configured with [`OPERATOR`].
    pub async fn new() -> Self {
        let pool = db::create_pool(&SecretString::from("sqlite::memory:"))
            .await
            .expect("Failed to open in-memory database");

        db::MIGRATOR
            .run(&pool)
            .await
            .expect("Failed to apply migrations");

        let dispatcher = Dispatcher::new(pool.clone(), OPERATOR);
        Self { dispatcher, pool }
    }

    /// Create a context with [`ADMIN`] already granted admin privilege.
    pub async fn with_admin() -> Self {
        let ctx = Self::new().await;
        ctx.grant_admin(ADMIN).await;
        ctx
    }

    /// Handle one command as the given caller.
    pub async fn handle(&self, caller: CallerId, command: &str, args: &[&str]) -> Outcome {
        self.dispatcher.handle(caller, command, args).await
    }

    /// Grant admin privilege directly through the store.
    pub async fn grant_admin(&self, caller: CallerId) {
        AdminRepository::new(&self.pool)
            .add(caller)
            .await
            .expect("Failed to grant admin");
    }

    /// Whether the admin set contains the given caller.
    pub async fn is_admin(&self, caller: CallerId) -> bool {
        AdminRepository::new(&self.pool)
            .contains(caller)
            .await
            .expect("Failed to query admin set")
    }
}

/// Unwrap a success outcome into its text payload.
///
/// # Panics
///
/// Panics if the outcome is not `Outcome::Ok`.
#[must_use]
pub fn ok_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Ok { text } => text,
        other => panic!("expected Ok outcome, got {other:?}"),
    }
}
