//! Command dispatch: parse, authorize, validate, invoke, format.
//!
//! The dispatcher is stateless per invocation; all context (caller
//! identity, argument tokens) arrives with each command, and conflicting
//! writes are serialized by the store underneath. Authorization runs
//! before argument validation, and a command whose tier requirement is not
//! met never reaches its store operation.

pub mod command;
pub mod menu;

use sqlx::SqlitePool;

use glossa_core::{CallerId, Outcome, Tier};

pub use command::{ArgumentRejection, Command, CommandKind};

use crate::db::{AdminRepository, GlossaryRepository, RepositoryError};

impl From<ArgumentRejection> for Outcome {
    fn from(rejection: ArgumentRejection) -> Self {
        match rejection {
            ArgumentRejection::Missing { usage } => Self::MissingArguments {
                usage: usage.to_owned(),
            },
            ArgumentRejection::Invalid { detail } => Self::InvalidArgument { detail },
        }
    }
}

/// Maps inbound commands onto store operations after tier authorization.
///
/// Owns the connection pool and the operator identity; both are supplied
/// at construction so nothing about the deployment is baked into the
/// dispatch logic.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    pool: SqlitePool,
    operator: CallerId,
}

impl Dispatcher {
    /// Create a dispatcher over a store, with the given operator identity.
    #[must_use]
    pub const fn new(pool: SqlitePool, operator: CallerId) -> Self {
        Self { pool, operator }
    }

    /// The configured operator identity.
    #[must_use]
    pub const fn operator(&self) -> CallerId {
        self.operator
    }

    /// Handle one inbound command and produce an [`Outcome`] for the
    /// transport to render.
    ///
    /// The pipeline is: resolve the command name, resolve the caller's
    /// tier, authorize, validate arguments, invoke the store operation,
    /// format the result. Unknown command names yield
    /// [`Outcome::NotFound`]; storage faults are logged and surface as
    /// [`Outcome::StorageError`] without internal detail.
    pub async fn handle(&self, caller: CallerId, command: &str, args: &[&str]) -> Outcome {
        let Some(kind) = CommandKind::from_name(command) else {
            tracing::debug!(%caller, command, "unknown command");
            return Outcome::NotFound;
        };

        let tier = match self.resolve_tier(caller).await {
            Ok(tier) => tier,
            Err(e) => return storage_error(&e),
        };

        if tier < kind.required_tier() {
            tracing::warn!(%caller, %tier, command = kind.name(), "permission denied");
            return Outcome::PermissionDenied;
        }

        let command = match kind.parse_args(args) {
            Ok(command) => command,
            Err(rejection) => return rejection.into(),
        };

        match self.execute(caller, tier, command).await {
            Ok(outcome) => outcome,
            Err(e) => storage_error(&e),
        }
    }

    /// Resolve a caller's permission tier.
    ///
    /// The operator constant wins before the admin set is consulted, so
    /// the operator's tier never depends on admin membership.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the admin-set lookup fails.
    pub async fn resolve_tier(&self, caller: CallerId) -> Result<Tier, RepositoryError> {
        if caller == self.operator {
            return Ok(Tier::Operator);
        }

        if AdminRepository::new(&self.pool).contains(caller).await? {
            return Ok(Tier::Admin);
        }

        Ok(Tier::User)
    }

    /// Invoke the store operation for an authorized, validated command and
    /// format its outcome.
    async fn execute(
        &self,
        caller: CallerId,
        tier: Tier,
        command: Command,
    ) -> Result<Outcome, RepositoryError> {
        let glossary = GlossaryRepository::new(&self.pool);
        let admins = AdminRepository::new(&self.pool);

        match command {
            Command::Start => Ok(Outcome::ok(
                "Welcome to the glossary. Send /menu to see the available commands.",
            )),

            Command::Add { word, meaning } => {
                glossary.add_meaning(&word, &meaning).await?;
                tracing::info!(%caller, %word, "meaning submitted");
                Ok(Outcome::ok(format!(
                    "Added \"{word}\" with meaning \"{meaning}\"."
                )))
            }

            Command::Search { word } => {
                let meanings = glossary.find_meanings(&word).await?;
                if meanings.is_empty() {
                    return Ok(Outcome::NotFound);
                }

                let mut text = format!("{word}:");
                for meaning in &meanings {
                    let status = if meaning.verified {
                        "verified"
                    } else {
                        "unverified"
                    };
                    text.push_str(&format!("\n - {} ({status})", meaning.text));
                }
                Ok(Outcome::ok(text))
            }

            Command::WordList => {
                let words = glossary.list_words().await?;
                if words.is_empty() {
                    return Ok(Outcome::ok("No words added yet."));
                }

                let list = words
                    .iter()
                    .map(|word| word.term.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(Outcome::ok(format!("Words:\n{list}")))
            }

            Command::Menu => Ok(Outcome::ok(menu::compose(tier))),

            Command::Verify { word, meaning } => {
                let affected = glossary.verify_meaning(&word, &meaning).await?;
                if affected == 0 {
                    return Ok(Outcome::NotFound);
                }

                tracing::info!(%caller, %word, affected, "meaning verified");
                Ok(Outcome::ok(format!(
                    "Verified meaning \"{meaning}\" for the word \"{word}\"."
                )))
            }

            Command::RemoveWord { word } => {
                if !glossary.delete_word(&word).await? {
                    return Ok(Outcome::NotFound);
                }

                tracing::info!(%caller, %word, "word removed");
                Ok(Outcome::ok(format!(
                    "Removed \"{word}\" and all its meanings."
                )))
            }

            Command::RemoveMeaning { word, meaning } => {
                let affected = glossary.delete_meaning(&word, &meaning).await?;
                if affected == 0 {
                    return Ok(Outcome::NotFound);
                }

                tracing::info!(%caller, %word, affected, "meaning removed");
                Ok(Outcome::ok(format!(
                    "Removed meaning \"{meaning}\" for the word \"{word}\"."
                )))
            }

            Command::AddAdmin { target } => {
                admins.add(target).await?;
                tracing::info!(%caller, %target, "admin granted");
                Ok(Outcome::ok(format!("Granted admin privilege to {target}.")))
            }

            Command::RemoveAdmin { target } => {
                // Revoking an absent identity is a no-op success, so
                // redelivered revocations are harmless.
                admins.remove(target).await?;
                tracing::info!(%caller, %target, "admin revoked");
                Ok(Outcome::ok(format!(
                    "Revoked admin privilege from {target}."
                )))
            }

            Command::AdminList => {
                let list = admins.list().await?;
                if list.is_empty() {
                    return Ok(Outcome::ok("No admins granted yet."));
                }

                let ids = list
                    .iter()
                    .map(|admin| admin.caller.to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(Outcome::ok(format!("Admins:\n{ids}")))
            }
        }
    }
}

/// Log a storage fault and produce the generic outcome for it.
fn storage_error(e: &RepositoryError) -> Outcome {
    tracing::error!(error = %e, "storage failure");
    Outcome::StorageError
}
