//! CLI command implementations.

pub mod admin;
pub mod migrate;

use secrecy::SecretString;

/// Read the glossary database URL, falling back to the generic
/// `DATABASE_URL`.
fn database_url() -> Option<SecretString> {
    std::env::var("GLOSSA_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .map(SecretString::from)
}
