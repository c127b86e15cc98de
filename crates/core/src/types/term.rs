//! Normalized glossary term.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Term`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum TermError {
    /// The input string is empty or whitespace-only.
    #[error("term cannot be empty")]
    Empty,
}

/// A normalized glossary term, the primary lookup key for words.
///
/// Normalization is trimming plus Unicode lowercasing, applied once at
/// construction. Every read and write path goes through this type, so
/// "Apple" and " apple " always resolve to the same word.
///
/// ## Examples
///
/// ```
/// use glossa_core::Term;
///
/// let term = Term::parse("  Apple ").unwrap();
/// assert_eq!(term.as_str(), "apple");
///
/// assert!(Term::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "sqlite", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlite", sqlx(transparent))]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    /// Parse a `Term` from a raw string, normalizing it.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::Empty`] if the input is empty after trimming.
    pub fn parse(s: &str) -> Result<Self, TermError> {
        let normalized = s.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(TermError::Empty);
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized term as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Term` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Term {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
