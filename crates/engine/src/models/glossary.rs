//! Word and meaning domain types.

use chrono::{DateTime, Utc};

use glossa_core::{MeaningId, Term, WordId};

/// A glossary word (domain type).
///
/// The term is stored normalized; a word may transiently own zero meanings
/// after its last meaning is removed.
#[derive(Debug, Clone)]
pub struct Word {
    /// Unique word ID.
    pub id: WordId,
    /// The normalized term.
    pub term: Term,
    /// When the word was first created.
    pub created_at: DateTime<Utc>,
}

/// One candidate or verified definition, owned by a word.
///
/// Duplicate text under the same word is permitted; moderation, not
/// deduplication, decides which meanings survive.
#[derive(Debug, Clone)]
pub struct Meaning {
    /// Unique meaning ID.
    pub id: MeaningId,
    /// The owning word.
    pub word_id: WordId,
    /// Free-text definition content.
    pub text: String,
    /// Whether an admin has approved this meaning.
    pub verified: bool,
    /// When the meaning was submitted.
    pub created_at: DateTime<Utc>,
}
