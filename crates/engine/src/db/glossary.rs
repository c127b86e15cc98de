//! Glossary repository for word and meaning operations.
//!
//! All mutating operations commit before returning, so a successful result
//! means the state is durable. The word upsert relies on the unique index
//! over `words.word`: concurrent upserts of the same normalized term
//! converge on one row instead of racing on a read-then-insert.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use glossa_core::{MeaningId, Term, WordId};

use super::RepositoryError;
use crate::models::{Meaning, Word};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for word queries.
#[derive(Debug, sqlx::FromRow)]
struct WordRow {
    id: i64,
    word: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<WordRow> for Word {
    type Error = RepositoryError;

    fn try_from(row: WordRow) -> Result<Self, Self::Error> {
        let term = Term::parse(&row.word).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid term in database: {e}"))
        })?;

        Ok(Self {
            id: WordId::new(row.id),
            term,
            created_at: row.created_at,
        })
    }
}

/// Internal row type for meaning queries.
#[derive(Debug, sqlx::FromRow)]
struct MeaningRow {
    id: i64,
    word_id: i64,
    meaning: String,
    verified: bool,
    created_at: DateTime<Utc>,
}

impl From<MeaningRow> for Meaning {
    fn from(row: MeaningRow) -> Self {
        Self {
            id: MeaningId::new(row.id),
            word_id: WordId::new(row.word_id),
            text: row.meaning,
            verified: row.verified,
            created_at: row.created_at,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for glossary word and meaning operations.
pub struct GlossaryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> GlossaryRepository<'a> {
    /// Create a new glossary repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one unverified meaning under a word, creating the word row if
    /// it does not exist yet.
    ///
    /// Both writes happen in one transaction; the caller never observes a
    /// word without its first meaning.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the transaction fails.
    pub async fn add_meaning(&self, term: &Term, text: &str) -> Result<Meaning, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let word_id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO words (word, created_at)
            VALUES (?1, ?2)
            ON CONFLICT(word) DO UPDATE SET word = excluded.word
            RETURNING id
            ",
        )
        .bind(term.as_str())
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        let row: MeaningRow = sqlx::query_as(
            r"
            INSERT INTO meanings (word_id, meaning, verified, created_at)
            VALUES (?1, ?2, 0, ?3)
            RETURNING id, word_id, meaning, verified, created_at
            ",
        )
        .bind(word_id)
        .bind(text)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    /// List all meanings for a word, in submission order.
    ///
    /// Returns an empty vec when the word is unknown; an unknown word and a
    /// word without meanings are the same outcome.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_meanings(&self, term: &Term) -> Result<Vec<Meaning>, RepositoryError> {
        let rows: Vec<MeaningRow> = sqlx::query_as(
            r"
            SELECT meanings.id, meanings.word_id, meanings.meaning,
                   meanings.verified, meanings.created_at
            FROM words
            JOIN meanings ON words.id = meanings.word_id
            WHERE words.word = ?1
            ORDER BY meanings.id ASC
            ",
        )
        .bind(term.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List all words, alphabetically by normalized term.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored term is invalid.
    pub async fn list_words(&self) -> Result<Vec<Word>, RepositoryError> {
        let rows: Vec<WordRow> = sqlx::query_as(
            r"
            SELECT id, word, created_at
            FROM words
            ORDER BY word ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Mark every meaning matching the exact (word, text) pair as verified.
    ///
    /// Returns the number of affected rows; zero means no such meaning.
    /// Re-verifying already-verified meanings still counts the matched rows,
    /// so redelivery of the same command is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn verify_meaning(&self, term: &Term, text: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE meanings
            SET verified = 1
            WHERE word_id = (SELECT id FROM words WHERE word = ?1)
              AND meaning = ?2
            ",
        )
        .bind(term.as_str())
        .bind(text)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a word and, via the foreign-key cascade, all its meanings.
    ///
    /// Returns whether the word existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_word(&self, term: &Term) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM words
            WHERE word = ?1
            ",
        )
        .bind(term.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every meaning matching the exact (word, text) pair.
    ///
    /// Returns the number of affected rows. The word row itself survives
    /// even when its last meaning is removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_meaning(&self, term: &Term, text: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM meanings
            WHERE word_id = (SELECT id FROM words WHERE word = ?1)
              AND meaning = ?2
            ",
        )
        .bind(term.as_str())
        .bind(text)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
