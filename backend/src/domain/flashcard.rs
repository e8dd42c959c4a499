//! Flashcard entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Direction;

/// Database-assigned flashcard identifier.
pub type FlashcardId = i64;

/// A persisted word/translation pair.
///
/// Flashcards are immutable once stored; the only mutation is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: FlashcardId,
    pub word: String,
    pub translation: String,
    pub direction: Direction,
    pub created_at: DateTime<Utc>,
}

/// Flashcard content awaiting an identifier and creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlashcard {
    pub word: String,
    pub translation: String,
    pub direction: Direction,
}
