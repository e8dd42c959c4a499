//! Driven port for flashcard persistence.

use async_trait::async_trait;

use crate::domain::{Flashcard, FlashcardId, NewFlashcard};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by flashcard repository adapters.
    pub enum FlashcardPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "flashcard repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "flashcard repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlashcardRepository: Send + Sync {
    /// Store a flashcard, assigning its id and creation time. Each call is
    /// committed on its own.
    async fn insert(&self, flashcard: &NewFlashcard) -> Result<Flashcard, FlashcardPersistenceError>;

    /// All flashcards, newest first (`created_at` then `id`, descending).
    async fn list_newest_first(&self) -> Result<Vec<Flashcard>, FlashcardPersistenceError>;

    /// Remove a flashcard. Returns `false` when no row had that id.
    async fn delete(&self, id: FlashcardId) -> Result<bool, FlashcardPersistenceError>;
}
