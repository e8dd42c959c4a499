//! Driving port for reading the flashcard deck.

use async_trait::async_trait;

use crate::domain::{Direction, Error, Flashcard};

use super::fixture_timestamp;

#[async_trait]
pub trait FlashcardQuery: Send + Sync {
    /// Every flashcard, newest first.
    async fn list_flashcards(&self) -> Result<Vec<Flashcard>, Error>;
}

/// Fixture deck holding a single card.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFlashcardQuery;

#[async_trait]
impl FlashcardQuery for FixtureFlashcardQuery {
    async fn list_flashcards(&self) -> Result<Vec<Flashcard>, Error> {
        Ok(vec![Flashcard {
            id: 1,
            word: "study".to_owned(),
            translation: "estudar".to_owned(),
            direction: Direction::SourceToTarget,
            created_at: fixture_timestamp()?,
        }])
    }
}
