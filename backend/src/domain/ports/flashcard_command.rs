//! Driving port for flashcard mutations.

use async_trait::async_trait;

use crate::domain::{Direction, Error, Flashcard, FlashcardId, Lexicon, Word, categories};

use super::fixture_timestamp;

#[async_trait]
pub trait FlashcardCommand: Send + Sync {
    /// Translate `word` and store the resulting flashcard.
    async fn create_flashcard(&self, word: &Word, direction: Direction) -> Result<Flashcard, Error>;

    /// Create up to three flashcards per category, in category then word
    /// order.
    async fn generate_for_categories(&self, categories: &[String]) -> Result<Vec<Flashcard>, Error>;

    /// Delete a flashcard; a missing id is [`crate::domain::ErrorCode::NotFound`].
    async fn delete_flashcard(&self, id: FlashcardId) -> Result<(), Error>;
}

/// Stateless command used by handler tests. Translations come from the
/// lexicon only and ids count up from 1 within a call.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFlashcardCommand;

fn fixture_card(id: FlashcardId, word: &str, direction: Direction) -> Result<Flashcard, Error> {
    let translation = Lexicon::global()
        .lookup(word, direction)
        .unwrap_or(word)
        .to_owned();
    Ok(Flashcard {
        id,
        word: word.to_owned(),
        translation,
        direction,
        created_at: fixture_timestamp()?,
    })
}

#[async_trait]
impl FlashcardCommand for FixtureFlashcardCommand {
    async fn create_flashcard(&self, word: &Word, direction: Direction) -> Result<Flashcard, Error> {
        fixture_card(1, word.as_ref(), direction)
    }

    async fn generate_for_categories(&self, names: &[String]) -> Result<Vec<Flashcard>, Error> {
        names
            .iter()
            .flat_map(|name| categories::words_for(name))
            .zip(1..)
            .map(|(word, id)| fixture_card(id, &word, Direction::SourceToTarget))
            .collect()
    }

    async fn delete_flashcard(&self, id: FlashcardId) -> Result<(), Error> {
        if id == 1 {
            Ok(())
        } else {
            Err(Error::not_found("Flashcard not found"))
        }
    }
}
