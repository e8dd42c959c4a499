//! Mutex-guarded flashcard store.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{FlashcardPersistenceError, FlashcardRepository};
use crate::domain::{Flashcard, FlashcardId, NewFlashcard};

#[derive(Default)]
struct Deck {
    last_id: FlashcardId,
    cards: Vec<Flashcard>,
}

/// Flashcard repository holding the deck in memory.
///
/// Ids count up from 1 like a database sequence and are never reused.
pub struct InMemoryFlashcardRepository {
    deck: Mutex<Deck>,
    clock: Arc<dyn Clock>,
}

impl InMemoryFlashcardRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            deck: Mutex::new(Deck::default()),
            clock,
        }
    }

    fn deck(&self) -> Result<MutexGuard<'_, Deck>, FlashcardPersistenceError> {
        self.deck
            .lock()
            .map_err(|_| FlashcardPersistenceError::query("in-memory flashcard store poisoned"))
    }
}

#[async_trait]
impl FlashcardRepository for InMemoryFlashcardRepository {
    async fn insert(&self, flashcard: &NewFlashcard) -> Result<Flashcard, FlashcardPersistenceError> {
        let mut deck = self.deck()?;
        deck.last_id += 1;
        let stored = Flashcard {
            id: deck.last_id,
            word: flashcard.word.clone(),
            translation: flashcard.translation.clone(),
            direction: flashcard.direction,
            created_at: self.clock.utc(),
        };
        deck.cards.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<Flashcard>, FlashcardPersistenceError> {
        let mut cards = self.deck()?.cards.clone();
        cards.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(cards)
    }

    async fn delete(&self, id: FlashcardId) -> Result<bool, FlashcardPersistenceError> {
        let mut deck = self.deck()?;
        let before = deck.cards.len();
        deck.cards.retain(|card| card.id != id);
        Ok(deck.cards.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;
    use chrono::{TimeZone, Utc};
    use mockable::MockClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repository() -> InMemoryFlashcardRepository {
        let mut clock = MockClock::new();
        let fixed = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        clock.expect_utc().return_const(fixed);
        InMemoryFlashcardRepository::new(Arc::new(clock))
    }

    fn card(word: &str) -> NewFlashcard {
        NewFlashcard {
            word: word.to_owned(),
            translation: format!("{word}-pt"),
            direction: Direction::SourceToTarget,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn same_timestamp_lists_highest_id_first(repository: InMemoryFlashcardRepository) {
        for word in ["cat", "dog", "bird"] {
            repository.insert(&card(word)).await.expect("insert");
        }

        let words: Vec<_> = repository
            .list_newest_first()
            .await
            .expect("list")
            .into_iter()
            .map(|card| card.word)
            .collect();

        assert_eq!(words, ["bird", "dog", "cat"]);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_a_card_existed(repository: InMemoryFlashcardRepository) {
        let stored = repository.insert(&card("cat")).await.expect("insert");

        assert!(repository.delete(stored.id).await.expect("delete"));
        assert!(!repository.delete(stored.id).await.expect("second delete"));
        assert!(repository.list_newest_first().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repository: InMemoryFlashcardRepository) {
        let first = repository.insert(&card("cat")).await.expect("insert");
        repository.delete(first.id).await.expect("delete");
        let second = repository.insert(&card("dog")).await.expect("insert");

        assert_eq!(second.id, first.id + 1);
    }
}
