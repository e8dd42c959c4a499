//! Flashcard domain service implementing the flashcard and translation
//! driving ports.
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    FlashcardCommand, FlashcardPersistenceError, FlashcardQuery, FlashcardRepository,
    RemoteTranslationSource, TranslationQuery,
};
use crate::domain::{
    Direction, Error, Flashcard, FlashcardId, NewFlashcard, TranslationResolver,
    TranslationResult, Word, categories,
};

/// Remote lookups in flight at once during batch generation.
pub const MAX_CONCURRENT_RESOLVES: usize = 4;

fn map_flashcard_persistence_error(error: FlashcardPersistenceError) -> Error {
    match error {
        FlashcardPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("flashcard repository unavailable: {message}"))
        }
        FlashcardPersistenceError::Query { message } => {
            Error::internal(format!("flashcard repository error: {message}"))
        }
    }
}

/// Materialises flashcards through the translation resolver.
pub struct FlashcardService<R: ?Sized, S: ?Sized> {
    repository: Arc<R>,
    resolver: TranslationResolver<S>,
}

impl<R: ?Sized, S: ?Sized> Clone for FlashcardService<R, S> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            resolver: self.resolver.clone(),
        }
    }
}

impl<R, S> FlashcardService<R, S>
where
    R: FlashcardRepository + ?Sized,
    S: RemoteTranslationSource + ?Sized,
{
    pub fn new(repository: Arc<R>, resolver: TranslationResolver<S>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    async fn persist(&self, result: TranslationResult) -> Result<Flashcard, Error> {
        let new_card = NewFlashcard {
            word: result.word,
            translation: result.translation,
            direction: result.direction,
        };
        self.repository
            .insert(&new_card)
            .await
            .map_err(map_flashcard_persistence_error)
    }

    fn words_for_categories(names: &[String]) -> Result<Vec<Word>, Error> {
        categories::check_request(names).map_err(|err| {
            let details = match &err {
                categories::CategoryRequestError::TooMany { count, max } => {
                    json!({ "field": "categories", "count": count, "max": max })
                }
                categories::CategoryRequestError::NameTooLong { index, max } => {
                    json!({ "field": "categories", "index": index, "max": max })
                }
            };
            Error::invalid_request(err.to_string()).with_details(details)
        })?;
        names
            .iter()
            .flat_map(|name| categories::words_for(name))
            .map(|raw| {
                Word::new(&raw)
                    .map_err(|err| Error::internal(format!("generated word {raw:?} invalid: {err}")))
            })
            .collect()
    }
}

#[async_trait]
impl<R, S> FlashcardCommand for FlashcardService<R, S>
where
    R: FlashcardRepository + ?Sized,
    S: RemoteTranslationSource + ?Sized,
{
    async fn create_flashcard(&self, word: &Word, direction: Direction) -> Result<Flashcard, Error> {
        let result = self.resolver.resolve(word, direction).await;
        self.persist(result).await
    }

    async fn generate_for_categories(&self, names: &[String]) -> Result<Vec<Flashcard>, Error> {
        let words = Self::words_for_categories(names)?;
        // `buffered` yields in input order, so completion order never leaks
        // into the persisted order.
        let lookups: Vec<_> = words
            .iter()
            .map(|word| self.resolver.resolve(word, Direction::SourceToTarget))
            .collect();
        let results: Vec<TranslationResult> = stream::iter(lookups)
            .buffered(MAX_CONCURRENT_RESOLVES)
            .collect()
            .await;

        // Inserts stay sequential so ids follow category then word order.
        let mut created = Vec::with_capacity(results.len());
        for result in results {
            created.push(self.persist(result).await?);
        }
        info!(categories = names.len(), created = created.len(), "generated flashcards");
        Ok(created)
    }

    async fn delete_flashcard(&self, id: FlashcardId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_flashcard_persistence_error)?;
        if deleted {
            Ok(())
        } else {
            Err(Error::not_found("Flashcard not found").with_details(json!({ "id": id })))
        }
    }
}

#[async_trait]
impl<R, S> FlashcardQuery for FlashcardService<R, S>
where
    R: FlashcardRepository + ?Sized,
    S: RemoteTranslationSource + ?Sized,
{
    async fn list_flashcards(&self) -> Result<Vec<Flashcard>, Error> {
        self.repository
            .list_newest_first()
            .await
            .map_err(map_flashcard_persistence_error)
    }
}

#[async_trait]
impl<R, S> TranslationQuery for FlashcardService<R, S>
where
    R: FlashcardRepository + ?Sized,
    S: RemoteTranslationSource + ?Sized,
{
    async fn translate(&self, word: &Word, direction: Direction) -> TranslationResult {
        self.resolver.resolve(word, direction).await
    }
}

#[cfg(test)]
#[path = "flashcard_service_tests.rs"]
mod tests;
