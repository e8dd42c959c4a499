//! PostgreSQL-backed `FlashcardRepository` implementation using Diesel ORM.
//!
//! Every insert runs as its own statement outside any explicit transaction,
//! so each one commits independently.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FlashcardPersistenceError, FlashcardRepository};
use crate::domain::{Direction, Flashcard, FlashcardId, NewFlashcard};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{FlashcardRow, NewFlashcardRow};
use super::pool::{DbPool, PoolError};
use super::schema::flashcards;

#[derive(Clone)]
pub struct DieselFlashcardRepository {
    pool: DbPool,
}

impl DieselFlashcardRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FlashcardPersistenceError {
    FlashcardPersistenceError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> FlashcardPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => FlashcardPersistenceError::connection(message),
        DieselFailure::UniqueViolation { .. } => {
            FlashcardPersistenceError::query("unexpected unique violation")
        }
        DieselFailure::Query(message) => FlashcardPersistenceError::query(message),
    }
}

fn row_to_flashcard(row: FlashcardRow) -> Result<Flashcard, FlashcardPersistenceError> {
    let direction: Direction = row.direction.parse().map_err(|err| {
        FlashcardPersistenceError::query(format!("flashcard {} has invalid direction: {err}", row.id))
    })?;
    Ok(Flashcard {
        id: row.id,
        word: row.word,
        translation: row.translation,
        direction,
        created_at: row.created_at,
    })
}

#[async_trait]
impl FlashcardRepository for DieselFlashcardRepository {
    async fn insert(&self, flashcard: &NewFlashcard) -> Result<Flashcard, FlashcardPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewFlashcardRow {
            word: &flashcard.word,
            translation: &flashcard.translation,
            direction: flashcard.direction.as_str(),
        };
        let stored = diesel::insert_into(flashcards::table)
            .values(&row)
            .returning(FlashcardRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_flashcard(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<Flashcard>, FlashcardPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<FlashcardRow> = flashcards::table
            .select(FlashcardRow::as_select())
            .order((flashcards::created_at.desc(), flashcards::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_flashcard).collect()
    }

    async fn delete(&self, id: FlashcardId) -> Result<bool, FlashcardPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::delete(flashcards::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }
}
