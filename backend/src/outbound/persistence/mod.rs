//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories only translate between Diesel rows and domain types. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module. Connections come from a `bb8` pool via `diesel-async`.
//!
//! ```ignore
//! use flashcards::outbound::persistence::{DbPool, DieselFlashcardRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/flashcards")).await?;
//! let repo = DieselFlashcardRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_flashcard_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_flashcard_repository::DieselFlashcardRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
