//! In-process repositories used when no database is configured.
//!
//! Data lives for the lifetime of the process only. Each repository guards
//! its own state with a mutex; nothing is shared between them.

mod flashcard_repository;
mod user_repository;

pub use flashcard_repository::InMemoryFlashcardRepository;
pub use user_repository::InMemoryUserRepository;
