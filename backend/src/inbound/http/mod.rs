//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod flashcards;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod token_config;
pub mod translation;
pub mod users;
mod validation;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// Every versioned endpoint, mounted under `/api/v1`.
///
/// Handlers read [`state::HttpState`] from app data, so the enclosing app
/// must register it.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(users::signup)
        .service(users::login)
        .service(users::current_user)
        .service(flashcards::list_flashcards)
        .service(flashcards::generate_flashcards)
        .service(flashcards::create_flashcard)
        .service(flashcards::delete_flashcard)
        .service(translation::translate_word)
}
