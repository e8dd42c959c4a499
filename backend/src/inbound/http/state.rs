//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only see driving
//! ports, so they stay testable with fixtures and no I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountCommand, AccountQuery, FixtureAccountCommand, FixtureAccountQuery,
    FixtureFlashcardCommand, FixtureFlashcardQuery, FixtureTranslationQuery, FlashcardCommand,
    FlashcardQuery, TranslationQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub accounts_query: Arc<dyn AccountQuery>,
    pub flashcards: Arc<dyn FlashcardCommand>,
    pub flashcards_query: Arc<dyn FlashcardQuery>,
    pub translations: Arc<dyn TranslationQuery>,
}

impl HttpState {
    /// State backed entirely by fixture ports.
    ///
    /// # Examples
    /// ```
    /// use flashcards::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::fixtures();
    /// let _flashcards = state.flashcards.clone();
    /// ```
    pub fn fixtures() -> Self {
        Self {
            accounts: Arc::new(FixtureAccountCommand),
            accounts_query: Arc::new(FixtureAccountQuery),
            flashcards: Arc::new(FixtureFlashcardCommand),
            flashcards_query: Arc::new(FixtureFlashcardQuery),
            translations: Arc::new(FixtureTranslationQuery),
        }
    }
}
