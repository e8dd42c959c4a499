//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`AccountCommand`, `AccountQuery`, `FlashcardCommand`,
//! `FlashcardQuery`, `TranslationQuery`) are called by inbound adapters.
//! Driven ports (`UserRepository`, `FlashcardRepository`, `PasswordHasher`,
//! `TokenCodec`, `RemoteTranslationSource`) are implemented by outbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod account_query;
mod flashcard_command;
mod flashcard_query;
mod flashcard_repository;
mod password_hasher;
mod remote_translation_source;
mod token_codec;
mod translation_query;
mod user_repository;

pub use account_command::{AccountCommand, FIXTURE_ACCESS_TOKEN, FixtureAccountCommand};
pub use account_query::{AccountQuery, FIXTURE_USER_ID, FixtureAccountQuery, UserProfile};
pub use flashcard_command::{FixtureFlashcardCommand, FlashcardCommand};
pub use flashcard_query::{FixtureFlashcardQuery, FlashcardQuery};
#[cfg(test)]
pub use flashcard_repository::MockFlashcardRepository;
pub use flashcard_repository::{FlashcardPersistenceError, FlashcardRepository};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use remote_translation_source::MockRemoteTranslationSource;
pub use remote_translation_source::{
    FixtureRemoteTranslationSource, RemoteTranslationError, RemoteTranslationSource,
};
#[cfg(test)]
pub use token_codec::MockTokenCodec;
pub use token_codec::{TokenCodec, TokenError};
pub use translation_query::{FixtureTranslationQuery, TranslationQuery};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::Error;

/// Creation time stamped on fixture flashcards.
fn fixture_timestamp() -> Result<DateTime<Utc>, Error> {
    Utc.timestamp_opt(1_700_000_000, 0)
        .single()
        .ok_or_else(|| Error::internal("invalid fixture timestamp"))
}
