//! Domain primitives, services and ports.
//!
//! Purpose: hold the flashcard and account model independent of HTTP and
//! storage. Inbound adapters talk to the driving ports in [`ports`]; outbound
//! adapters implement the driven ones.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `Lexicon`, `TranslationResolver`: the two-tier word translation.
//! - `FlashcardService`, `AccountService`: services behind the driving ports.

pub mod account_service;
pub mod auth;
pub mod categories;
pub mod direction;
pub mod error;
pub mod flashcard;
pub mod flashcard_service;
pub mod lexicon;
pub mod ports;
pub mod trace_id;
pub mod translation;
pub mod user;
pub mod word;

pub use self::account_service::AccountService;
pub use self::auth::{
    AccessToken, AuthValidationError, BEARER_TOKEN_TYPE, LoginCredentials, PasswordHash,
    SignupDetails, TokenClaims,
};
pub use self::direction::{Direction, ParseDirectionError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::flashcard::{Flashcard, FlashcardId, NewFlashcard};
pub use self::flashcard_service::FlashcardService;
pub use self::lexicon::Lexicon;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::translation::{
    TranslationResolver, TranslationResult, TranslationSource, identity_fallback,
};
pub use self::user::{EmailAddress, NewUser, User, UserId, UserName, UserValidationError};
pub use self::word::{Word, WordValidationError};
