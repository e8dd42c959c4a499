//! Driven port for issuing and verifying bearer tokens.

use crate::domain::{AccessToken, UserId};

use super::define_port_error;

define_port_error! {
    /// Token failures. Every verification failure maps to 401.
    pub enum TokenError {
        /// The token is not three base64url segments of valid JSON.
        Malformed { message: String } => "token is malformed: {message}",
        /// The header names an algorithm other than HS256.
        UnsupportedAlgorithm { algorithm: String } => "unsupported token algorithm: {algorithm}",
        /// The signature does not match.
        InvalidSignature => "token signature is invalid",
        /// The token is past its expiry.
        Expired => "token has expired",
        /// Claims could not be encoded while issuing.
        Encode { message: String } => "token encoding failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    /// Issue a token whose subject is `user_id`.
    fn issue(&self, user_id: &UserId) -> Result<AccessToken, TokenError>;

    /// Verify a token and return its subject.
    fn verify(&self, token: &str) -> Result<UserId, TokenError>;
}
