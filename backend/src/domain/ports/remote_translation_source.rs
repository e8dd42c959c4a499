//! Driven port for the remote translation provider consulted on lexicon
//! misses.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the remote translation provider.
    pub enum RemoteTranslationError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "translation transport failed: {message}",
        /// The call exceeded the configured timeout.
        Timeout { message: String } =>
            "translation request timed out: {message}",
        /// The HTTP status or the payload status was not a success.
        Status { status: u16, message: String } =>
            "translation provider returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "translation response decode failed: {message}",
        /// The provider answered with a blank translation.
        EmptyTranslation =>
            "translation provider returned an empty translation",
    }
}

/// Port for fetching a single word translation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteTranslationSource: Send + Sync {
    /// Translate `word` for a language pair such as `en|pt`.
    ///
    /// Returns the trimmed, non-empty translated text.
    async fn fetch_translation(
        &self,
        word: &str,
        language_pair: &str,
    ) -> Result<String, RemoteTranslationError>;
}

/// Offline source that never translates, leaving every lexicon miss to the
/// identity fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRemoteTranslationSource;

#[async_trait]
impl RemoteTranslationSource for FixtureRemoteTranslationSource {
    async fn fetch_translation(
        &self,
        word: &str,
        language_pair: &str,
    ) -> Result<String, RemoteTranslationError> {
        Err(RemoteTranslationError::transport(format!(
            "no remote provider configured for {word} ({language_pair})"
        )))
    }
}
