//! Two-tier word translation: the static lexicon first, then the remote
//! provider, then the word itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ports::{RemoteTranslationError, RemoteTranslationSource};
use super::{Direction, Lexicon, Word};

/// Which tier produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationSource {
    Lexicon,
    Remote,
    /// Both tiers missed; the translation is the input word.
    Identity,
}

/// Outcome of resolving one word.
///
/// `word` is the caller's input with surrounding whitespace removed; casing is
/// kept. `translation` is never empty: on total failure it equals `word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub word: String,
    pub translation: String,
    pub direction: Direction,
    pub source: TranslationSource,
}

/// Collapse a remote lookup into a translation, substituting the word itself
/// when the provider failed.
///
/// # Examples
/// ```
/// use flashcards::domain::ports::RemoteTranslationError;
/// use flashcards::domain::{TranslationSource, identity_fallback};
///
/// let ok = identity_fallback("zxzx", Ok("xzxz".to_owned()));
/// assert_eq!(ok, ("xzxz".to_owned(), TranslationSource::Remote));
///
/// let failed = identity_fallback("zxzx", Err(RemoteTranslationError::empty_translation()));
/// assert_eq!(failed, ("zxzx".to_owned(), TranslationSource::Identity));
/// ```
pub fn identity_fallback(
    word: &str,
    remote: Result<String, RemoteTranslationError>,
) -> (String, TranslationSource) {
    match remote {
        Ok(text) => (text, TranslationSource::Remote),
        Err(_) => (word.to_owned(), TranslationSource::Identity),
    }
}

/// Resolves words against the lexicon and falls back to a remote source.
///
/// Holds no mutable state, so one resolver is shared by every request.
pub struct TranslationResolver<S: ?Sized> {
    lexicon: &'static Lexicon,
    remote: Arc<S>,
}

impl<S: ?Sized> Clone for TranslationResolver<S> {
    fn clone(&self) -> Self {
        Self {
            lexicon: self.lexicon,
            remote: Arc::clone(&self.remote),
        }
    }
}

impl<S> TranslationResolver<S>
where
    S: RemoteTranslationSource + ?Sized,
{
    /// Resolver over the process-wide lexicon.
    pub fn new(remote: Arc<S>) -> Self {
        Self::with_lexicon(Lexicon::global(), remote)
    }

    pub fn with_lexicon(lexicon: &'static Lexicon, remote: Arc<S>) -> Self {
        Self { lexicon, remote }
    }

    /// Translate `word`. Never fails.
    ///
    /// Lexicon hits never touch the network. On a miss the lowercased word is
    /// sent to the remote source; if that fails the word is returned as is and
    /// the failure is logged.
    pub async fn resolve(&self, word: &Word, direction: Direction) -> TranslationResult {
        let normalised = word.normalised();
        if let Some(hit) = self.lexicon.lookup(&normalised, direction) {
            debug!(word = %word, %direction, "lexicon hit");
            return TranslationResult {
                word: word.to_string(),
                translation: hit.to_owned(),
                direction,
                source: TranslationSource::Lexicon,
            };
        }

        let pair = direction.language_pair();
        let remote = self.remote.fetch_translation(&normalised, pair).await;
        if let Err(error) = &remote {
            warn!(%error, word = %word, language_pair = pair, "remote translation failed; using the word itself");
        }
        let (translation, source) = identity_fallback(word.as_ref(), remote);
        TranslationResult {
            word: word.to_string(),
            translation,
            direction,
            source,
        }
    }
}
