//! Driving port for one-off translation lookups that persist nothing.

use async_trait::async_trait;

use crate::domain::{Direction, Lexicon, TranslationResult, TranslationSource, Word};

#[async_trait]
pub trait TranslationQuery: Send + Sync {
    /// Resolve a word. Total: failures of the remote tier fall back to the
    /// word itself.
    async fn translate(&self, word: &Word, direction: Direction) -> TranslationResult;
}

/// Lexicon-only translation for handler tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTranslationQuery;

#[async_trait]
impl TranslationQuery for FixtureTranslationQuery {
    async fn translate(&self, word: &Word, direction: Direction) -> TranslationResult {
        let (translation, source) = match Lexicon::global().lookup(word.as_ref(), direction) {
            Some(hit) => (hit.to_owned(), TranslationSource::Lexicon),
            None => (word.to_string(), TranslationSource::Identity),
        };
        TranslationResult {
            word: word.to_string(),
            translation,
            direction,
            source,
        }
    }
}
