//! Validated input word.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest accepted word, in characters.
pub const WORD_MAX: usize = 100;

/// A word submitted for translation.
///
/// ## Invariants
/// - Leading and trailing whitespace is removed.
/// - Non-empty and at most [`WORD_MAX`] characters.
///
/// Because the word is never empty, the identity fallback of the translation
/// resolver never produces an empty translation. The trimmed form is also what
/// translation results report back as the input word.
///
/// # Examples
/// ```
/// use flashcards::domain::Word;
///
/// let word = Word::new("  Study ").expect("valid word");
/// assert_eq!(word.as_ref(), "Study");
/// assert_eq!(word.normalised(), "study");
/// assert!(Word::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordValidationError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must be at most {max} characters")]
    TooLong { max: usize },
}

impl Word {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, WordValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WordValidationError::Empty);
        }
        if trimmed.chars().count() > WORD_MAX {
            return Err(WordValidationError::TooLong { max: WORD_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Lowercased form used for dictionary lookups and remote queries.
    pub fn normalised(&self) -> String {
        self.0.to_lowercase()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Word> for String {
    fn from(value: Word) -> Self {
        value.0
    }
}

impl TryFrom<String> for Word {
    type Error = WordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
