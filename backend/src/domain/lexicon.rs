//! Static bilingual dictionary consulted before the remote provider.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::Direction;

mod entries;

/// Immutable English/Portuguese word map with one half per [`Direction`].
///
/// ## Invariants
/// - Keys are stored lowercase; lookups lowercase their input.
/// - Within one direction each key maps to exactly one value. Duplicate keys
///   supplied at construction keep the last value.
///
/// # Examples
/// ```
/// use flashcards::domain::{Direction, Lexicon};
///
/// let lexicon = Lexicon::global();
/// assert_eq!(lexicon.lookup("Study", Direction::SourceToTarget), Some("estudar"));
/// assert_eq!(lexicon.lookup("estudar", Direction::TargetToSource), Some("study"));
/// assert_eq!(lexicon.lookup("zxzx", Direction::SourceToTarget), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

static GLOBAL: OnceLock<Lexicon> = OnceLock::new();

impl Lexicon {
    /// Build a lexicon from `(english, portuguese)` pairs.
    pub fn from_entries<I, S, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for (source, target) in entries {
            let source = source.as_ref().trim();
            let target = target.as_ref().trim();
            lexicon
                .forward
                .insert(source.to_lowercase(), target.to_owned());
            lexicon
                .reverse
                .insert(target.to_lowercase(), source.to_owned());
        }
        lexicon
    }

    /// Process-wide lexicon built from the curated vocabulary on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| Self::from_entries(entries::ENTRIES.iter().copied()))
    }

    /// Case-insensitive lookup in the half selected by `direction`.
    pub fn lookup(&self, word: &str, direction: Direction) -> Option<&str> {
        let key = word.trim().to_lowercase();
        let half = match direction {
            Direction::SourceToTarget => &self.forward,
            Direction::TargetToSource => &self.reverse,
        };
        half.get(&key).map(String::as_str)
    }

    /// Number of entries in the forward half.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
