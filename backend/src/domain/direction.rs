//! Translation direction between the two supported languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which side of the English/Portuguese pair a word starts from.
///
/// Serialised as `"en_to_pt"` and `"pt_to_en"`, the values stored in the
/// `flashcards.direction` column and accepted by the HTTP API.
///
/// # Examples
/// ```
/// use flashcards::domain::Direction;
///
/// assert_eq!(Direction::default(), Direction::SourceToTarget);
/// assert_eq!(Direction::TargetToSource.language_pair(), "pt|en");
/// assert_eq!("en_to_pt".parse::<Direction>(), Ok(Direction::SourceToTarget));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// English to Portuguese.
    #[default]
    #[serde(rename = "en_to_pt")]
    SourceToTarget,
    /// Portuguese to English.
    #[serde(rename = "pt_to_en")]
    TargetToSource,
}

/// Raised when a direction string is neither `en_to_pt` nor `pt_to_en`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("direction must be one of en_to_pt or pt_to_en, got {0:?}")]
pub struct ParseDirectionError(pub String);

impl Direction {
    /// Wire value used in JSON bodies and the database.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceToTarget => "en_to_pt",
            Self::TargetToSource => "pt_to_en",
        }
    }

    /// Language pair code understood by the remote translation provider.
    pub const fn language_pair(self) -> &'static str {
        match self {
            Self::SourceToTarget => "en|pt",
            Self::TargetToSource => "pt|en",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en_to_pt" => Ok(Self::SourceToTarget),
            "pt_to_en" => Ok(Self::TargetToSource),
            other => Err(ParseDirectionError(other.to_owned())),
        }
    }
}
