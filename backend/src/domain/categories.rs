//! Word lists used by batch flashcard generation.

use crate::domain::word::WORD_MAX;

/// Words drawn from each category per generation request.
pub const WORDS_PER_CATEGORY: usize = 3;

/// Most categories accepted in one generation request.
pub const MAX_CATEGORIES: usize = 20;

/// Longest category name, in characters after trimming.
///
/// Leaves room for the one-digit suffix of placeholder words.
pub const CATEGORY_NAME_MAX: usize = WORD_MAX - 1;

/// Generation request outside the accepted size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryRequestError {
    #[error("at most {max} categories per request, got {count}")]
    TooMany { count: usize, max: usize },
    #[error("category {index} must be at most {max} characters")]
    NameTooLong { index: usize, max: usize },
}

/// Check the size of a generation request before any word is resolved.
///
/// # Examples
/// ```
/// use flashcards::domain::categories::{CategoryRequestError, MAX_CATEGORIES, check_request};
///
/// assert!(check_request(&["animals".to_owned(), " ".to_owned()]).is_ok());
/// let many = vec!["animals".to_owned(); MAX_CATEGORIES + 1];
/// assert!(matches!(check_request(&many), Err(CategoryRequestError::TooMany { .. })));
/// ```
pub fn check_request(names: &[String]) -> Result<(), CategoryRequestError> {
    if names.len() > MAX_CATEGORIES {
        return Err(CategoryRequestError::TooMany {
            count: names.len(),
            max: MAX_CATEGORIES,
        });
    }
    match names
        .iter()
        .position(|name| name.trim().chars().count() > CATEGORY_NAME_MAX)
    {
        Some(index) => Err(CategoryRequestError::NameTooLong {
            index,
            max: CATEGORY_NAME_MAX,
        }),
        None => Ok(()),
    }
}

/// A named list of sample words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "animals",
        words: &["cat", "dog", "bird", "fish", "lion", "horse", "cow"],
    },
    Category {
        name: "colors",
        words: &["red", "blue", "green", "yellow", "purple", "black", "white"],
    },
    Category {
        name: "food",
        words: &["apple", "banana", "bread", "milk", "cheese", "rice", "egg"],
    },
    Category {
        name: "family",
        words: &[
            "mother",
            "father",
            "sister",
            "brother",
            "grandmother",
            "grandfather",
            "son",
        ],
    },
    Category {
        name: "school",
        words: &["book", "pen", "pencil", "teacher", "student", "notebook", "chair"],
    },
    Category {
        name: "body",
        words: &["head", "hand", "eye", "mouth", "foot", "arm", "leg"],
    },
    Category {
        name: "clothes",
        words: &["shirt", "shoe", "hat", "dress", "pants", "coat", "sock"],
    },
    Category {
        name: "weather",
        words: &["sun", "rain", "snow", "wind", "cloud", "cold", "hot"],
    },
    Category {
        name: "house",
        words: &["kitchen", "bathroom", "bedroom", "door", "window", "table", "bed"],
    },
    Category {
        name: "transport",
        words: &["car", "bus", "train", "plane", "bicycle", "boat"],
    },
];

/// Find a category by name, ignoring case and surrounding whitespace.
pub fn find(name: &str) -> Option<&'static Category> {
    let name = name.trim();
    CATEGORIES
        .iter()
        .find(|category| category.name.eq_ignore_ascii_case(name))
}

/// The words to generate for `name`.
///
/// Known categories yield their first [`WORDS_PER_CATEGORY`] words. Unknown
/// categories yield the trimmed name suffixed with `1`, `2` and `3`; a blank
/// name yields just the digits.
///
/// # Examples
/// ```
/// use flashcards::domain::categories::words_for;
///
/// assert_eq!(words_for("Animals"), vec!["cat", "dog", "bird"]);
/// assert_eq!(words_for("doesnotexist"), vec!["doesnotexist1", "doesnotexist2", "doesnotexist3"]);
/// assert_eq!(words_for(" planets "), vec!["planets1", "planets2", "planets3"]);
/// ```
pub fn words_for(name: &str) -> Vec<String> {
    let name = name.trim();
    match find(name) {
        Some(category) => category
            .words
            .iter()
            .take(WORDS_PER_CATEGORY)
            .map(|word| (*word).to_owned())
            .collect(),
        None => (1..=WORDS_PER_CATEGORY)
            .map(|index| format!("{name}{index}"))
            .collect(),
    }
}
