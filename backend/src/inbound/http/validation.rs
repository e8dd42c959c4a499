//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes a 400 whose details name the offending field and a
//! stable code, plus the rejected value where echoing it is harmless.

use serde_json::json;

use crate::domain::categories::{self, CategoryRequestError};
use crate::domain::{Direction, Error, Word, WordValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyWord,
    WordTooLong,
    InvalidDirection,
    TooManyCategories,
    CategoryTooLong,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyWord => "empty_word",
            ErrorCode::WordTooLong => "word_too_long",
            ErrorCode::InvalidDirection => "invalid_direction",
            ErrorCode::TooManyCategories => "too_many_categories",
            ErrorCode::CategoryTooLong => "category_too_long",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const WORD_FIELD: FieldName = FieldName::new("word");
pub(crate) const DIRECTION_FIELD: FieldName = FieldName::new("direction");
pub(crate) const CATEGORIES_FIELD: FieldName = FieldName::new("categories");

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

/// Validate a word from a body or path segment.
pub(crate) fn parse_word(field: FieldName, raw: &str) -> Result<Word, Error> {
    Word::new(raw).map_err(|err| {
        let code = match err {
            WordValidationError::Empty => ErrorCode::EmptyWord,
            WordValidationError::TooLong { .. } => ErrorCode::WordTooLong,
        };
        field_error(field, err.to_string(), code)
    })
}

/// Parse an optional direction, defaulting to English to Portuguese.
pub(crate) fn parse_direction(field: FieldName, raw: Option<&str>) -> Result<Direction, Error> {
    let Some(value) = raw else {
        return Ok(Direction::default());
    };
    value.trim().parse::<Direction>().map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": field.as_str(),
            "value": value,
            "code": ErrorCode::InvalidDirection.as_str(),
        }))
    })
}

/// Reject generation requests that are too large to serve in one go.
pub(crate) fn check_categories(field: FieldName, names: &[String]) -> Result<(), Error> {
    categories::check_request(names).map_err(|err| {
        let (code, extra) = match &err {
            CategoryRequestError::TooMany { count, max } => {
                (ErrorCode::TooManyCategories, json!({ "count": count, "max": max }))
            }
            CategoryRequestError::NameTooLong { index, max } => {
                (ErrorCode::CategoryTooLong, json!({ "index": index, "max": max }))
            }
        };
        let mut details = json!({ "field": field.as_str(), "code": code.as_str() });
        if let (Some(target), Some(source)) = (details.as_object_mut(), extra.as_object()) {
            target.extend(source.clone());
        }
        Error::invalid_request(err.to_string()).with_details(details)
    })
}
