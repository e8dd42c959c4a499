//! DTOs for decoding MyMemory-style translation responses.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct TranslationResponseDto {
    #[serde(rename = "responseData")]
    pub(super) response_data: Option<TranslationDataDto>,
    #[serde(rename = "responseStatus")]
    pub(super) response_status: ResponseStatusDto,
    #[serde(rename = "responseDetails", default)]
    pub(super) response_details: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TranslationDataDto {
    #[serde(rename = "translatedText")]
    pub(super) translated_text: Option<String>,
}

/// The provider reports its status as a number or, on some errors, a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ResponseStatusDto {
    Code(u16),
    Text(String),
}

impl ResponseStatusDto {
    /// Numeric status, when it can be read as one.
    pub(super) fn code(&self) -> Option<u16> {
        match self {
            Self::Code(code) => Some(*code),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl TranslationResponseDto {
    /// Trimmed translated text, if the payload carries a non-blank one.
    pub(super) fn translated_text(&self) -> Option<&str> {
        self.response_data
            .as_ref()
            .and_then(|data| data.translated_text.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
