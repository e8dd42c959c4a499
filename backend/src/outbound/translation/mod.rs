//! Remote translation outbound adapter.
//!
//! A thin HTTP implementation of the `RemoteTranslationSource` port against a
//! MyMemory-compatible endpoint.

mod dto;
mod http_source;

pub use http_source::{
    DEFAULT_TRANSLATION_ENDPOINT, DEFAULT_TRANSLATION_TIMEOUT, HttpTranslationSource,
    MAX_RESPONSE_BYTES,
};
