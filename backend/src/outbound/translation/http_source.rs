//! Reqwest-backed remote translation adapter.
//!
//! Owns transport details only: query encoding, timeout, status mapping and
//! payload decoding. No retries and no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use tracing::debug;

use super::dto::TranslationResponseDto;
use crate::domain::ports::{RemoteTranslationError, RemoteTranslationSource};

/// Public MyMemory endpoint.
pub const DEFAULT_TRANSLATION_ENDPOINT: &str = "https://api.mymemory.translated.net/get";
/// Upper bound on one remote call.
pub const DEFAULT_TRANSLATION_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_USER_AGENT: &str = concat!("flashcards-backend/", env!("CARGO_PKG_VERSION"));
const SUCCESS_STATUS: u16 = 200;
/// Largest provider body read into memory. MyMemory replies are a few KiB.
pub const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Translation source issuing `GET {endpoint}?q=..&langpair=..` requests.
pub struct HttpTranslationSource {
    client: Client,
    endpoint: Url,
}

impl HttpTranslationSource {
    /// Build an adapter whose client enforces `timeout` on every request.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl RemoteTranslationSource for HttpTranslationSource {
    async fn fetch_translation(
        &self,
        word: &str,
        language_pair: &str,
    ) -> Result<String, RemoteTranslationError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", word), ("langpair", language_pair)])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body is only a preview here; an unreadable one is dropped.
            let body = read_capped(response, MAX_RESPONSE_BYTES)
                .await
                .unwrap_or_default();
            return Err(map_status_error(status, &body));
        }
        let body = read_capped(response, MAX_RESPONSE_BYTES).await?;
        let text = parse_translation(&body)?;
        debug!(word, language_pair, "remote translation succeeded");
        Ok(text)
    }
}

/// Read the body chunk by chunk, giving up once it grows past `limit` bytes.
async fn read_capped(mut response: Response, limit: usize) -> Result<Vec<u8>, RemoteTranslationError> {
    let oversized =
        || RemoteTranslationError::decode(format!("response body exceeds {limit} bytes"));
    let declared_too_large = response
        .content_length()
        .is_some_and(|len| usize::try_from(len).map_or(true, |len| len > limit));
    if declared_too_large {
        return Err(oversized());
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(map_transport_error)? {
        if body.len() + chunk.len() > limit {
            return Err(oversized());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn parse_translation(body: &[u8]) -> Result<String, RemoteTranslationError> {
    let decoded: TranslationResponseDto = serde_json::from_slice(body).map_err(|error| {
        RemoteTranslationError::decode(format!("invalid translation payload: {error}"))
    })?;

    match decoded.response_status.code() {
        Some(SUCCESS_STATUS) => {}
        code => {
            let details = decoded
                .response_details
                .as_deref()
                .unwrap_or("no details")
                .to_owned();
            return Err(RemoteTranslationError::status(code.unwrap_or(0), details));
        }
    }

    decoded
        .translated_text()
        .map(str::to_owned)
        .ok_or_else(RemoteTranslationError::empty_translation)
}

fn map_transport_error(error: reqwest::Error) -> RemoteTranslationError {
    if error.is_timeout() {
        RemoteTranslationError::timeout(error.to_string())
    } else if error.is_decode() {
        RemoteTranslationError::decode(error.to_string())
    } else {
        RemoteTranslationError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RemoteTranslationError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RemoteTranslationError::timeout(format!("status {}", status.as_u16()))
        }
        _ => RemoteTranslationError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let head: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
        format!("{head}...")
    } else {
        compact
    }
}

#[cfg(test)]
mod tests {
    //! Payload and status classification without touching the network.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"responseData":{"translatedText":"olá"},"responseStatus":200}"#, "olá")]
    #[case(r#"{"responseData":{"translatedText":"  casa \n"},"responseStatus":"200"}"#, "casa")]
    #[case(
        r#"{"responseData":{"translatedText":"gato","match":1},"responseStatus":200,"responseDetails":"","matches":[]}"#,
        "gato"
    )]
    fn accepts_successful_payloads(#[case] body: &str, #[case] expected: &str) {
        let text = parse_translation(body.as_bytes()).expect("translation");
        assert_eq!(text, expected);
    }

    #[rstest]
    #[case(r#"{"responseData":{"translatedText":"   "},"responseStatus":200}"#)]
    #[case(r#"{"responseData":{"translatedText":null},"responseStatus":200}"#)]
    #[case(r#"{"responseData":null,"responseStatus":200}"#)]
    fn blank_translations_are_empty(#[case] body: &str) {
        let err = parse_translation(body.as_bytes()).expect_err("blank translation");
        assert_eq!(err, RemoteTranslationError::EmptyTranslation);
    }

    #[rstest]
    #[case(r#"{"responseData":{"translatedText":"x"},"responseStatus":403,"responseDetails":"INVALID LANGUAGE PAIR"}"#, 403)]
    #[case(r#"{"responseData":{"translatedText":"x"},"responseStatus":"429"}"#, 429)]
    #[case(r#"{"responseData":{"translatedText":"x"},"responseStatus":"oops"}"#, 0)]
    fn non_200_payload_status_is_a_failure(#[case] body: &str, #[case] expected: u16) {
        let err = parse_translation(body.as_bytes()).expect_err("payload status");
        assert!(
            matches!(err, RemoteTranslationError::Status { status, .. } if status == expected),
            "unexpected error: {err:?}"
        );
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"responseData":{"translatedText":"x"}}"#)]
    fn undecodable_payloads(#[case] body: &str) {
        let err = parse_translation(body.as_bytes()).expect_err("decode");
        assert!(matches!(err, RemoteTranslationError::Decode { .. }));
    }

    #[rstest]
    #[case(StatusCode::GATEWAY_TIMEOUT, true)]
    #[case(StatusCode::REQUEST_TIMEOUT, true)]
    #[case(StatusCode::TOO_MANY_REQUESTS, false)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn http_statuses(#[case] status: StatusCode, #[case] is_timeout: bool) {
        let err = map_status_error(status, b"{\"error\": \"busy\"}");
        if is_timeout {
            assert!(matches!(err, RemoteTranslationError::Timeout { .. }));
        } else {
            assert_eq!(
                err,
                RemoteTranslationError::status(status.as_u16(), "{\"error\": \"busy\"}")
            );
        }
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "a".repeat(500);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 123);
        assert!(preview.ends_with("..."));
    }
}
