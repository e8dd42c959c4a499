//! HS256 JSON Web Tokens signed with HMAC-SHA256.
//!
//! Tokens are the compact `header.claims.signature` form, each segment
//! base64url without padding. Only the `HS256` algorithm is accepted.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::domain::ports::{TokenCodec, TokenError};
use crate::domain::{AccessToken, TokenClaims, UserId};

type HmacSha256 = Hmac<Sha256>;

/// Lifetime of issued tokens unless configured otherwise.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Shortest signing secret accepted for release builds.
pub const MIN_SECRET_LEN: usize = 32;

const ALGORITHM: &str = "HS256";
const TOKEN_TYPE: &str = "JWT";

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// Token codec signing claims with a shared secret.
pub struct Hs256TokenCodec {
    secret: Zeroizing<Vec<u8>>,
    ttl_secs: i64,
    clock: Arc<dyn Clock>,
}

impl Hs256TokenCodec {
    pub fn new(secret: Zeroizing<Vec<u8>>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret,
            ttl_secs: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
            clock,
        }
    }

    fn mac(&self) -> Result<HmacSha256, TokenError> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| TokenError::encode(format!("invalid signing key: {err}")))
    }

    fn sign(&self, signing_input: &str) -> Result<String, TokenError> {
        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let bytes = serde_json::to_vec(value).map_err(|err| TokenError::encode(err.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|err| TokenError::malformed(err.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|err| TokenError::malformed(err.to_string()))
}

fn split_token(token: &str) -> Result<(&str, &str, &str), TokenError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(claims), Some(signature), None)
            if !header.is_empty() && !claims.is_empty() && !signature.is_empty() =>
        {
            Ok((header, claims, signature))
        }
        _ => Err(TokenError::malformed("expected three non-empty segments")),
    }
}

impl TokenCodec for Hs256TokenCodec {
    fn issue(&self, user_id: &UserId) -> Result<AccessToken, TokenError> {
        let iat = self.clock.utc().timestamp();
        let claims = TokenClaims {
            sub: *user_id,
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };
        let header = Header {
            alg: ALGORITHM.to_owned(),
            typ: TOKEN_TYPE.to_owned(),
        };
        let signing_input = format!("{}.{}", encode_segment(&header)?, encode_segment(&claims)?);
        let signature = self.sign(&signing_input)?;
        Ok(AccessToken::bearer(
            format!("{signing_input}.{signature}"),
            self.ttl_secs,
        ))
    }

    fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let (header_part, claims_part, signature_part) = split_token(token)?;

        let header: Header = decode_segment(header_part)?;
        if header.alg != ALGORITHM {
            return Err(TokenError::unsupported_algorithm(header.alg));
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_part)
            .map_err(|err| TokenError::malformed(err.to_string()))?;
        let mut mac = self.mac()?;
        mac.update(header_part.as_bytes());
        mac.update(b".");
        mac.update(claims_part.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::invalid_signature())?;

        let claims: TokenClaims = decode_segment(claims_part)?;
        if self.clock.utc().timestamp() >= claims.exp {
            return Err(TokenError::expired());
        }
        Ok(claims.sub)
    }
}
