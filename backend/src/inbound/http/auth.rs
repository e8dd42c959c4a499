//! Bearer token extraction.
//!
//! Handlers that take an [`AuthenticatedUser`] argument only run once the
//! `Authorization: Bearer <token>` header has been verified by the account
//! query port.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId};

use super::state::HttpState;

const BEARER_SCHEME: &str = "bearer";
const CREDENTIALS_REJECTED: &str = "Could not validate credentials";

/// Identity of the caller behind a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl AuthenticatedUser {
    pub fn id(&self) -> UserId {
        self.0
    }
}

/// Pull the token out of an `Authorization` header value.
///
/// The scheme is case-insensitive; the token must be non-empty.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty()).then_some(token)
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_owned);
        let state = req.app_data::<web::Data<HttpState>>().cloned();

        Box::pin(async move {
            let state = state.ok_or_else(|| Error::internal("HTTP state not configured"))?;
            let token = token.ok_or_else(|| Error::unauthorized(CREDENTIALS_REJECTED))?;
            state
                .accounts_query
                .authenticate(&token)
                .await
                .map(AuthenticatedUser)
        })
    }
}
