//! Driving port for signup and login.
//!
//! Inbound adapters call this port with validated payloads and receive an
//! access token, without knowing how users are stored or passwords hashed.

use async_trait::async_trait;

use crate::domain::{AccessToken, Error, LoginCredentials, SignupDetails};

/// Fixed token returned by [`FixtureAccountCommand`].
pub const FIXTURE_ACCESS_TOKEN: &str = "fixture-access-token";

#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Register a new account and sign it in.
    async fn signup(&self, details: &SignupDetails) -> Result<AccessToken, Error>;

    /// Exchange credentials for a token.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error>;
}

/// Deterministic account command for handler tests.
///
/// Signup succeeds for any address except `taken@example.com`; login accepts
/// `ana@example.com` / `password`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountCommand;

#[async_trait]
impl AccountCommand for FixtureAccountCommand {
    async fn signup(&self, details: &SignupDetails) -> Result<AccessToken, Error> {
        if details.email().as_ref() == "taken@example.com" {
            return Err(Error::invalid_request("Email already registered"));
        }
        Ok(AccessToken::bearer(FIXTURE_ACCESS_TOKEN, 1800))
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error> {
        if credentials.email().as_ref() == "ana@example.com" && credentials.password() == "password"
        {
            Ok(AccessToken::bearer(FIXTURE_ACCESS_TOKEN, 1800))
        } else {
            Err(Error::unauthorized("Incorrect email or password"))
        }
    }
}
