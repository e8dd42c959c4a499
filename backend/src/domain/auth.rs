//! Authentication primitives: signup details, login credentials, password
//! hashes and issued access tokens.
//!
//! Inbound adapters build these from raw strings so services only ever see
//! validated values.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::{EmailAddress, UserId, UserName, UserValidationError};

/// Raised when signup or login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthValidationError {
    #[error(transparent)]
    Name(UserValidationError),
    #[error(transparent)]
    Email(UserValidationError),
    #[error("password must not be empty")]
    EmptyPassword,
}

impl AuthValidationError {
    /// Request field the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Email(_) => "email",
            Self::EmptyPassword => "password",
        }
    }
}

fn validate_password(password: &str) -> Result<Zeroizing<String>, AuthValidationError> {
    if password.is_empty() {
        return Err(AuthValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(password.to_owned()))
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is normalised by [`EmailAddress`].
/// - `password` is non-empty and keeps caller whitespace.
///
/// # Examples
/// ```
/// use flashcards::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("Ana@Example.com", "secret").unwrap();
/// assert_eq!(creds.email().as_ref(), "ana@example.com");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AuthValidationError> {
        let email = EmailAddress::new(email).map_err(AuthValidationError::Email)?;
        let password = validate_password(password)?;
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated signup payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    name: UserName,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl SignupDetails {
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AuthValidationError> {
        let name = UserName::new(name).map_err(AuthValidationError::Name)?;
        let email = EmailAddress::new(email).map_err(AuthValidationError::Email)?;
        let password = validate_password(password)?;
        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Encoded password hash in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Token type reported to clients.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Bearer token issued on signup and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

impl AccessToken {
    pub fn bearer(access_token: impl Into<String>, expires_in: i64) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: BEARER_TOKEN_TYPE.to_owned(),
            expires_in,
        }
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: UserId,
    /// Issued at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}
