//! Account domain service: signup, login and bearer-token identification.
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    AccountCommand, AccountQuery, PasswordHashError, PasswordHasher, TokenCodec, TokenError,
    UserPersistenceError, UserProfile, UserRepository,
};
use crate::domain::{
    AccessToken, Error, LoginCredentials, NewUser, SignupDetails, User, UserId,
};

const EMAIL_TAKEN: &str = "Email already registered";
const BAD_CREDENTIALS: &str = "Incorrect email or password";
const BAD_TOKEN: &str = "Could not validate credentials";

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { .. } => Error::invalid_request(EMAIL_TAKEN),
    }
}

fn map_password_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

/// Account use-cases over the user repository, password hasher and token
/// codec ports.
pub struct AccountService<U: ?Sized, H: ?Sized, T: ?Sized> {
    users: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<U: ?Sized, H: ?Sized, T: ?Sized> Clone for AccountService<U, H, T> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            hasher: Arc::clone(&self.hasher),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<U, H, T> AccountService<U, H, T>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    T: TokenCodec + ?Sized,
{
    pub fn new(users: Arc<U>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    fn issue_token(&self, user: &User) -> Result<AccessToken, Error> {
        self.tokens
            .issue(&user.id())
            .map_err(|err| Error::internal(err.to_string()))
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_persistence_error)
    }
}

#[async_trait]
impl<U, H, T> AccountCommand for AccountService<U, H, T>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    T: TokenCodec + ?Sized,
{
    async fn signup(&self, details: &SignupDetails) -> Result<AccessToken, Error> {
        let existing = self
            .users
            .find_by_email(details.email())
            .await
            .map_err(map_user_persistence_error)?;
        if existing.is_some() {
            return Err(Error::invalid_request(EMAIL_TAKEN));
        }

        let password_hash = self
            .hasher
            .hash(details.password())
            .await
            .map_err(map_password_hash_error)?;
        let new_user = NewUser {
            id: UserId::random(),
            name: details.name().clone(),
            email: details.email().clone(),
            password_hash,
        };
        // A concurrent signup can still win the race; the unique index turns
        // that into DuplicateEmail.
        let user = self
            .users
            .insert(&new_user)
            .await
            .map_err(map_user_persistence_error)?;
        info!(user_id = %user.id(), "account created");
        self.issue_token(&user)
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error> {
        let Some(user) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_persistence_error)?
        else {
            return Err(Error::unauthorized(BAD_CREDENTIALS));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(map_password_hash_error)?;
        if !matches {
            return Err(Error::unauthorized(BAD_CREDENTIALS));
        }
        self.issue_token(&user)
    }
}

#[async_trait]
impl<U, H, T> AccountQuery for AccountService<U, H, T>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    T: TokenCodec + ?Sized,
{
    async fn authenticate(&self, token: &str) -> Result<UserId, Error> {
        let user_id = self.tokens.verify(token).map_err(|err: TokenError| {
            warn!(error = %err, "rejected bearer token");
            Error::unauthorized(BAD_TOKEN)
        })?;
        match self.find_user(&user_id).await? {
            Some(user) => Ok(user.id()),
            None => Err(Error::unauthorized(BAD_TOKEN)),
        }
    }

    async fn current_user(&self, user_id: &UserId) -> Result<UserProfile, Error> {
        self.find_user(user_id)
            .await?
            .map(|user| UserProfile::from(&user))
            .ok_or_else(|| Error::unauthorized(BAD_TOKEN))
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
