//! Driving port for identifying the caller behind a bearer token.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, User, UserId};

use super::{FIXTURE_ACCESS_TOKEN, fixture_timestamp};

/// Public view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().as_ref().to_owned(),
            email: user.email().as_ref().to_owned(),
            created_at: user.created_at(),
        }
    }
}

#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Resolve a bearer token to the user it was issued for.
    async fn authenticate(&self, token: &str) -> Result<UserId, Error>;

    /// Profile of the given user.
    async fn current_user(&self, user_id: &UserId) -> Result<UserProfile, Error>;
}

/// Identifier of the single fixture account.
pub const FIXTURE_USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Fixture account query accepting only [`FIXTURE_ACCESS_TOKEN`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountQuery;

#[async_trait]
impl AccountQuery for FixtureAccountQuery {
    async fn authenticate(&self, token: &str) -> Result<UserId, Error> {
        if token != FIXTURE_ACCESS_TOKEN {
            return Err(Error::unauthorized("Could not validate credentials"));
        }
        UserId::new(FIXTURE_USER_ID)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
    }

    async fn current_user(&self, user_id: &UserId) -> Result<UserProfile, Error> {
        if user_id.to_string() != FIXTURE_USER_ID {
            return Err(Error::not_found("User not found"));
        }
        Ok(UserProfile {
            id: *user_id,
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            created_at: fixture_timestamp()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_authenticates_the_fixture_token() {
        let id = FixtureAccountQuery
            .authenticate(FIXTURE_ACCESS_TOKEN)
            .await
            .expect("fixture token");
        assert_eq!(id.to_string(), FIXTURE_USER_ID);

        let profile = FixtureAccountQuery.current_user(&id).await.expect("profile");
        assert_eq!(profile.email, "ana@example.com");
    }

    #[tokio::test]
    async fn fixture_rejects_other_tokens() {
        let err = FixtureAccountQuery
            .authenticate("forged")
            .await
            .expect_err("unknown token");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }
}
