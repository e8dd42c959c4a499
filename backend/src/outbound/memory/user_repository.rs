//! Mutex-guarded user store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, User, UserId};

/// User repository keyed by id, enforcing unique emails on insert.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn users(&self) -> Result<MutexGuard<'_, HashMap<UserId, User>>, UserPersistenceError> {
        self.users
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut users = self.users()?;
        if users.values().any(|existing| existing.email() == &user.email) {
            return Err(UserPersistenceError::duplicate_email(user.email.as_ref()));
        }
        let stored = User::new(
            user.id,
            user.name.clone(),
            user.email.clone(),
            user.password_hash.clone(),
            self.clock.utc(),
        );
        users.insert(user.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .users()?
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.users()?.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PasswordHash, UserName};
    use mockable::DefaultClock;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            id: UserId::random(),
            name: UserName::new("Ana").expect("name"),
            email: EmailAddress::new(email).expect("email"),
            password_hash: PasswordHash::new("hash"),
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_email_and_id() {
        let repo = InMemoryUserRepository::new(Arc::new(DefaultClock));
        let stored = repo.insert(&new_user("ana@example.com")).await.expect("insert");

        let email = EmailAddress::new("ANA@example.com").expect("email");
        let by_email = repo.find_by_email(&email).await.expect("find");
        let by_id = repo.find_by_id(&stored.id()).await.expect("find");

        assert_eq!(by_email.as_ref(), Some(&stored));
        assert_eq!(by_id, Some(stored));
    }

    #[tokio::test]
    async fn duplicate_emails_are_rejected() {
        let repo = InMemoryUserRepository::new(Arc::new(DefaultClock));
        repo.insert(&new_user("ana@example.com")).await.expect("first insert");

        let err = repo
            .insert(&new_user("ana@example.com"))
            .await
            .expect_err("duplicate");

        assert_eq!(err, UserPersistenceError::duplicate_email("ana@example.com"));
    }
}
