//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, PasswordHash, User, UserId, UserName};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed user repository.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error, email: Option<&str>) -> UserPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::UniqueViolation { constraint } => match email {
            Some(email) => UserPersistenceError::duplicate_email(email),
            None => UserPersistenceError::query(format!(
                "unexpected unique violation on {}",
                constraint.as_deref().unwrap_or("unknown constraint")
            )),
        },
        DieselFailure::Query(message) => UserPersistenceError::query(message),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let invalid = |field: &str, err: &dyn std::fmt::Display| {
        warn!(user_id = %row.id, field, error = %err, "stored user failed validation");
        UserPersistenceError::query(format!("stored user has invalid {field}"))
    };
    let name = UserName::new(&row.name).map_err(|err| invalid("name", &err))?;
    let email = EmailAddress::new(&row.email).map_err(|err| invalid("email", &err))?;
    Ok(User::new(
        UserId::from_uuid(row.id),
        name,
        email,
        PasswordHash::new(row.password_hash),
        row.created_at,
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            id: *user.id.as_uuid(),
            name: user.name.as_ref(),
            email: user.email.as_ref(),
            password_hash: user.password_hash.as_str(),
        };
        let stored = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(user.email.as_ref())))?;
        row_to_user(stored)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;
        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .find(*id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;
        row.map(row_to_user).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Row mapping and error classification; queries run against PostgreSQL
    //! only in deployment.
    use super::*;
    use chrono::Utc;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use uuid::Uuid;

    fn row(name: &str, email: &str) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: "$argon2id$hash".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn rows_map_to_users() {
        let source = row("Ana", "ana@example.com");
        let id = source.id;
        let user = row_to_user(source).expect("valid row");
        assert_eq!(*user.id().as_uuid(), id);
        assert_eq!(user.email().as_ref(), "ana@example.com");
        assert_eq!(user.password_hash().as_str(), "$argon2id$hash");
    }

    #[test]
    fn invalid_rows_are_query_errors() {
        let err = row_to_user(row("", "ana@example.com")).expect_err("blank name");
        assert_eq!(err, UserPersistenceError::query("stored user has invalid name"));
    }

    #[test]
    fn unique_violation_on_insert_is_duplicate_email() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error, Some("ana@example.com")),
            UserPersistenceError::duplicate_email("ana@example.com")
        );
    }

    #[test]
    fn pool_failures_are_connection_errors() {
        assert_eq!(
            map_pool_error(PoolError::checkout("timed out")),
            UserPersistenceError::connection("timed out")
        );
    }
}
