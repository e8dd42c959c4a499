//! Tests for the account service.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockPasswordHasher, MockTokenCodec, MockUserRepository};
use crate::domain::{EmailAddress, ErrorCode, PasswordHash, UserName};

type Service = AccountService<MockUserRepository, MockPasswordHasher, MockTokenCodec>;

fn make_service(
    users: MockUserRepository,
    hasher: MockPasswordHasher,
    tokens: MockTokenCodec,
) -> Service {
    AccountService::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens))
}

#[fixture]
fn stored_user() -> User {
    User::new(
        UserId::random(),
        UserName::new("Ana").expect("name"),
        EmailAddress::new("ana@example.com").expect("email"),
        PasswordHash::new("$argon2id$stored"),
        Utc::now(),
    )
}

fn token_codec_issuing(token: &'static str) -> MockTokenCodec {
    let mut tokens = MockTokenCodec::new();
    tokens
        .expect_issue()
        .returning(move |_| Ok(AccessToken::bearer(token, 1800)));
    tokens
}

fn signup_details() -> SignupDetails {
    SignupDetails::try_from_parts("Ana", "Ana@Example.com", "hunter2").expect("signup shape")
}

#[rstest]
#[tokio::test]
async fn signup_hashes_inserts_and_issues_a_token(stored_user: User) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().times(1).return_once(|_| Ok(None));
    let returned = stored_user.clone();
    users
        .expect_insert()
        .withf(|user| {
            user.email.as_ref() == "ana@example.com" && user.password_hash.as_str() == "hashed"
        })
        .times(1)
        .return_once(move |_| Ok(returned));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .with(eq("hunter2"))
        .times(1)
        .returning(|_| Ok(PasswordHash::new("hashed")));

    let token = make_service(users, hasher, token_codec_issuing("signed"))
        .signup(&signup_details())
        .await
        .expect("signup succeeds");

    assert_eq!(token.access_token, "signed");
    assert_eq!(token.token_type, "bearer");
}

#[rstest]
#[tokio::test]
async fn signup_rejects_a_registered_email(stored_user: User) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(move |_| Ok(Some(stored_user)));
    users.expect_insert().times(0);
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().times(0);

    let err = make_service(users, hasher, MockTokenCodec::new())
        .signup(&signup_details())
        .await
        .expect_err("duplicate email");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "Email already registered");
}

#[tokio::test]
async fn signup_maps_a_lost_insert_race_to_duplicate_email() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().return_once(|_| Ok(None));
    users
        .expect_insert()
        .return_once(|_| Err(UserPersistenceError::duplicate_email("ana@example.com")));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok(PasswordHash::new("hashed")));

    let err = make_service(users, hasher, MockTokenCodec::new())
        .signup(&signup_details())
        .await
        .expect_err("duplicate email");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "Email already registered");
}

#[rstest]
#[tokio::test]
async fn login_issues_a_token_for_matching_passwords(stored_user: User) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(move |_| Ok(Some(stored_user)));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().returning(|_, _| Ok(true));
    let creds = LoginCredentials::try_from_parts("ana@example.com", "hunter2").expect("creds");

    let token = make_service(users, hasher, token_codec_issuing("signed"))
        .login(&creds)
        .await
        .expect("login succeeds");

    assert_eq!(token.access_token, "signed");
}

#[rstest]
#[case(true, false)]
#[case(false, true)]
#[tokio::test]
async fn login_failures_share_one_message(
    stored_user: User,
    #[case] user_exists: bool,
    #[case] password_matches: bool,
) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(move |_| Ok(user_exists.then_some(stored_user)));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .returning(move |_, _| Ok(password_matches));
    let creds = LoginCredentials::try_from_parts("ana@example.com", "nope").expect("creds");

    let err = make_service(users, hasher, MockTokenCodec::new())
        .login(&creds)
        .await
        .expect_err("login fails");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), "Incorrect email or password");
}

#[tokio::test]
async fn login_surfaces_unavailable_storage() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(|_| Err(UserPersistenceError::connection("pool timeout")));
    let creds = LoginCredentials::try_from_parts("ana@example.com", "pw").expect("creds");

    let err = make_service(users, MockPasswordHasher::new(), MockTokenCodec::new())
        .login(&creds)
        .await
        .expect_err("storage down");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn authenticate_accepts_tokens_for_existing_users(stored_user: User) {
    let id = stored_user.id();
    let mut tokens = MockTokenCodec::new();
    tokens
        .expect_verify()
        .with(eq("good"))
        .returning(move |_| Ok(id));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(stored_user)));

    let service = make_service(users, MockPasswordHasher::new(), tokens);

    assert_eq!(service.authenticate("good").await.expect("valid token"), id);
}

#[rstest]
#[case(TokenError::expired())]
#[case(TokenError::invalid_signature())]
#[case(TokenError::malformed("two segments"))]
#[tokio::test]
async fn authenticate_rejects_bad_tokens(#[case] error: TokenError) {
    let mut tokens = MockTokenCodec::new();
    tokens
        .expect_verify()
        .return_once(move |_| Err(error));
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(0);

    let err = make_service(users, MockPasswordHasher::new(), tokens)
        .authenticate("bad")
        .await
        .expect_err("bad token");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
}

#[tokio::test]
async fn authenticate_rejects_tokens_for_deleted_users() {
    let id = UserId::random();
    let mut tokens = MockTokenCodec::new();
    tokens.expect_verify().return_once(move |_| Ok(id));
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().return_once(|_| Ok(None));

    let err = make_service(users, MockPasswordHasher::new(), tokens)
        .authenticate("orphan")
        .await
        .expect_err("user gone");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
}

#[rstest]
#[tokio::test]
async fn current_user_returns_the_public_profile(stored_user: User) {
    let id = stored_user.id();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(stored_user)));

    let profile = make_service(users, MockPasswordHasher::new(), MockTokenCodec::new())
        .current_user(&id)
        .await
        .expect("profile");

    assert_eq!(profile.id, id);
    assert_eq!(profile.name, "Ana");
    assert_eq!(profile.email, "ana@example.com");
}
