//! Account handlers.
//!
//! ```text
//! POST /api/v1/signup {"name":"Ana","email":"ana@example.com","password":"secret"}
//! POST /api/v1/login {"email":"ana@example.com","password":"secret"}
//! GET /api/v1/users/me
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::UserProfile;
use crate::domain::{
    AccessToken, AuthValidationError, Error, LoginCredentials, SignupDetails, UserValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::schemas::{AccessTokenSchema, ErrorSchema, UserProfileSchema};
use crate::inbound::http::state::HttpState;

/// Signup request body for `POST /api/v1/signup`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignupRequest {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    pub password: String,
}

impl TryFrom<SignupRequest> for SignupDetails {
    type Error = AuthValidationError;

    fn try_from(value: SignupRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.name, &value.email, &value.password)
    }
}

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ana@example.com")]
    pub email: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = AuthValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

fn validation_code(err: &AuthValidationError) -> &'static str {
    match err {
        AuthValidationError::EmptyPassword => "empty_password",
        AuthValidationError::Name(inner) | AuthValidationError::Email(inner) => match inner {
            UserValidationError::EmptyName => "empty_name",
            UserValidationError::NameTooLong { .. } => "name_too_long",
            UserValidationError::EmptyEmail => "empty_email",
            UserValidationError::EmailTooLong { .. } => "email_too_long",
            UserValidationError::InvalidEmail => "invalid_email",
            UserValidationError::InvalidId => "invalid_id",
        },
    }
}

fn map_auth_validation_error(err: AuthValidationError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": validation_code(&err) }))
}

/// Register an account and return an access token.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = AccessTokenSchema),
        (status = 400, description = "Invalid request or email already registered", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<web::Json<AccessToken>> {
    let details =
        SignupDetails::try_from(payload.into_inner()).map_err(map_auth_validation_error)?;
    let token = state.accounts.signup(&details).await?;
    Ok(web::Json(token))
}

/// Exchange credentials for an access token.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AccessTokenSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Incorrect email or password", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<AccessToken>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_auth_validation_error)?;
    let token = state.accounts.login(&credentials).await?;
    Ok(web::Json(token))
}

/// Profile of the authenticated caller.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Current user", body = UserProfileSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
) -> ApiResult<web::Json<UserProfile>> {
    let profile = state.accounts_query.current_user(&user.id()).await?;
    Ok(web::Json(profile))
}
