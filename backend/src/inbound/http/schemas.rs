//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and register under the domain
//! type's path.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A dependency such as the database is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Flashcard not found")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "00000000-0000-0000-0000-000000000000")]
    trace_id: Option<String>,
    /// Supplementary error details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Direction`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Direction)]
pub enum DirectionSchema {
    /// English to Portuguese.
    #[schema(rename = "en_to_pt")]
    SourceToTarget,
    /// Portuguese to English.
    #[schema(rename = "pt_to_en")]
    TargetToSource,
}

/// OpenAPI schema for [`crate::domain::Flashcard`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Flashcard)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FlashcardSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "study")]
    word: String,
    #[schema(example = "estudar")]
    translation: String,
    direction: DirectionSchema,
    #[schema(rename = "createdAt", value_type = String, format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::TranslationSource`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TranslationSource)]
pub enum TranslationSourceSchema {
    /// Built-in dictionary.
    #[schema(rename = "lexicon")]
    Lexicon,
    /// Remote translation provider.
    #[schema(rename = "remote")]
    Remote,
    /// Provider unavailable; the word is its own translation.
    #[schema(rename = "identity")]
    Identity,
}

/// OpenAPI schema for [`crate::domain::TranslationResult`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TranslationResult)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TranslationResultSchema {
    #[schema(example = "study")]
    word: String,
    #[schema(example = "estudar")]
    translation: String,
    direction: DirectionSchema,
    source: TranslationSourceSchema,
}

/// OpenAPI schema for [`crate::domain::AccessToken`].
#[derive(ToSchema)]
#[schema(as = crate::domain::AccessToken)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AccessTokenSchema {
    /// Signed HS256 token for the `Authorization: Bearer` header.
    access_token: String,
    #[schema(example = "bearer")]
    token_type: String,
    /// Seconds until expiry.
    #[schema(example = 1800)]
    expires_in: i64,
}

/// OpenAPI schema for [`crate::domain::ports::UserProfile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::UserProfile)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserProfileSchema {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Ana")]
    name: String,
    #[schema(example = "ana@example.com")]
    email: String,
    #[schema(rename = "createdAt", value_type = String, format = DateTime)]
    created_at: String,
}
