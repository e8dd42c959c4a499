//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the schema wrappers standing in
//! for domain types, and the bearer token security scheme. Swagger UI serves
//! it in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::flashcards::{CreateFlashcardRequest, GenerateFlashcardsRequest};
use crate::inbound::http::schemas::{
    AccessTokenSchema, DirectionSchema, ErrorCodeSchema, ErrorSchema, FlashcardSchema,
    TranslationResultSchema, TranslationSourceSchema, UserProfileSchema,
};
use crate::inbound::http::users::{LoginRequest, SignupRequest};

/// Name of the bearer security scheme in the generated document.
pub const BEARER_SCHEME_NAME: &str = "BearerToken";

/// Adds the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME_NAME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /api/v1/signup or /api/v1/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Flashcards backend API",
        description = "Accounts, flashcards and English/Portuguese word translation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::current_user,
        crate::inbound::http::flashcards::list_flashcards,
        crate::inbound::http::flashcards::create_flashcard,
        crate::inbound::http::flashcards::delete_flashcard,
        crate::inbound::http::flashcards::generate_flashcards,
        crate::inbound::http::translation::translate_word,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::health::root,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        DirectionSchema,
        FlashcardSchema,
        TranslationSourceSchema,
        TranslationResultSchema,
        AccessTokenSchema,
        UserProfileSchema,
        SignupRequest,
        LoginRequest,
        CreateFlashcardRequest,
        GenerateFlashcardsRequest,
    )),
    tags(
        (name = "users", description = "Signup, login and the current user"),
        (name = "flashcards", description = "Flashcard deck operations"),
        (name = "translation", description = "Word lookups"),
        (name = "health", description = "Probes and banner")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::security::SecurityScheme;

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        let scheme = components
            .security_schemes
            .get(BEARER_SCHEME_NAME)
            .expect("bearer scheme");
        assert!(matches!(scheme, SecurityScheme::Http(_)));
    }

    #[test]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/signup",
            "/api/v1/login",
            "/api/v1/users/me",
            "/api/v1/flashcards",
            "/api/v1/flashcards/{id}",
            "/api/v1/flashcards/generate",
            "/api/v1/translation/{word}",
            "/health/ready",
            "/health/live",
            "/",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn domain_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        // utoipa replaces :: with . in schema names
        for name in ["crate.domain.Error", "crate.domain.Flashcard", "SignupRequest"] {
            assert!(schemas.contains_key(name), "missing {name}");
        }
    }
}
