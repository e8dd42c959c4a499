//! Flashcard handlers.
//!
//! ```text
//! GET /api/v1/flashcards
//! POST /api/v1/flashcards {"word":"study","direction":"en_to_pt"}
//! DELETE /api/v1/flashcards/1
//! POST /api/v1/flashcards/generate {"categories":["animals","colors"]}
//! ```
//!
//! Every route requires a bearer token.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Flashcard, FlashcardId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::schemas::{ErrorSchema, FlashcardSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    CATEGORIES_FIELD, DIRECTION_FIELD, WORD_FIELD, check_categories, parse_direction, parse_word,
};

/// Request body for `POST /api/v1/flashcards`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateFlashcardRequest {
    #[schema(example = "study")]
    pub word: String,
    /// `en_to_pt` (default) or `pt_to_en`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "en_to_pt")]
    pub direction: Option<String>,
}

/// Request body for `POST /api/v1/flashcards/generate`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct GenerateFlashcardsRequest {
    /// Up to 20 category names; unknown categories yield numbered
    /// placeholder words.
    #[serde(alias = "categorias")]
    #[schema(example = json!(["animals", "colors"]))]
    pub categories: Vec<String>,
}

/// List flashcards, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/flashcards",
    responses(
        (status = 200, description = "Flashcards, newest first", body = [FlashcardSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["flashcards"],
    operation_id = "listFlashcards"
)]
#[get("/flashcards")]
pub async fn list_flashcards(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<Flashcard>>> {
    let cards = state.flashcards_query.list_flashcards().await?;
    Ok(web::Json(cards))
}

/// Translate a word and store it as a flashcard.
#[utoipa::path(
    post,
    path = "/api/v1/flashcards",
    request_body = CreateFlashcardRequest,
    responses(
        (status = 200, description = "Created flashcard", body = FlashcardSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["flashcards"],
    operation_id = "createFlashcard"
)]
#[post("/flashcards")]
pub async fn create_flashcard(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    payload: web::Json<CreateFlashcardRequest>,
) -> ApiResult<web::Json<Flashcard>> {
    let CreateFlashcardRequest { word, direction } = payload.into_inner();
    let word = parse_word(WORD_FIELD, &word)?;
    let direction = parse_direction(DIRECTION_FIELD, direction.as_deref())?;
    let card = state.flashcards.create_flashcard(&word, direction).await?;
    Ok(web::Json(card))
}

/// Delete a flashcard by id.
#[utoipa::path(
    delete,
    path = "/api/v1/flashcards/{id}",
    params(("id" = i64, Path, description = "Flashcard identifier")),
    responses(
        (status = 200, description = "Flashcard deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["flashcards"],
    operation_id = "deleteFlashcard"
)]
#[delete("/flashcards/{id}")]
pub async fn delete_flashcard(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<FlashcardId>,
) -> ApiResult<HttpResponse> {
    state.flashcards.delete_flashcard(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Flashcard deleted" })))
}

/// Generate three flashcards per category.
#[utoipa::path(
    post,
    path = "/api/v1/flashcards/generate",
    request_body = GenerateFlashcardsRequest,
    responses(
        (status = 200, description = "Generated flashcards in category order", body = [FlashcardSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["flashcards"],
    operation_id = "generateFlashcards"
)]
#[post("/flashcards/generate")]
pub async fn generate_flashcards(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    payload: web::Json<GenerateFlashcardsRequest>,
) -> ApiResult<web::Json<Vec<Flashcard>>> {
    let categories = payload.into_inner().categories;
    check_categories(CATEGORIES_FIELD, &categories)?;
    let cards = state
        .flashcards
        .generate_for_categories(&categories)
        .await?;
    Ok(web::Json(cards))
}

#[cfg(test)]
mod tests;
