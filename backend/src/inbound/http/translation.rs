//! Translation lookup handler.
//!
//! ```text
//! GET /api/v1/translation/study?direction=en_to_pt
//! ```
//!
//! Public: looking a word up persists nothing.

use actix_web::{get, web};
use serde::Deserialize;

use crate::domain::TranslationResult;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, TranslationResultSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{DIRECTION_FIELD, WORD_FIELD, parse_direction, parse_word};

/// Query string for the translation lookup.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TranslationParams {
    /// `en_to_pt` (default) or `pt_to_en`.
    pub direction: Option<String>,
}

/// Translate one word without storing it.
#[utoipa::path(
    get,
    path = "/api/v1/translation/{word}",
    params(
        ("word" = String, Path, description = "Word to translate"),
        TranslationParams
    ),
    responses(
        (status = 200, description = "Translation", body = TranslationResultSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["translation"],
    operation_id = "translateWord",
    security([])
)]
#[get("/translation/{word}")]
pub async fn translate_word(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<TranslationParams>,
) -> ApiResult<web::Json<TranslationResult>> {
    let word = parse_word(WORD_FIELD, &path.into_inner())?;
    let direction = parse_direction(DIRECTION_FIELD, query.direction.as_deref())?;
    let result = state.translations.translate(&word, direction).await;
    Ok(web::Json(result))
}
