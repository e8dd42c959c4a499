//! Handler tests for flashcard endpoints backed by fixture ports.

use super::*;
use crate::domain::ports::FIXTURE_ACCESS_TOKEN;
use crate::inbound::http::test_utils::test_app;
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::Value;

fn bearer() -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {FIXTURE_ACCESS_TOKEN}"))
}

async fn send(request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app()).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/api/v1/flashcards"))]
#[case(actix_test::TestRequest::post().uri("/api/v1/flashcards").set_json(json!({"word": "study"})))]
#[case(actix_test::TestRequest::delete().uri("/api/v1/flashcards/1"))]
#[case(actix_test::TestRequest::post().uri("/api/v1/flashcards/generate").set_json(json!({"categories": ["animals"]})))]
#[actix_web::test]
async fn every_route_requires_a_token(#[case] request: actix_test::TestRequest) {
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Could not validate credentials");
}

#[actix_web::test]
async fn list_returns_cards_in_camel_case() {
    let (status, body) = send(
        actix_test::TestRequest::get()
            .uri("/api/v1/flashcards")
            .insert_header(bearer()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let first = &body[0];
    assert_eq!(first["word"], "study");
    assert_eq!(first["translation"], "estudar");
    assert_eq!(first["direction"], "en_to_pt");
    assert!(first.get("createdAt").is_some());
}

#[rstest]
#[case(json!({"word": "Study"}), "Study", "estudar", "en_to_pt")]
#[case(json!({"word": "casa", "direction": "pt_to_en"}), "casa", "house", "pt_to_en")]
#[actix_web::test]
async fn create_translates_the_word(
    #[case] payload: Value,
    #[case] word: &str,
    #[case] translation: &str,
    #[case] direction: &str,
) {
    let (status, body) = send(
        actix_test::TestRequest::post()
            .uri("/api/v1/flashcards")
            .insert_header(bearer())
            .set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], word);
    assert_eq!(body["translation"], translation);
    assert_eq!(body["direction"], direction);
}

#[rstest]
#[case(json!({"word": "  "}), "word", "empty_word")]
#[case(json!({"word": "cat", "direction": "sideways"}), "direction", "invalid_direction")]
#[actix_web::test]
async fn create_rejects_invalid_input(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let (status, body) = send(
        actix_test::TestRequest::post()
            .uri("/api/v1/flashcards")
            .insert_header(bearer())
            .set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[case(1, StatusCode::OK)]
#[case(42, StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn delete_outcomes(#[case] id: i64, #[case] expected: StatusCode) {
    let (status, body) = send(
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/flashcards/{id}"))
            .insert_header(bearer()),
    )
    .await;
    assert_eq!(status, expected);
    if expected == StatusCode::OK {
        assert_eq!(body["message"], "Flashcard deleted");
    } else {
        assert_eq!(body["message"], "Flashcard not found");
    }
}

#[rstest]
#[case("categories")]
#[case("categorias")]
#[actix_web::test]
async fn generate_accepts_both_field_names(#[case] key: &str) {
    let (status, body) = send(
        actix_test::TestRequest::post()
            .uri("/api/v1/flashcards/generate")
            .insert_header(bearer())
            .set_json(json!({ key: ["animals", "doesnotexist"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let words: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|card| card["word"].as_str())
        .collect();
    assert_eq!(
        words,
        ["cat", "dog", "bird", "doesnotexist1", "doesnotexist2", "doesnotexist3"]
    );
}

#[rstest]
#[case(json!({"categories": vec!["animals"; 21]}), "too_many_categories")]
#[case(json!({"categorias": ["animals", "q".repeat(100)]}), "category_too_long")]
#[actix_web::test]
async fn generate_rejects_oversized_requests(#[case] payload: Value, #[case] code: &str) {
    let (status, body) = send(
        actix_test::TestRequest::post()
            .uri("/api/v1/flashcards/generate")
            .insert_header(bearer())
            .set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "categories");
    assert_eq!(body["details"]["code"], code);
}
