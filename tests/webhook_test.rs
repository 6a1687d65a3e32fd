//! Tests for the webhook over HTTP, driven in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use snowman::{router, AppState, Voice};
use snowman_core::{Dictionary, Engine};
use std::sync::Arc;
use tower::ServiceExt;

fn app(words: &[&str]) -> Router {
    let dictionary = Dictionary::seeded(words.iter().copied(), Some(5)).expect("corpus");
    let state = AppState::new(Engine::new(dictionary), Voice::new(Some(6)));
    router(Arc::new(state))
}

async fn post(app: &Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}

async fn post_raw(app: &Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = app(&["penguin"]);
    let request = Request::builder().uri("/health").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_welcome_has_no_canvas() {
    let app = app(&["penguin"]);
    let (status, body) = post(&app, json!({ "intent": "welcome" })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["speech"][0].as_str().expect("speech").starts_with("Welcome to Snowman!"));
    assert!(body["canvas"].is_null());
    assert!(body["session"].is_null());
}

#[tokio::test]
async fn test_start_then_guesses() {
    let app = app(&["penguin"]);

    let (status, body) = post(&app, json!({ "intent": "start" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["canvas"]["state"], "NEW_GAME");
    assert_eq!(body["canvas"]["revealed"], "_______");
    assert_eq!(body["session"]["secret_word"], "PENGUIN");

    let mut session = body["session"].clone();
    for (letter, expected) in [("e", "_E_____"), ("n", "_EN___N"), ("p", "PEN___N")] {
        let (status, body) = post(
            &app,
            json!({ "intent": "guess", "letter_or_word": letter, "session": session }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["canvas"]["state"], "CORRECT");
        assert_eq!(body["canvas"]["revealed"], expected);
        assert_eq!(body["canvas"]["incorrect_guesses"], 0);
        session = body["session"].clone();
    }
}

#[tokio::test]
async fn test_whole_word_wins() {
    let app = app(&["cat"]);
    let session = json!({ "secret_word": "CAT", "revealed": "___", "incorrect_guesses": 3 });

    let (_, body) = post(
        &app,
        json!({ "intent": "guess", "letter_or_word": "Cat", "session": session }),
    )
    .await;
    assert_eq!(body["canvas"]["state"], "WIN");
    assert_eq!(body["canvas"]["revealed"], "CAT");
    assert_eq!(body["speech"][0], "Let's see if CAT is there...");
    assert!(body["speech"][1].as_str().expect("speech").contains("That spells CAT!"));
}

#[tokio::test]
async fn test_fifth_miss_loses() {
    let app = app(&["cat"]);
    let session = json!({ "secret_word": "CAT", "revealed": "_A_", "incorrect_guesses": 4 });

    let (_, body) = post(
        &app,
        json!({ "intent": "guess", "letter_or_word": "dog", "session": session }),
    )
    .await;
    assert_eq!(body["canvas"]["state"], "LOSE");
    assert_eq!(body["canvas"]["incorrect_guesses"], 5);
    assert!(body["speech"][1].as_str().expect("speech").contains("The word was CAT."));
}

#[tokio::test]
async fn test_invalid_guess_reprompts_without_mutation() {
    let app = app(&["cat"]);
    let session = json!({ "secret_word": "CAT", "revealed": "C__", "incorrect_guesses": 1 });

    let (status, body) = post(
        &app,
        json!({ "intent": "guess", "letter_or_word": "3", "session": session }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["canvas"].is_null());
    assert_eq!(body["session"], session);
}

#[tokio::test]
async fn test_guess_after_game_over() {
    let app = app(&["cat"]);
    let session = json!({ "secret_word": "CAT", "revealed": "CAT", "incorrect_guesses": 0 });

    let (status, body) = post(
        &app,
        json!({ "intent": "guess", "letter_or_word": "c", "session": session }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["speech"][0].as_str().expect("speech").contains("over"));
    assert_eq!(body["session"], session);
}

#[tokio::test]
async fn test_guess_without_session() {
    let app = app(&["cat"]);
    let (status, body) = post(&app, json!({ "intent": "guess", "letter_or_word": "c" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["session"].is_null());
    assert!(body["speech"][0].as_str().expect("speech").contains("start"));
}

#[tokio::test]
async fn test_play_again_resets() {
    let app = app(&["cat"]);
    let session = json!({ "secret_word": "CAT", "revealed": "___", "incorrect_guesses": 5 });

    let (_, body) = post(&app, json!({ "intent": "play_again", "session": session })).await;
    assert_eq!(body["canvas"]["state"], "NEW_GAME");
    assert_eq!(body["session"]["incorrect_guesses"], 0);
    assert_eq!(body["session"]["revealed"], "___");
}

#[tokio::test]
async fn test_corrupt_session_is_bad_request() {
    let app = app(&["cat"]);
    let session = json!({ "secret_word": "CAT", "revealed": "DOG", "incorrect_guesses": 0 });

    let (status, body) = post(
        &app,
        json!({ "intent": "guess", "letter_or_word": "c", "session": session }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error").starts_with("Malformed request"));
}

#[tokio::test]
async fn test_unknown_intent_is_bad_request() {
    let app = app(&["cat"]);
    let (status, _) = post(&app, json!({ "intent": "dance" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app(&["cat"]);
    let (status, body) = post_raw(&app, "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
