// tests/quizzes_tests.rs

mod common;

use common::{QUESTIONS, TestApp, spawn_app};
use serde_json::{Value, json};

async fn next(app: &TestApp, previous: &[i64], category: Value) -> Value {
    let response = app
        .post_json(
            "/quizzes",
            json!({"previous_questions": previous, "quiz_category": category}),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    response.json().await.unwrap()
}

#[tokio::test]
async fn category_quiz_returns_a_question_of_that_category() {
    let app = spawn_app().await;

    let response = app
        .post_json(
            "/quizzes",
            json!({"previous_questions": [], "quiz_category": {"id": 2}}),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["category"], 2);
    assert_eq!(body["question"]["id"], 13);
}

#[tokio::test]
async fn previous_questions_are_skipped() {
    let app = spawn_app().await;

    let body = next(&app, &[13, 14, 14], json!({"id": 2, "type": "Art"})).await;
    assert_eq!(body["question"]["id"], 15);

    let body = next(&app, &[13, 14, 15, 16], json!({"id": 2})).await;
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn category_zero_means_any_category() {
    let app = spawn_app().await;

    let body = next(&app, &[], json!({"id": 0, "type": "click"})).await;
    assert_eq!(body["question"]["id"], 1);

    let body = next(&app, &[1, 2], json!({"id": 0})).await;
    assert_eq!(body["question"]["id"], 3);
}

#[tokio::test]
async fn string_category_id_is_accepted() {
    let app = spawn_app().await;

    let body = next(&app, &[], json!({"id": "3", "type": "Geography"})).await;

    assert_eq!(body["question"]["category"], 3);
}

#[tokio::test]
async fn playing_a_category_to_the_end_never_repeats() {
    let app = spawn_app().await;

    for category in 0..=6_i64 {
        let expected = QUESTIONS
            .iter()
            .filter(|(_, _, c, _)| category == 0 || *c == category)
            .count();

        let mut previous: Vec<i64> = Vec::new();
        loop {
            let body = next(&app, &previous, json!({"id": category})).await;
            if body["question"].is_null() {
                break;
            }
            let id = body["question"]["id"].as_i64().unwrap();
            assert!(!previous.contains(&id), "question {} served twice", id);
            if category != 0 {
                assert_eq!(body["question"]["category"], category);
            }
            previous.push(id);
        }

        assert_eq!(previous.len(), expected, "category {}", category);
    }
}

#[tokio::test]
async fn missing_quiz_category_is_unprocessable() {
    let app = spawn_app().await;

    let response = app
        .post_json("/quizzes", json!({"previous_questions": []}))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 422);
    assert_eq!(
        body["message"],
        "required field(s) missing from request body: quiz_category"
    );
}

#[tokio::test]
async fn missing_category_id_is_unprocessable() {
    let app = spawn_app().await;

    let response = app
        .post_json("/quizzes", json!({"quiz_category": {"type": "Science"}}))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "required field(s) missing from request body: quiz_category.id"
    );
}

#[tokio::test]
async fn malformed_quiz_body_is_a_bad_request() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/quizzes"))
        .body("previous_questions=1")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);
}
