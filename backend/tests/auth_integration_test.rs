//! Integration tests for login and signup

mod common;

use axum::http::StatusCode;
use common::{items_response, mutation_done, mutation_success, TestApp};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_operation(server: &MockServer, operation: &str, response: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains(operation))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_returns_user_without_password() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "UserForLogin",
        items_response(vec![json!({
            "id": "u1",
            "firstName": "Jane",
            "lastName": "Roe",
            "email": "jane@studio.test",
            "password": "hunter2-long"
        })]),
    )
    .await;

    let (status, body) = app
        .send(
            "POST",
            "/api/login",
            Some(json!({"email": "jane@studio.test", "password": "hunter2-long"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "jane@studio.test");
    assert_eq!(body["user"]["firstName"], "Jane");
    // The stored password never leaves the proxy
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_wrong_password_is_404() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "UserForLogin",
        items_response(vec![json!({
            "id": "u1",
            "firstName": "Jane",
            "lastName": "Roe",
            "email": "jane@studio.test",
            "password": "hunter2-long"
        })]),
    )
    .await;

    let (status, body) = app
        .send(
            "POST",
            "/api/login",
            Some(json!({"email": "jane@studio.test", "password": "wrong"})),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_unknown_email_is_the_same_404() {
    let app = TestApp::new().await;

    mock_operation(&app.upstream, "UserForLogin", items_response(vec![])).await;

    let (status, body) = app
        .send(
            "POST",
            "/api/login",
            Some(json!({"email": "nobody@studio.test", "password": "whatever"})),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_signup_creates_user_and_trainer_record() {
    let app = TestApp::new().await;

    mock_operation(&app.upstream, "UserByEmail", items_response(vec![])).await;
    mock_operation(
        &app.upstream,
        "CreateUser",
        mutation_success(json!({
            "id": "u9",
            "firstName": "Sam",
            "lastName": "Coach",
            "email": "sam@studio.test"
        })),
    )
    .await;
    mock_operation(
        &app.upstream,
        "CreateTrainer",
        mutation_success(json!({
            "id": "t1",
            "user": {"id": "u9", "firstName": "Sam", "lastName": "Coach", "email": "sam@studio.test"}
        })),
    )
    .await;

    let (status, body) = app
        .send(
            "POST",
            "/api/signup",
            Some(json!({
                "firstName": "Sam",
                "lastName": "Coach",
                "email": "sam@studio.test",
                "password": "long-enough-password"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["id"], "u9");

    let bodies = app.upstream_bodies().await;
    assert_eq!(bodies.len(), 3);
    assert!(bodies[1]["query"].as_str().unwrap().contains("CreateUser"));
    assert!(bodies[2]["query"].as_str().unwrap().contains("CreateTrainer"));
    assert_eq!(bodies[2]["variables"]["userId"], "u9");
}

#[tokio::test]
async fn test_signup_duplicate_email_is_rejected_before_creation() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "UserByEmail",
        items_response(vec![json!({
            "id": "u9",
            "firstName": "Sam",
            "lastName": "Coach",
            "email": "sam@studio.test"
        })]),
    )
    .await;

    let (status, body) = app
        .send(
            "POST",
            "/api/signup",
            Some(json!({
                "firstName": "Sam",
                "lastName": "Coach",
                "email": "sam@studio.test",
                "password": "long-enough-password"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");
    assert_eq!(app.upstream_request_count().await, 1);
}

#[tokio::test]
async fn test_signup_short_password_never_reaches_upstream() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/signup",
            Some(json!({
                "firstName": "Sam",
                "lastName": "Coach",
                "email": "sam@studio.test",
                "password": "short"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Password must be at least 8 characters");
    assert_eq!(app.upstream_request_count().await, 0);
}

#[tokio::test]
async fn test_signup_invalid_email_never_reaches_upstream() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/signup",
            Some(json!({
                "firstName": "Sam",
                "lastName": "Coach",
                "email": "not-an-email",
                "password": "long-enough-password"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");
    assert_eq!(app.upstream_request_count().await, 0);
}

/// A failed trainer step deletes the just-created user again.
#[tokio::test]
async fn test_signup_compensates_user_when_trainer_step_fails() {
    let app = TestApp::new().await;

    mock_operation(&app.upstream, "UserByEmail", items_response(vec![])).await;
    mock_operation(
        &app.upstream,
        "CreateUser",
        mutation_success(json!({
            "id": "u9",
            "firstName": "Sam",
            "lastName": "Coach",
            "email": "sam@studio.test"
        })),
    )
    .await;
    mock_operation(
        &app.upstream,
        "CreateTrainer",
        common::mutation_failure("trainer quota exceeded"),
    )
    .await;
    mock_operation(&app.upstream, "DeleteUser", mutation_done()).await;

    let (status, body) = app
        .send(
            "POST",
            "/api/signup",
            Some(json!({
                "firstName": "Sam",
                "lastName": "Coach",
                "email": "sam@studio.test",
                "password": "long-enough-password"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "trainer quota exceeded");

    let bodies = app.upstream_bodies().await;
    let compensation = bodies
        .iter()
        .find(|b| b["query"].as_str().unwrap_or("").contains("DeleteUser"))
        .expect("compensating user deletion was issued");
    assert_eq!(compensation["variables"]["id"], "u9");
}
