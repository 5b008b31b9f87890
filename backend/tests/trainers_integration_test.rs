//! Integration tests for trainer routes and role resolution

mod common;

use axum::http::StatusCode;
use common::{items_response, mutation_done, mutation_failure, TestApp, ADMIN_EMAIL};
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

fn user_node(id: &str, first: &str, last: &str, email: &str) -> serde_json::Value {
    json!({"id": id, "firstName": first, "lastName": last, "email": email})
}

// ============================================================================
// Role resolution (getByEmail)
// ============================================================================

#[tokio::test]
async fn test_get_by_email_admin_shortcut_skips_upstream() {
    let app = TestApp::new().await;

    let (status, body) = app
        .get(&format!("/api/trainers/getByEmail?email={ADMIN_EMAIL}"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "admin");
    assert_eq!(body["clients"], json!([]));
    assert_eq!(app.upstream_request_count().await, 0);
}

#[tokio::test]
async fn test_get_by_email_admin_match_is_case_insensitive() {
    let app = TestApp::new().await;

    let (status, body) = app
        .get("/api/trainers/getByEmail?email=Admin@STUDIO.test")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "admin");
}

#[tokio::test]
async fn test_get_by_email_unknown_user_is_404() {
    let app = TestApp::new().await;
    mock_operation(&app.upstream, "UserByEmail", items_response(vec![])).await;

    let (status, body) = app
        .get("/api/trainers/getByEmail?email=nobody@studio.test")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

/// A user linked to both a client and a trainer record resolves as a
/// client: the client lookup runs first and short-circuits.
#[tokio::test]
async fn test_get_by_email_client_takes_precedence_over_trainer() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "UserByEmail",
        items_response(vec![user_node("u1", "Jane", "Roe", "jane@studio.test")]),
    )
    .await;
    mock_operation(
        &app.upstream,
        "ClientByUser",
        items_response(vec![json!({
            "id": "c1",
            "user": user_node("u1", "Jane", "Roe", "jane@studio.test"),
            "trainer": null
        })]),
    )
    .await;
    // Both tables contain the user; the trainer row must never be consulted.
    mock_operation(
        &app.upstream,
        "TrainerByUser",
        items_response(vec![json!({
            "id": "t1",
            "user": user_node("u1", "Jane", "Roe", "jane@studio.test")
        })]),
    )
    .await;

    let (status, body) = app
        .get("/api/trainers/getByEmail?email=jane@studio.test")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "client");
    assert_eq!(body["id"], "c1");
    assert_eq!(body["clients"], json!([]));
    // user lookup + client lookup only
    assert_eq!(app.upstream_request_count().await, 2);
}

#[tokio::test]
async fn test_get_by_email_trainer_view_rolls_up_clients() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "UserByEmail",
        items_response(vec![user_node("u9", "Sam", "Coach", "sam@studio.test")]),
    )
    .await;
    mock_operation(&app.upstream, "ClientByUser", items_response(vec![])).await;
    mock_operation(
        &app.upstream,
        "TrainerByUser",
        items_response(vec![json!({
            "id": "t1",
            "user": user_node("u9", "Sam", "Coach", "sam@studio.test"),
            "clients": common::connection(vec![json!({
                "id": "c1",
                "user": user_node("u1", "Jane", "Roe", "jane@studio.test"),
                "workouts": common::connection(vec![json!({"id": "w1"}), json!({"id": "w2"})])
            })])
        })]),
    )
    .await;

    let (status, body) = app
        .get("/api/trainers/getByEmail?email=sam@studio.test")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "trainer");
    assert_eq!(body["name"], "Sam Coach");
    assert_eq!(body["clientCount"], 1);
    assert_eq!(body["clients"][0]["workoutCount"], 2);
    assert_eq!(app.upstream_request_count().await, 3);
}

#[tokio::test]
async fn test_get_by_email_no_profile_is_404() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "UserByEmail",
        items_response(vec![user_node("u5", "No", "Role", "norole@studio.test")]),
    )
    .await;
    mock_operation(&app.upstream, "ClientByUser", items_response(vec![])).await;
    mock_operation(&app.upstream, "TrainerByUser", items_response(vec![])).await;

    let (status, body) = app
        .get("/api/trainers/getByEmail?email=norole@studio.test")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No client or trainer profile found for this user");
}

// ============================================================================
// CRUD
// ============================================================================

#[tokio::test]
async fn test_get_all_reshapes_trainers() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "TrainersAll",
        items_response(vec![json!({
            "id": "t1",
            "user": user_node("u9", "Sam", "Coach", "sam@studio.test"),
            "clients": common::connection(vec![])
        })]),
    )
    .await;

    let (status, body) = app.get("/api/trainers/getAll").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trainers"][0]["name"], "Sam Coach");
    assert_eq!(body["trainers"][0]["clientCount"], 0);
    // Schema/UI mismatch fields are carried but empty
    assert_eq!(body["trainers"][0]["phone"], "");
    assert_eq!(body["trainers"][0]["rating"], 0.0);
}

#[tokio::test]
async fn test_get_by_id_missing_trainer_is_404() {
    let app = TestApp::new().await;
    mock_operation(&app.upstream, "TrainerById", items_response(vec![])).await;

    let (status, body) = app.get("/api/trainers/getById?id=missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Trainer not found");
}

#[tokio::test]
async fn test_update_merges_unset_fields_from_current_record() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "TrainerById",
        items_response(vec![json!({
            "id": "t1",
            "user": user_node("u9", "Sam", "Coach", "sam@studio.test")
        })]),
    )
    .await;
    mock_operation(
        &app.upstream,
        "UpdateUser",
        common::mutation_success(user_node("u9", "Samuel", "Coach", "sam@studio.test")),
    )
    .await;

    let (status, body) = app
        .send(
            "PUT",
            "/api/trainers/update",
            Some(json!({"id": "t1", "firstName": "Samuel"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trainer"]["name"], "Samuel Coach");

    // The mutation must carry the merged last name and email, not nulls
    let bodies = app.upstream_bodies().await;
    let update = bodies
        .iter()
        .find(|b| b["query"].as_str().unwrap_or("").contains("UpdateUser"))
        .expect("UpdateUser was called");
    assert_eq!(update["variables"]["lastName"], "Coach");
    assert_eq!(update["variables"]["email"], "sam@studio.test");
}

/// Delete cascade with no linked user: exactly two upstream calls, and
/// never a user deletion.
#[tokio::test]
async fn test_delete_without_linked_user_skips_user_deletion() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "TrainerById",
        items_response(vec![json!({"id": "t1", "user": null})]),
    )
    .await;
    mock_operation(&app.upstream, "DeleteTrainer", mutation_done()).await;

    let (status, body) = app
        .send("DELETE", "/api/trainers/delete", Some(json!({"id": "t1"})))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(app.upstream_request_count().await, 2);

    let bodies = app.upstream_bodies().await;
    assert!(bodies
        .iter()
        .all(|b| !b["query"].as_str().unwrap_or("").contains("DeleteUser")));
}

/// A failed user deletion is a warning on a 200, never a failure.
#[tokio::test]
async fn test_delete_secondary_failure_warns_but_succeeds() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "TrainerById",
        items_response(vec![json!({
            "id": "t1",
            "user": user_node("u9", "Sam", "Coach", "sam@studio.test")
        })]),
    )
    .await;
    mock_operation(&app.upstream, "DeleteTrainer", mutation_done()).await;
    mock_operation(
        &app.upstream,
        "DeleteUser",
        mutation_failure("user row is referenced elsewhere"),
    )
    .await;

    let (status, body) = app
        .send("DELETE", "/api/trainers/delete", Some(json!({"id": "t1"})))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["warning"].as_str().unwrap().contains("u9"));
}

/// A failed trainer deletion is the primary failure and propagates as 400.
#[tokio::test]
async fn test_delete_primary_failure_propagates() {
    let app = TestApp::new().await;

    mock_operation(
        &app.upstream,
        "TrainerById",
        items_response(vec![json!({
            "id": "t1",
            "user": user_node("u9", "Sam", "Coach", "sam@studio.test")
        })]),
    )
    .await;
    mock_operation(
        &app.upstream,
        "DeleteTrainer",
        mutation_failure("trainer has active sessions"),
    )
    .await;

    let (status, body) = app
        .send("DELETE", "/api/trainers/delete", Some(json!({"id": "t1"})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "trainer has active sessions");
}
