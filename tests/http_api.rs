//! HTTP surface integration tests.
//!
//! Each test drives the real router in process with the in-memory store,
//! covering the documented method/path/status contract end to end.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode, header};
use chrono::{DateTime, FixedOffset};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use taskdeck::http::{TaskResponse, router};
use taskdeck::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use tower::ServiceExt;

#[fixture]
fn app() -> Router {
    router(TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    ))
}

/// Sends one request to the router and returns the status with the raw
/// response body.
async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> eyre::Result<(StatusCode, Bytes)> {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok((status, bytes))
}

fn parse_task(bytes: &Bytes) -> eyre::Result<TaskResponse> {
    Ok(serde_json::from_slice(bytes)?)
}

fn parse_json(bytes: &Bytes) -> eyre::Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

fn parse_timestamp(value: &str) -> eyre::Result<DateTime<FixedOffset>> {
    Ok(DateTime::parse_from_rfc3339(value)?)
}

async fn create_task(app: &Router, payload: Value) -> eyre::Result<TaskResponse> {
    let (status, bytes) = send(app, Method::POST, "/api/tasks/", Some(payload)).await?;
    eyre::ensure!(status == StatusCode::CREATED, "create returned {status}");
    parse_task(&bytes)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_on_empty_store_returns_empty_array(app: Router) {
    let (status, bytes) = send(&app, Method::GET, "/api/tasks/", None)
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse_json(&bytes).expect("body should be JSON"),
        json!([])
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_created_task_with_generated_fields(app: Router) {
    let (status, bytes) = send(
        &app,
        Method::POST,
        "/api/tasks/",
        Some(json!({
            "title": "Test Task",
            "description": "Test Description",
            "is_completed": false,
        })),
    )
    .await
    .expect("request should succeed");

    assert_eq!(status, StatusCode::CREATED);
    let task = parse_task(&bytes).expect("body should be a task");
    assert!(task.id >= 1);
    assert_eq!(task.title, "Test Task");
    assert_eq!(task.description, "Test Description");
    assert!(!task.is_completed);
    assert_eq!(task.created_at, task.updated_at);
    parse_timestamp(&task.created_at).expect("created_at should be RFC 3339");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_applies_defaults_for_optional_fields(app: Router) {
    let task = create_task(&app, json!({ "title": "Bare minimum" }))
        .await
        .expect("creation should succeed");

    assert_eq!(task.description, "");
    assert!(!task.is_completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_missing_title_returns_field_error_map(app: Router) {
    let (status, bytes) = send(
        &app,
        Method::POST,
        "/api/tasks/",
        Some(json!({ "description": "no title" })),
    )
    .await
    .expect("request should succeed");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_json(&bytes).expect("body should be JSON"),
        json!({ "title": ["This field is required."] })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_blank_title_stores_nothing(app: Router) {
    let (status, bytes) = send(
        &app,
        Method::POST,
        "/api/tasks/",
        Some(json!({ "title": "   " })),
    )
    .await
    .expect("request should succeed");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_json(&bytes).expect("body should be JSON"),
        json!({ "title": ["This field may not be blank."] })
    );

    let (list_status, list_bytes) = send(&app, Method::GET, "/api/tasks/", None)
        .await
        .expect("request should succeed");
    assert_eq!(list_status, StatusCode::OK);
    assert_eq!(
        parse_json(&list_bytes).expect("body should be JSON"),
        json!([])
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_type_mismatches_reports_each_field(app: Router) {
    let (status, bytes) = send(
        &app,
        Method::POST,
        "/api/tasks/",
        Some(json!({ "title": 7, "is_completed": "yes" })),
    )
    .await
    .expect("request should succeed");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_json(&bytes).expect("body should be JSON"),
        json!({
            "is_completed": ["Expected a boolean value."],
            "title": ["Expected a string value."],
        })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_non_object_body_is_rejected(app: Router) {
    let (status, bytes) = send(
        &app,
        Method::POST,
        "/api/tasks/",
        Some(json!("just a string")),
    )
    .await
    .expect("request should succeed");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_json(&bytes).expect("body should be JSON"),
        json!({ "error": "request body must be a JSON object" })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn retrieve_returns_stored_task(app: Router) {
    let created = create_task(&app, json!({ "title": "Fetch me" }))
        .await
        .expect("creation should succeed");

    let (status, bytes) = send(
        &app,
        Method::GET,
        &format!("/api/tasks/{}/", created.id),
        None,
    )
    .await
    .expect("request should succeed");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_task(&bytes).expect("body should be a task"), created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn retrieve_missing_id_returns_not_found(app: Router) {
    let (status, bytes) = send(&app, Method::GET, "/api/tasks/999/", None)
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        parse_json(&bytes).expect("body should be JSON"),
        json!({ "error": "task 999 not found" })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn retrieve_non_numeric_id_returns_not_found(app: Router) {
    let (status, _bytes) = send(&app, Method::GET, "/api/tasks/abc/", None)
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_is_reflected_on_subsequent_retrieve(app: Router) {
    let created = create_task(
        &app,
        json!({
            "title": "Test Task",
            "description": "Test Description",
            "is_completed": false,
        }),
    )
    .await
    .expect("creation should succeed");

    let (status, bytes) = send(
        &app,
        Method::PUT,
        &format!("/api/tasks/{}/", created.id),
        Some(json!({
            "title": "Updated Task",
            "description": "Updated Description",
            "is_completed": true,
        })),
    )
    .await
    .expect("request should succeed");
    assert_eq!(status, StatusCode::OK);

    let (get_status, get_bytes) = send(
        &app,
        Method::GET,
        &format!("/api/tasks/{}/", created.id),
        None,
    )
    .await
    .expect("request should succeed");
    assert_eq!(get_status, StatusCode::OK);

    let fetched = parse_task(&get_bytes).expect("body should be a task");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Updated Task");
    assert_eq!(fetched.description, "Updated Description");
    assert!(fetched.is_completed);
    assert_eq!(fetched.created_at, created.created_at);

    let prior = parse_timestamp(&created.updated_at).expect("valid timestamp");
    let current = parse_timestamp(&fetched.updated_at).expect("valid timestamp");
    assert!(current >= prior);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_id_returns_not_found(app: Router) {
    let (status, _bytes) = send(
        &app,
        Method::PUT,
        "/api/tasks/999/",
        Some(json!({ "title": "Ghost" })),
    )
    .await
    .expect("request should succeed");

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_blank_title_preserves_record(app: Router) {
    let created = create_task(&app, json!({ "title": "Keep me" }))
        .await
        .expect("creation should succeed");

    let (status, _bytes) = send(
        &app,
        Method::PUT,
        &format!("/api/tasks/{}/", created.id),
        Some(json!({ "title": "" })),
    )
    .await
    .expect("request should succeed");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (get_status, get_bytes) = send(
        &app,
        Method::GET,
        &format!("/api/tasks/{}/", created.id),
        None,
    )
    .await
    .expect("request should succeed");
    assert_eq!(get_status, StatusCode::OK);
    assert_eq!(parse_task(&get_bytes).expect("body should be a task"), created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_no_content_and_removes_record(app: Router) {
    let doomed = create_task(&app, json!({ "title": "Doomed" }))
        .await
        .expect("creation should succeed");
    let survivor = create_task(&app, json!({ "title": "Survivor" }))
        .await
        .expect("creation should succeed");

    let (status, bytes) = send(
        &app,
        Method::DELETE,
        &format!("/api/tasks/{}/", doomed.id),
        None,
    )
    .await
    .expect("request should succeed");
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (list_status, list_bytes) = send(&app, Method::GET, "/api/tasks/", None)
        .await
        .expect("request should succeed");
    assert_eq!(list_status, StatusCode::OK);
    let remaining: Vec<TaskResponse> =
        serde_json::from_slice(&list_bytes).expect("body should be a task array");
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining.first().map(|task| task.id),
        Some(survivor.id)
    );

    let (get_status, _get_bytes) = send(
        &app,
        Method::GET,
        &format!("/api/tasks/{}/", doomed.id),
        None,
    )
    .await
    .expect("request should succeed");
    assert_eq!(get_status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_id_returns_not_found(app: Router) {
    let (status, _bytes) = send(&app, Method::DELETE, "/api/tasks/999/", None)
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn router_serves_documented_surface(app: Router) {
    let created = create_task(&app, json!({ "title": "Coverage" }))
        .await
        .expect("creation should succeed");
    let item_path = format!("/api/tasks/{}/", created.id);

    let surface = [
        (Method::GET, "/api/tasks/", None, StatusCode::OK),
        (
            Method::POST,
            "/api/tasks/",
            Some(json!({ "title": "Another" })),
            StatusCode::CREATED,
        ),
        (Method::GET, item_path.as_str(), None, StatusCode::OK),
        (
            Method::PUT,
            item_path.as_str(),
            Some(json!({ "title": "Renamed" })),
            StatusCode::OK,
        ),
        (
            Method::DELETE,
            item_path.as_str(),
            None,
            StatusCode::NO_CONTENT,
        ),
    ];
    for (method, path, body, expected) in surface {
        let (status, _bytes) = send(&app, method.clone(), path, body)
            .await
            .expect("request should succeed");
        assert_eq!(status, expected, "{method} {path}");
    }

    // Trailing slashes are part of the contract; the bare path is unrouted.
    let (status, _bytes) = send(&app, Method::GET, "/api/tasks", None)
        .await
        .expect("request should succeed");
    assert_eq!(status, StatusCode::NOT_FOUND);
}
