// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use exercise_tracker::config::Config;
use exercise_tracker::db::{Database, FirestoreDb, MemoryDb};
use exercise_tracker::routes::create_router;
use exercise_tracker::services::ExerciseService;
use exercise_tracker::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

fn app_with(db: Database) -> Router {
    let state = Arc::new(AppState {
        config: Config::default(),
        exercise_service: ExerciseService::new(db).expect("Failed to create service"),
    });
    create_router(state)
}

/// Create a test app backed by the in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> Router {
    app_with(Database::Memory(MemoryDb::new()))
}

/// Create a test app whose store fails every operation.
#[allow(dead_code)]
pub fn create_offline_app() -> Router {
    app_with(Database::Firestore(FirestoreDb::new_mock()))
}

/// Send a request and return the status and parsed JSON body
/// (`Value::Null` for an empty or non-JSON body).
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Create a user through the API and return its id.
#[allow(dead_code)]
pub async fn create_user(app: &Router, username: &str) -> String {
    let (status, body) = send(
        app,
        post_json("/api/users", serde_json::json!({ "username": username })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["_id"].as_str().unwrap().to_string()
}

/// Log an exercise through the API.
#[allow(dead_code)]
pub async fn add_exercise(
    app: &Router,
    user_id: &str,
    description: &str,
    duration: u32,
    date: &str,
) {
    let (status, _) = send(
        app,
        post_json(
            &format!("/api/users/{}/exercises", user_id),
            serde_json::json!({
                "description": description,
                "duration": duration,
                "date": date,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}
