// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store failure handling tests (offline Firestore client).

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{get, post_json, send};

#[tokio::test]
async fn test_store_error_is_generic_500() {
    let app = common::create_offline_app();

    let (status, body) = send(&app, get("/api/users")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "database_error" }));
}

#[tokio::test]
async fn test_store_error_on_create_and_logs() {
    let app = common::create_offline_app();

    let (status, _) = send(&app, post_json("/api/users", json!({ "username": "alice" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, get("/api/users/0123456789abcdef01234567/logs")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_validation_runs_before_store_access() {
    // An offline store would turn any access into a 500.
    let app = common::create_offline_app();

    let (status, _) = send(&app, post_json("/api/users", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/api/users/bad-id/logs")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        get("/api/users/0123456789abcdef01234567/logs?limit=many"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post_json(
            "/api/users/0123456789abcdef01234567/exercises",
            json!({ "description": "run", "duration": -3 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
