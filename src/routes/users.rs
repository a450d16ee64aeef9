// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and exercise log routes.

use crate::error::{AppError, Result};
use crate::extract::{ApiPath, ApiQuery, Payload};
use crate::models::{ExerciseResponse, UserSummary};
use crate::services::{LogQuery, NewExercise, UserLog};
use crate::validation::{parse_date, parse_duration, parse_limit, require_valid_id};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// User API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}/exercises", post(add_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "'username' is required"))]
    username: String,
}

/// List all users.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserSummary>>> {
    let users = state.exercise_service.list_users().await?;
    Ok(Json(users))
}

/// Create a user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserSummary>)> {
    req.validate()?;

    let user = state.exercise_service.create_user(&req.username).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// ─── Exercises ───────────────────────────────────────────────

/// A scalar that may arrive as a JSON number or as text (form fields are
/// always text).
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Deserialize, Validate)]
struct AddExerciseRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "'description' is required"))]
    description: String,
    #[serde(default)]
    duration: Option<NumberOrText>,
    #[serde(default)]
    date: Option<String>,
}

impl AddExerciseRequest {
    fn duration(&self) -> Result<f64> {
        match &self.duration {
            Some(NumberOrText::Number(n)) if n.is_finite() && *n >= 0.0 => Ok(*n),
            Some(NumberOrText::Number(_)) => Err(AppError::Validation(
                "Invalid 'duration': must be a non-negative number".to_string(),
            )),
            Some(NumberOrText::Text(s)) => parse_duration(Some(s)),
            None => parse_duration(None),
        }
    }
}

/// Log an exercise for a user.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<String>,
    Payload(req): Payload<AddExerciseRequest>,
) -> Result<(StatusCode, Json<ExerciseResponse>)> {
    require_valid_id(&user_id)?;
    req.validate()?;
    let duration = req.duration()?;
    let date = parse_date("date", req.date.as_deref())?;

    let created = state
        .exercise_service
        .add_exercise(
            &user_id,
            NewExercise {
                description: req.description,
                duration,
                date,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// ─── Logs ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LogsParams {
    /// Earliest date to include (YYYY-MM-DD)
    from: Option<String>,
    /// Latest date to include (YYYY-MM-DD)
    to: Option<String>,
    /// Maximum number of entries
    limit: Option<String>,
}

/// Get a user's exercise log.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<String>,
    ApiQuery(params): ApiQuery<LogsParams>,
) -> Result<Json<UserLog>> {
    require_valid_id(&user_id)?;
    let query = LogQuery {
        from: parse_date("from", params.from.as_deref())?,
        to: parse_date("to", params.to.as_deref())?,
        limit: parse_limit(params.limit.as_deref())?,
    };

    let log = state
        .exercise_service
        .get_user_logs(&user_id, &query)
        .await?;
    Ok(Json(log))
}
