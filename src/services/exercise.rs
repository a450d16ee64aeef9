// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and exercise service.
//!
//! Handles the core workflow:
//! 1. Create and list users
//! 2. Append exercise entries atomically
//! 3. Build the filtered, date-ordered, limited exercise log

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{
    ExerciseRecord, ExerciseResponse, LogEntry, ObjectIdGenerator, UserDocument, UserSummary,
};
use crate::time_utils::{format_display_date, today_utc, DATE_FORMAT};
use chrono::NaiveDate;
use serde::Serialize;

/// A validated exercise entry to append.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub description: String,
    pub duration: f64,
    /// Defaults to today (UTC) when absent.
    pub date: Option<NaiveDate>,
}

/// Filters for a log query. Bounds are inclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

/// A user's exercise log, echoing whichever filters were supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserLog {
    pub username: String,
    /// Number of entries in `log`
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Select the entries of a log: keep those within `[from, to]`, order
/// them by date (stable, so same-day entries keep insertion order), then
/// keep the first `limit`.
pub fn select_log<'a>(
    exercises: &'a [ExerciseRecord],
    query: &LogQuery,
) -> Vec<&'a ExerciseRecord> {
    let mut selected: Vec<&ExerciseRecord> = exercises
        .iter()
        .filter(|e| query.from.is_none_or(|from| e.date >= from))
        .filter(|e| query.to.is_none_or(|to| e.date <= to))
        .collect();

    selected.sort_by_key(|e| e.date);

    if let Some(limit) = query.limit {
        selected.truncate(limit);
    }
    selected
}

/// Business logic over the user store.
pub struct ExerciseService {
    db: Database,
    ids: ObjectIdGenerator,
}

impl ExerciseService {
    pub fn new(db: Database) -> Result<Self> {
        Ok(Self {
            db,
            ids: ObjectIdGenerator::new()?,
        })
    }

    /// Create a user. The username must not be blank.
    pub async fn create_user(&self, username: &str) -> Result<UserSummary> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::Validation("'username' is required".to_string()));
        }

        let user = UserDocument::new(self.ids.next_id(), username.to_string());
        self.db.insert_user(&user).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(UserSummary::from(&user))
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let users = self.db.list_users().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users.iter().map(UserSummary::from).collect())
    }

    /// Fetch a user, failing with `NotFound` if absent.
    pub async fn find_user_or_fail(&self, user_id: &str) -> Result<UserDocument> {
        self.db
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::user_not_found(user_id))
    }

    /// Append an exercise to an existing user.
    pub async fn add_exercise(
        &self,
        user_id: &str,
        exercise: NewExercise,
    ) -> Result<ExerciseResponse> {
        if exercise.description.trim().is_empty() {
            return Err(AppError::Validation("'description' is required".to_string()));
        }
        if !exercise.duration.is_finite() || exercise.duration < 0.0 {
            return Err(AppError::Validation(
                "Invalid 'duration': must be a non-negative number".to_string(),
            ));
        }

        let record = ExerciseRecord {
            id: self.ids.next_id(),
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date.unwrap_or_else(today_utc),
        };

        let user = self
            .db
            .append_exercise(user_id, &record)
            .await?
            .ok_or_else(|| AppError::user_not_found(user_id))?;

        tracing::info!(
            user_id,
            date = %record.date,
            exercises = user.exercises.len(),
            "Exercise logged"
        );

        Ok(ExerciseResponse {
            username: user.username,
            description: record.description,
            duration: record.duration,
            date: format_display_date(record.date),
            id: user.id,
        })
    }

    /// Build a user's exercise log.
    pub async fn get_user_logs(&self, user_id: &str, query: &LogQuery) -> Result<UserLog> {
        let user = self.find_user_or_fail(user_id).await?;

        let log: Vec<LogEntry> = select_log(&user.exercises, query)
            .into_iter()
            .map(LogEntry::from)
            .collect();

        tracing::debug!(
            user_id,
            from = ?query.from,
            to = ?query.to,
            limit = ?query.limit,
            total = user.exercises.len(),
            returned = log.len(),
            "Built exercise log"
        );

        Ok(UserLog {
            username: user.username,
            count: log.len(),
            id: user.id,
            log,
            from: query.from.map(|d| d.format(DATE_FORMAT).to_string()),
            to: query.to.map(|d| d.format(DATE_FORMAT).to_string()),
            limit: query.limit,
        })
    }
}
