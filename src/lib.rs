// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise Tracker: users and their exercise logs over a small REST API.
//!
//! This crate provides the HTTP API, the user/exercise service and the
//! document-store layer behind it.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod validation;

use config::Config;
use services::ExerciseService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub exercise_service: ExerciseService,
}
