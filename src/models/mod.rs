// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod exercise;
pub mod object_id;
pub mod user;

pub use exercise::{ExerciseRecord, ExerciseResponse, LogEntry};
pub use object_id::ObjectIdGenerator;
pub use user::{UserDocument, UserSummary};
