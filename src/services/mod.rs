// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod exercise;

pub use exercise::{select_log, ExerciseService, LogQuery, NewExercise, UserLog};
