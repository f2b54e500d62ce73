// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod analytics;
pub mod user;
pub mod workout;

pub use user::{Goals, StreakState, User};
pub use workout::{Workout, WorkoutDetails, WorkoutDraft};
