// SPDX-License-Identifier: MIT

//! Fitlog: workout tracking REST API
//!
//! This crate provides the backend for logging workouts, tracking
//! daily streaks, and serving weekly/monthly training analytics.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::StreakService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub streak: StreakService,
}
