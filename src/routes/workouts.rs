// SPDX-License-Identifier: MIT

//! Workout CRUD routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Workout, WorkoutDraft};
use crate::time_utils::{format_utc_rfc3339, parse_rfc3339};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route(
            "/api/workouts/{id}",
            axum::routing::put(update_workout).delete(delete_workout),
        )
}

const MAX_LIMIT: u32 = 100;

#[derive(Deserialize)]
struct WorkoutsQuery {
    /// Filter by variant: "cardio", "strength", or "all"
    #[serde(rename = "type")]
    workout_type: Option<String>,
    /// Inclusive lower date bound (RFC3339)
    start_date: Option<String>,
    /// Inclusive upper date bound (RFC3339)
    end_date: Option<String>,
    /// Pagination: page number (1-indexed)
    #[serde(default = "default_page")]
    page: u32,
    /// Pagination: items per page
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_page() -> u32 {
    1
}
fn default_limit() -> u32 {
    10
}

#[derive(Serialize)]
pub struct WorkoutsResponse {
    pub workouts: Vec<Workout>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total: u32,
}

fn parse_date_bound(raw: Option<&str>, name: &str) -> Result<Option<String>> {
    raw.map(|value| {
        parse_rfc3339(value)
            .map(format_utc_rfc3339)
            .ok_or_else(|| {
                AppError::BadRequest(format!("Invalid '{}': must be RFC3339 datetime", name))
            })
    })
    .transpose()
}

fn parse_type_filter(raw: Option<&str>) -> Result<Option<String>> {
    match raw {
        None | Some("all") => Ok(None),
        Some(kind @ ("cardio" | "strength")) => Ok(Some(kind.to_string())),
        Some(other) => Err(AppError::BadRequest(format!(
            "Invalid 'type': {} (expected cardio, strength, or all)",
            other
        ))),
    }
}

/// List the user's workouts, most recent first, with paging.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<WorkoutsQuery>,
) -> Result<Json<WorkoutsResponse>> {
    if params.page < 1 {
        return Err(AppError::BadRequest(
            "Page must be greater than 0".to_string(),
        ));
    }
    let limit = params.limit.clamp(1, MAX_LIMIT);

    let workout_type = parse_type_filter(params.workout_type.as_deref())?;
    let start_date = parse_date_bound(params.start_date.as_deref(), "start_date")?;
    let end_date = parse_date_bound(params.end_date.as_deref(), "end_date")?;

    tracing::debug!(
        user_id = %auth.user_id,
        workout_type = ?workout_type,
        page = params.page,
        "Fetching workouts"
    );

    // Fetch the full filtered set and page in memory; per-user workout
    // lists are small and the API reports an exact total.
    let all = state
        .db
        .get_workouts_for_user(&auth.user_id, workout_type, start_date, end_date)
        .await?;

    let total = all.len() as u32;
    let total_pages = total.div_ceil(limit);

    let start = (params.page as usize - 1)
        .checked_mul(limit as usize)
        .ok_or_else(|| AppError::BadRequest("Page number causes overflow".to_string()))?;

    let workouts = if start < all.len() {
        let end = start.saturating_add(limit as usize).min(all.len());
        all[start..end].to_vec()
    } else {
        vec![]
    };

    Ok(Json(WorkoutsResponse {
        workouts,
        total_pages,
        current_page: params.page,
        total,
    }))
}

/// Create a workout, then advance the user's streak.
///
/// The streak update is best-effort: the workout record is the primary
/// operation, so a failed streak write is logged and the request still
/// succeeds.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(draft): Json<WorkoutDraft>,
) -> Result<(StatusCode, Json<Workout>)> {
    let workout = Workout::new(&auth.user_id, draft)?;
    state.db.set_workout(&workout).await?;

    tracing::info!(
        user_id = %auth.user_id,
        workout_id = %workout.id,
        workout_type = workout.details.kind(),
        "Workout created"
    );

    if let Err(e) = state.streak.record_workout(&auth.user_id, &workout.date).await {
        tracing::warn!(
            user_id = %auth.user_id,
            workout_id = %workout.id,
            error = %e,
            "Streak update failed; workout creation unaffected"
        );
    }

    Ok((StatusCode::CREATED, Json(workout)))
}

/// Look up a workout and verify it belongs to the caller.
///
/// A foreign workout reads as not-found so ids cannot be probed.
async fn owned_workout(
    state: &Arc<AppState>,
    user_id: &str,
    workout_id: &str,
) -> Result<Workout> {
    let not_found = || AppError::NotFound("Workout not found".to_string());
    let workout = state
        .db
        .get_workout(workout_id)
        .await?
        .ok_or_else(not_found)?;
    if workout.user_id != user_id {
        return Err(not_found());
    }
    Ok(workout)
}

/// Replace a workout's fields.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(draft): Json<WorkoutDraft>,
) -> Result<Json<Workout>> {
    let mut workout = owned_workout(&state, &auth.user_id, &id).await?;
    workout.apply(draft)?;
    state.db.set_workout(&workout).await?;

    tracing::info!(user_id = %auth.user_id, workout_id = %id, "Workout updated");

    Ok(Json(workout))
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Delete a workout.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    owned_workout(&state, &auth.user_id, &id).await?;
    state.db.delete_workout(&id).await?;

    tracing::info!(user_id = %auth.user_id, workout_id = %id, "Workout deleted");

    Ok(Json(MessageResponse {
        message: "Workout deleted successfully".to_string(),
    }))
}
