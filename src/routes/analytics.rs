// SPDX-License-Identifier: MIT

//! Analytics routes: period summaries and yearly progress.

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::{Datelike, Duration, Months, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::analytics::{self, MonthlyStat, Summary};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/analytics/summary", get(get_summary))
        .route("/api/analytics/monthly", get(get_monthly))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Period {
    Week,
    Month,
    Year,
}

#[derive(Deserialize)]
struct SummaryQuery {
    period: Option<Period>,
}

/// Summarize the user's workouts over the trailing week, month, or year.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<Summary>> {
    let now = Utc::now();
    let start = match params.period.unwrap_or(Period::Week) {
        Period::Week => now - Duration::days(7),
        Period::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now),
        Period::Year => now.checked_sub_months(Months::new(12)).unwrap_or(now),
    };

    let workouts = state
        .db
        .get_workouts_in_range(&auth.user_id, &format_utc_rfc3339(start), None)
        .await?;

    tracing::debug!(
        user_id = %auth.user_id,
        count = workouts.len(),
        "Computed analytics summary"
    );

    Ok(Json(analytics::summarize(&workouts)))
}

/// Monthly totals for the current calendar year, zero-filled.
async fn get_monthly(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<MonthlyStat>>> {
    let year = Utc::now().year();
    let start = format!("{}-01-01T00:00:00Z", year);
    let end = format!("{}-01-01T00:00:00Z", year + 1);

    let workouts = state
        .db
        .get_workouts_in_range(&auth.user_id, &start, Some(&end))
        .await?;

    Ok(Json(analytics::monthly_progress(&workouts)))
}
