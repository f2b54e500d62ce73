// SPDX-License-Identifier: MIT

//! Workout streak tracking.
//!
//! A streak counts consecutive calendar days with at least one logged
//! workout. `advance` is the pure day-arithmetic core; `StreakService`
//! wraps it with the user-record read/write.
//!
//! The read and write are two separate operations, not a transaction.
//! Two concurrent workout creations for the same user can race and one
//! streak update can be lost (last write wins). That is an accepted
//! tradeoff: the streak is a best-effort counter, not a ledger.

use chrono::{DateTime, Utc};

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::StreakState;
use crate::time_utils::{calendar_day, format_utc_rfc3339, parse_rfc3339};

/// Compute the streak state after a workout on `workout_date`.
///
/// Returns `None` when the workout does not move the streak: its calendar
/// day (UTC) is on or before the last recorded workout day. Same-day
/// re-logs and backdated workouts therefore never modify the streak.
pub fn advance(state: &StreakState, workout_date: DateTime<Utc>) -> Option<StreakState> {
    let workout_day = workout_date.date_naive();

    // An unparseable stored date is treated as no prior workout.
    let last_day = match state.last_workout_date.as_deref() {
        Some(raw) => {
            let day = calendar_day(raw);
            if day.is_none() {
                tracing::warn!(last_workout_date = raw, "Unparseable streak date, resetting");
            }
            day
        }
        None => None,
    };

    let current = match last_day {
        None => 1,
        Some(last) if workout_day > last => {
            if (workout_day - last).num_days() == 1 {
                // Consecutive day: the streak extends.
                state.current + 1
            } else {
                // Gap of more than one day: the streak restarts.
                1
            }
        }
        Some(_) => return None,
    };

    Some(StreakState {
        current,
        longest: current.max(state.longest),
        last_workout_date: Some(format_utc_rfc3339(workout_date)),
    })
}

/// Result of a streak update attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreakOutcome {
    /// The streak moved; carries the persisted state.
    Updated(StreakState),
    /// The workout was for a past or already-recorded day.
    Unchanged,
}

/// Reads and writes the streak fields on the user record.
#[derive(Clone)]
pub struct StreakService {
    db: FirestoreDb,
}

impl StreakService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Update a user's streak for a newly logged workout.
    ///
    /// Called exactly once after the workout record is persisted. The
    /// caller decides whether a failure matters; the workout-creation
    /// handler logs and ignores it, since the workout itself already
    /// succeeded.
    pub async fn record_workout(
        &self,
        user_id: &str,
        workout_date: &str,
    ) -> Result<StreakOutcome> {
        let date = parse_rfc3339(workout_date).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid workout date: {}", workout_date))
        })?;

        let mut user = self
            .db
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let Some(updated) = advance(&user.streak, date) else {
            tracing::debug!(user_id, workout_date, "Workout does not move the streak");
            return Ok(StreakOutcome::Unchanged);
        };

        tracing::info!(
            user_id,
            current = updated.current,
            longest = updated.longest,
            "Streak updated"
        );

        user.streak = updated.clone();
        user.updated_at = format_utc_rfc3339(Utc::now());
        self.db.upsert_user(&user).await?;

        Ok(StreakOutcome::Updated(updated))
    }
}
