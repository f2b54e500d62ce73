// SPDX-License-Identifier: MIT

//! Workout model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::time_utils::{format_utc_rfc3339, parse_rfc3339};

/// Stored workout record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Document ID (UUID v4)
    pub id: String,
    /// Owning user's document ID
    pub user_id: String,
    /// Exercise name (trimmed, non-empty)
    pub exercise_name: String,
    /// Cardio or strength payload; serialized with a `type` tag
    #[serde(flatten)]
    pub details: WorkoutDetails,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Estimated calories burned
    pub calories_burned: u32,
    /// When the workout occurred (RFC3339, normalized to UTC)
    pub date: String,
    /// Free-form notes
    pub notes: Option<String>,
    /// When this record was created
    pub created_at: String,
    /// When this record was last modified
    pub updated_at: String,
}

/// Variant-specific workout data.
///
/// Sets and reps exist only for strength workouts, so they live on the
/// variant rather than as conditionally-required flat fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Cardio,
    Strength { sets: u32, reps: u32 },
}

impl WorkoutDetails {
    /// Tag value used in storage and query filters.
    pub fn kind(&self) -> &'static str {
        match self {
            WorkoutDetails::Cardio => "cardio",
            WorkoutDetails::Strength { .. } => "strength",
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if let WorkoutDetails::Strength { sets, reps } = self {
            if *sets < 1 {
                return Err(AppError::BadRequest(
                    "Sets are required for strength exercises".to_string(),
                ));
            }
            if *reps < 1 {
                return Err(AppError::BadRequest(
                    "Reps are required for strength exercises".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Incoming workout payload, shared by create and update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutDraft {
    #[validate(length(min = 1, message = "Exercise name is required"))]
    pub exercise_name: String,
    #[serde(flatten)]
    pub details: WorkoutDetails,
    #[validate(range(min = 1, message = "Duration must be at least one minute"))]
    pub duration_minutes: u32,
    pub calories_burned: u32,
    pub date: String,
    pub notes: Option<String>,
}

impl WorkoutDraft {
    /// Validate the draft and return the normalized workout date.
    fn checked_date(&self) -> Result<String, AppError> {
        self.validate()?;
        if self.exercise_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Exercise name is required".to_string(),
            ));
        }
        self.details.check()?;
        let date = parse_rfc3339(&self.date).ok_or_else(|| {
            AppError::BadRequest("Date must be a valid RFC3339 timestamp".to_string())
        })?;
        Ok(format_utc_rfc3339(date))
    }
}

impl Workout {
    /// Build a new workout from a validated draft.
    pub fn new(user_id: &str, draft: WorkoutDraft) -> Result<Self, AppError> {
        let date = draft.checked_date()?;
        let now = format_utc_rfc3339(chrono::Utc::now());
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            exercise_name: draft.exercise_name.trim().to_string(),
            details: draft.details,
            duration_minutes: draft.duration_minutes,
            calories_burned: draft.calories_burned,
            date,
            notes: draft.notes,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Replace the mutable fields from a validated draft.
    pub fn apply(&mut self, draft: WorkoutDraft) -> Result<(), AppError> {
        let date = draft.checked_date()?;
        self.exercise_name = draft.exercise_name.trim().to_string();
        self.details = draft.details;
        self.duration_minutes = draft.duration_minutes;
        self.calories_burned = draft.calories_burned;
        self.date = date;
        self.notes = draft.notes;
        self.updated_at = format_utc_rfc3339(chrono::Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardio_draft() -> WorkoutDraft {
        WorkoutDraft {
            exercise_name: "Morning run".to_string(),
            details: WorkoutDetails::Cardio,
            duration_minutes: 30,
            calories_burned: 250,
            date: "2024-01-15T07:30:00Z".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_new_cardio_workout() {
        let workout = Workout::new("user-1", cardio_draft()).unwrap();
        assert_eq!(workout.user_id, "user-1");
        assert_eq!(workout.details, WorkoutDetails::Cardio);
        assert_eq!(workout.date, "2024-01-15T07:30:00Z");
    }

    #[test]
    fn test_date_normalized_to_utc() {
        let mut draft = cardio_draft();
        draft.date = "2024-01-15T07:30:00+02:00".to_string();
        let workout = Workout::new("user-1", draft).unwrap();
        assert_eq!(workout.date, "2024-01-15T05:30:00Z");
    }

    #[test]
    fn test_blank_exercise_name_rejected() {
        let mut draft = cardio_draft();
        draft.exercise_name = "   ".to_string();
        let err = Workout::new("user-1", draft).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut draft = cardio_draft();
        draft.duration_minutes = 0;
        let err = Workout::new("user-1", draft).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut draft = cardio_draft();
        draft.date = "yesterday".to_string();
        let err = Workout::new("user-1", draft).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_strength_requires_nonzero_sets_and_reps() {
        let mut draft = cardio_draft();
        draft.details = WorkoutDetails::Strength { sets: 0, reps: 10 };
        assert!(Workout::new("user-1", draft.clone()).is_err());

        draft.details = WorkoutDetails::Strength { sets: 3, reps: 0 };
        assert!(Workout::new("user-1", draft.clone()).is_err());

        draft.details = WorkoutDetails::Strength { sets: 3, reps: 10 };
        assert!(Workout::new("user-1", draft).is_ok());
    }

    #[test]
    fn test_details_tag_round_trip() {
        let workout = Workout::new("user-1", cardio_draft()).unwrap();
        let json = serde_json::to_value(&workout).unwrap();
        assert_eq!(json["type"], "cardio");

        let strength = WorkoutDetails::Strength { sets: 3, reps: 12 };
        let json = serde_json::to_value(&strength).unwrap();
        assert_eq!(json["type"], "strength");
        assert_eq!(json["sets"], 3);

        let parsed: WorkoutDetails = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, strength);
    }

    #[test]
    fn test_apply_replaces_fields() {
        let mut workout = Workout::new("user-1", cardio_draft()).unwrap();
        let mut draft = cardio_draft();
        draft.exercise_name = "Bench press".to_string();
        draft.details = WorkoutDetails::Strength { sets: 5, reps: 5 };
        draft.notes = Some("felt strong".to_string());

        workout.apply(draft).unwrap();

        assert_eq!(workout.exercise_name, "Bench press");
        assert_eq!(workout.details.kind(), "strength");
        assert_eq!(workout.notes.as_deref(), Some("felt strong"));
    }
}
