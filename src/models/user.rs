//! User model for storage and API.

use serde::{Deserialize, Serialize};

use crate::time_utils::format_utc_rfc3339;

/// User account stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document ID (UUID v4)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address (lowercased, unique by lookup)
    pub email: String,
    /// Argon2 PHC-string hash; never exposed through the API
    pub password_hash: String,
    /// Short free-form bio
    pub bio: Option<String>,
    /// Profile picture URL
    pub profile_picture: Option<String>,
    /// Weekly training goals
    #[serde(default)]
    pub goals: Goals,
    /// Consecutive-day workout streak
    #[serde(default)]
    pub streak: StreakState,
    /// When the account was created (RFC3339)
    pub created_at: String,
    /// Last profile/streak update (RFC3339)
    pub updated_at: String,
}

impl User {
    /// Create a new account with default goals and a zeroed streak.
    pub fn new(name: &str, email: &str, password_hash: &str) -> Self {
        let now = format_utc_rfc3339(chrono::Utc::now());
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password_hash: password_hash.to_string(),
            bio: None,
            profile_picture: None,
            goals: Goals::default(),
            streak: StreakState::default(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Weekly training goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goals {
    pub weekly_calories: u32,
    pub weekly_workouts: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            weekly_calories: 2000,
            weekly_workouts: 5,
        }
    }
}

/// Consecutive-day workout streak.
///
/// Created zeroed with the account and mutated only by the streak
/// service, once per workout-creation event. `longest >= current`
/// holds after every update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Current consecutive-day count
    #[serde(default)]
    pub current: u32,
    /// Highest count ever observed
    #[serde(default)]
    pub longest: u32,
    /// Date of the most recent workout that contributed to the streak
    /// (RFC3339, full timestamp; day granularity applies at comparison)
    #[serde(default)]
    pub last_workout_date: Option<String>,
}
