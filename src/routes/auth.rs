// SPDX-License-Identifier: MIT

//! Account routes: registration, login, and profile management.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, AuthUser};
use crate::models::{Goals, StreakState, User};
use crate::services::password;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

/// Routes that do not require a session.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Routes that require a valid session token.
/// The auth middleware is applied in routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/me", get(get_me).put(update_profile))
        .route("/api/auth/goals", put(update_goals))
}

// ─── Response Types ──────────────────────────────────────────

/// Public view of a user account (never includes the password hash).
#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub goals: Goals,
    pub streak: StreakState,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            bio: user.bio,
            profile_picture: user.profile_picture,
            goals: user.goals,
            streak: user.streak,
        }
    }
}

/// Response for register and login.
#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Response wrapping a profile.
#[derive(Serialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

// ─── Registration & Login ────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Create a new account and issue a session token.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let email = payload.email.trim().to_lowercase();
    if state.db.find_user_by_email(&email).await?.is_some() {
        return Err(AppError::BadRequest("User already exists".to_string()));
    }

    let hash = password::hash_password(&payload.password)?;
    let user = User::new(&payload.name, &email, &hash);
    state.db.upsert_user(&user).await?;

    tracing::info!(user_id = %user.id, "User registered");

    let token = create_jwt(&user.id, &state.config.jwt_signing_key).map_err(AppError::Internal)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Verify credentials and issue a session token.
///
/// Missing user and wrong password return the same error so the
/// endpoint cannot be used to probe for registered emails.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    payload.validate()?;

    let invalid = || AppError::BadRequest("Invalid credentials".to_string());

    let email = payload.email.trim().to_lowercase();
    let user = state
        .db
        .find_user_by_email(&email)
        .await?
        .ok_or_else(invalid)?;

    if !password::verify_password(&payload.password, &user.password_hash) {
        return Err(invalid());
    }

    tracing::info!(user_id = %user.id, "User logged in");

    let token = create_jwt(&user.id, &state.config.jwt_signing_key).map_err(AppError::Internal)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

// ─── Profile ─────────────────────────────────────────────────

/// Get current user profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<MeResponse>> {
    let user = state
        .db
        .get_user(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", auth.user_id)))?;

    Ok(Json(MeResponse { user: user.into() }))
}

#[derive(Deserialize)]
pub struct GoalsRequest {
    pub weekly_calories: u32,
    pub weekly_workouts: u32,
}

/// Replace the user's weekly goals.
async fn update_goals(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<GoalsRequest>,
) -> Result<Json<MeResponse>> {
    let mut user = state
        .db
        .get_user(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", auth.user_id)))?;

    user.goals = Goals {
        weekly_calories: payload.weekly_calories,
        weekly_workouts: payload.weekly_workouts,
    };
    user.updated_at = format_utc_rfc3339(chrono::Utc::now());
    state.db.upsert_user(&user).await?;

    Ok(Json(MeResponse { user: user.into() }))
}

#[derive(Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: Option<String>,
    pub bio: Option<String>,
    /// Profile picture URL; upload storage is handled elsewhere.
    pub profile_picture: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
}

/// Partial profile update; only provided fields change.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<MeResponse>> {
    payload.validate()?;

    let mut user = state
        .db
        .get_user(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", auth.user_id)))?;

    if let Some(name) = payload.name {
        user.name = name.trim().to_string();
    }
    if let Some(email) = payload.email {
        let email = email.trim().to_lowercase();
        if email != user.email {
            if state.db.find_user_by_email(&email).await?.is_some() {
                return Err(AppError::BadRequest("Email already in use".to_string()));
            }
            user.email = email;
        }
    }
    if let Some(bio) = payload.bio {
        user.bio = Some(bio);
    }
    if let Some(picture) = payload.profile_picture {
        user.profile_picture = Some(picture);
    }
    if let Some(new_password) = payload.password {
        user.password_hash = password::hash_password(&new_password)?;
    }

    user.updated_at = format_utc_rfc3339(chrono::Utc::now());
    state.db.upsert_user(&user).await?;

    tracing::info!(user_id = %user.id, "Profile updated");

    Ok(Json(MeResponse { user: user.into() }))
}
