//! Account handlers: signup and login.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use resolveit_core::account::normalize_signup;
use resolveit_core::error::CoreError;
use resolveit_db::models::user::{CreateUser, User};
use resolveit_db::repositories::UserRepo;

use crate::auth::password::passwords_match;
use crate::error::AppResult;
use crate::state::AppState;

/// Request payload for signup. Only username and password are required;
/// the rest is defaulted during normalization.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Request payload for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /users
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> AppResult<Json<User>> {
    let account = normalize_signup(
        payload.username.as_deref(),
        payload.password.as_deref(),
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.role.as_deref(),
    )?;

    // Friendly duplicate check up front. A concurrent signup can still
    // race past it and is caught by the unique constraint, which maps to
    // the same 409.
    if UserRepo::exists_by_username(&state.pool, &account.username).await? {
        return Err(CoreError::Conflict("Username already exists".into()).into());
    }

    let input = CreateUser {
        name: account.name,
        username: account.username,
        email: account.email,
        password: account.password,
        role: account.role,
    };

    let user = UserRepo::create(&state.pool, &input).await?;
    Ok(Json(user))
}

/// POST /users/login
///
/// A wrong username and a wrong password return the same 401 so the
/// response does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<User>> {
    let username = payload.username.as_deref().unwrap_or("").trim();
    let password = payload.password.as_deref().unwrap_or("").trim();

    if username.is_empty() || password.is_empty() {
        return Err(CoreError::Validation("username and password are required".into()).into());
    }

    let user = UserRepo::find_by_username(&state.pool, username)
        .await?
        .filter(|u| passwords_match(password, &u.password))
        .ok_or_else(|| CoreError::Unauthorized("Invalid credentials".into()))?;

    Ok(Json(user))
}
