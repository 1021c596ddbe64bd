use axum::extract::State;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use shared::client::{AuthResponse, LoginRequest};

use crate::auth::{Claims, TOKEN_TTL_SECS, issue_token};
use crate::error::{MockError, MockResult};
use crate::state::MockState;

pub(super) fn public_routes() -> Router<MockState> {
    Router::new().route("/auth/login", post(login))
}

pub(super) fn profile_routes() -> Router<MockState> {
    Router::new().route("/auth/check-profile", get(check_profile))
}

/// Any role may sign in; the admin check is the client's job.
async fn login(
    State(state): State<MockState>,
    Json(req): Json<LoginRequest>,
) -> MockResult<Json<AuthResponse>> {
    let user = state
        .read()
        .users
        .iter()
        .find(|(u, password)| u.email.eq_ignore_ascii_case(req.email.trim()) && *password == req.password)
        .map(|(u, _)| u.clone());

    let Some(user) = user else {
        tracing::warn!(email = %req.email, "login rejected");
        return Err(MockError::Unauthorized("Invalid email or password".into()));
    };

    let token = issue_token(state.jwt_secret(), &user, Utc::now().timestamp() + TOKEN_TTL_SECS)
        .map_err(|e| MockError::Status {
            status: 500,
            message: format!("token signing failed: {}", e),
        })?;

    tracing::info!(user = %user.email, role = %user.role, "login");
    Ok(Json(AuthResponse {
        success: true,
        token: Some(token),
        user: Some(user),
        message: None,
    }))
}

async fn check_profile(
    State(state): State<MockState>,
    Extension(claims): Extension<Claims>,
) -> MockResult<Json<AuthResponse>> {
    let user = state
        .read()
        .users
        .iter()
        .find(|(u, _)| u.id == claims.sub)
        .map(|(u, _)| u.clone())
        .ok_or_else(|| MockError::Unauthorized("User no longer exists".into()))?;

    Ok(Json(AuthResponse {
        success: true,
        token: None,
        user: Some(user),
        message: None,
    }))
}
