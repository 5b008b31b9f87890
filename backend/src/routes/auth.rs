//! Login and signup routes
//!
//! The backend issues no tokens; the dashboard keeps its own session flag.
//! These routes only verify or create upstream user records.

use super::require;
use crate::error::ApiResult;
use crate::services::auth::{AuthService, NewSignup};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use studio_admin_shared::types::{LoginRequest, SignupRequest, UserResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
}

/// POST /api/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    let email = require(req.email, "Email is required")?;
    let password = require(req.password, "Password is required")?;

    let user = AuthService::login(state.upstream(), &email, &password).await?;
    Ok(Json(UserResponse { user }))
}

/// POST /api/signup - self-service trainer registration
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let input = NewSignup {
        first_name: require(req.first_name, "First name is required")?,
        last_name: require(req.last_name, "Last name is required")?,
        email: require(req.email, "Email is required")?,
        password: require(req.password, "Password is required")?,
    };

    let user = AuthService::signup(state.upstream(), input).await?;
    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}
