//! Route definitions for the Studio Admin API
//!
//! Paths are kept exactly as the dashboard calls them
//! (`/api/<entity>/<operation>`), including the mixed method sets on the
//! workout and meal plan update/delete routes.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod clients;
mod health;
mod meal_plans;
mod trainers;
mod workouts;

pub use auth::auth_routes;
pub use clients::client_routes;
pub use meal_plans::meal_plan_routes;
pub use trainers::trainer_routes;
pub use workouts::workout_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes())
        // A wrong method must produce the JSON body, not an empty 405
        .method_not_allowed_fallback(method_not_allowed)
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes, one nest per entity
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::auth_routes())
        .nest("/trainers", trainers::trainer_routes())
        .nest("/clients", clients::client_routes())
        .nest("/workouts", workouts::workout_routes())
        .nest("/mealPlans", meal_plans::meal_plan_routes())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Presence check for a required field; the message names the field.
pub(crate) fn require(value: Option<String>, message: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::Validation(message.to_string())),
    }
}
