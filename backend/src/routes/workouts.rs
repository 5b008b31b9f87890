//! Workout API routes
//!
//! The dashboard calls update with POST or PUT and delete with POST or
//! DELETE depending on the page; both method sets are accepted.

use super::require;
use crate::error::{ApiError, ApiResult};
use crate::services::workouts::{NewWorkout, WorkoutChanges, WorkoutService};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use studio_admin_shared::types::{
    CreateWorkoutRequest, CreateWorkoutsResponse, DeleteRequest, DeleteResponse,
    UpdateWorkoutRequest, WorkoutResponse, WorkoutsResponse,
};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/getAll", get(get_all))
        .route("/getById", get(get_by_id))
        .route("/create", post(create))
        .route("/update", post(update).put(update))
        .route("/delete", post(delete_workout).delete(delete_workout))
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    client_id: Option<String>,
}

/// GET /api/workouts/getAll[?clientId=]
async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<WorkoutsResponse>> {
    let workouts = WorkoutService::list(state.upstream(), query.client_id.as_deref()).await?;
    Ok(Json(WorkoutsResponse { workouts }))
}

/// GET /api/workouts/getById?id=
async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<WorkoutResponse>> {
    let id = require(query.id, "Workout ID is required")?;
    let workout = WorkoutService::get(state.upstream(), &id).await?;
    Ok(Json(WorkoutResponse { workout }))
}

/// POST /api/workouts/create
///
/// Accepts a single `clientId` or a `clientIds` batch; one workout is
/// created per client and the outcome reports how many persisted.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<CreateWorkoutsResponse>)> {
    let name = require(req.name, "Workout name is required")?;
    let trainer_id = require(req.trainer_id, "Trainer ID is required")?;

    let client_ids: Vec<String> = match req.client_ids {
        Some(ids) if !ids.is_empty() => ids,
        _ => match req.client_id {
            Some(id) if !id.trim().is_empty() => vec![id],
            _ => return Err(ApiError::Validation("Client ID is required".to_string())),
        },
    };

    let input = NewWorkout {
        name,
        exercises: req.exercises.unwrap_or_default(),
        trainer_id: Some(trainer_id),
        due_date: req.due_date,
        completed: req.completed,
    };

    let batch = WorkoutService::create_for_clients(state.upstream(), input, &client_ids).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateWorkoutsResponse {
            workouts: batch.workouts,
            created: batch.created,
            failed: batch.failed,
        }),
    ))
}

/// POST|PUT /api/workouts/update
async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> ApiResult<Json<WorkoutResponse>> {
    let changes = WorkoutChanges {
        id: require(req.id, "Workout ID is required")?,
        name: req.name,
        exercises: req.exercises,
        completed: req.completed,
        due_date: req.due_date,
    };

    let workout = WorkoutService::update(state.upstream(), changes).await?;
    Ok(Json(WorkoutResponse { workout }))
}

/// POST|DELETE /api/workouts/delete
async fn delete_workout(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = require(req.id, "Workout ID is required")?;
    let outcome = WorkoutService::delete(state.upstream(), &id).await?;
    Ok(Json(outcome))
}
