//! Trainer API routes

use super::require;
use crate::error::ApiResult;
use crate::services::roles::RoleService;
use crate::services::trainers::{TrainerChanges, TrainerService};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{delete, get, put},
    Json, Router,
};
use serde::Deserialize;
use studio_admin_shared::types::{
    DeleteRequest, DeleteResponse, RoleProfile, TrainerResponse, TrainersResponse,
    UpdateTrainerRequest,
};

/// Create trainer routes
pub fn trainer_routes() -> Router<AppState> {
    Router::new()
        .route("/getAll", get(get_all))
        .route("/getById", get(get_by_id))
        .route("/getByEmail", get(get_by_email))
        .route("/update", put(update))
        .route("/delete", delete(delete_trainer))
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

/// GET /api/trainers/getAll
async fn get_all(State(state): State<AppState>) -> ApiResult<Json<TrainersResponse>> {
    let trainers = TrainerService::list(state.upstream()).await?;
    Ok(Json(TrainersResponse { trainers }))
}

/// GET /api/trainers/getById?id=
async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<TrainerResponse>> {
    let id = require(query.id, "Trainer ID is required")?;
    let trainer = TrainerService::get(state.upstream(), &id).await?;
    Ok(Json(TrainerResponse { trainer }))
}

/// GET /api/trainers/getByEmail?email=
///
/// Role resolution entry point: the payload is tagged `admin`, `client`,
/// or `trainer` depending on what the email resolves to.
async fn get_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<RoleProfile>> {
    let email = require(query.email, "Email is required")?;
    let profile = RoleService::resolve(state.upstream(), &state.config.admin, &email).await?;
    Ok(Json(profile))
}

/// PUT /api/trainers/update
async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateTrainerRequest>,
) -> ApiResult<Json<TrainerResponse>> {
    let changes = TrainerChanges {
        id: require(req.id, "Trainer ID is required")?,
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
    };

    let trainer = TrainerService::update(state.upstream(), changes).await?;
    Ok(Json(TrainerResponse { trainer }))
}

/// DELETE /api/trainers/delete
async fn delete_trainer(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = require(req.id, "Trainer ID is required")?;
    let outcome = TrainerService::delete(state.upstream(), &id).await?;
    Ok(Json(outcome))
}
