//! Client API routes

use super::require;
use crate::error::ApiResult;
use crate::services::clients::{ClientChanges, ClientService, NewClient};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use studio_admin_shared::types::{
    AssignTrainerRequest, ClientResponse, ClientsResponse, CreateClientRequest, DeleteRequest,
    DeleteResponse, RemoveTrainerRequest, UpdateClientRequest,
};

/// Create client routes
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/getAll", get(get_all))
        .route("/getById", get(get_by_id))
        .route("/getByTrainer", get(get_by_trainer))
        .route("/create", post(create))
        .route("/update", put(update))
        .route("/delete", delete(delete_client))
        .route("/assignTrainer", put(assign_trainer))
        .route("/removeTrainer", put(remove_trainer))
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrainerQuery {
    trainer_id: Option<String>,
}

/// GET /api/clients/getAll
async fn get_all(State(state): State<AppState>) -> ApiResult<Json<ClientsResponse>> {
    let clients = ClientService::list(state.upstream()).await?;
    Ok(Json(ClientsResponse { clients }))
}

/// GET /api/clients/getById?id=
async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<ClientResponse>> {
    let id = require(query.id, "Client ID is required")?;
    let client = ClientService::get(state.upstream(), &id).await?;
    Ok(Json(ClientResponse { client }))
}

/// GET /api/clients/getByTrainer?trainerId=
async fn get_by_trainer(
    State(state): State<AppState>,
    Query(query): Query<TrainerQuery>,
) -> ApiResult<Json<ClientsResponse>> {
    let trainer_id = require(query.trainer_id, "Trainer ID is required")?;
    let clients = ClientService::list_by_trainer(state.upstream(), &trainer_id).await?;
    Ok(Json(ClientsResponse { clients }))
}

/// POST /api/clients/create
///
/// Composite: creates the user account first, then the client record.
/// A missing password falls back to the provisioning default.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateClientRequest>,
) -> ApiResult<(StatusCode, Json<ClientResponse>)> {
    let input = NewClient {
        first_name: require(req.first_name, "First name is required")?,
        last_name: require(req.last_name, "Last name is required")?,
        email: require(req.email, "Email is required")?,
        password: req.password,
        trainer_id: req.trainer_id,
    };

    let client = ClientService::create(state.upstream(), input).await?;
    Ok((StatusCode::CREATED, Json(ClientResponse { client })))
}

/// PUT /api/clients/update
async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateClientRequest>,
) -> ApiResult<Json<ClientResponse>> {
    let changes = ClientChanges {
        id: require(req.id, "Client ID is required")?,
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
    };

    let client = ClientService::update(state.upstream(), changes).await?;
    Ok(Json(ClientResponse { client }))
}

/// DELETE /api/clients/delete
async fn delete_client(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = require(req.id, "Client ID is required")?;
    let outcome = ClientService::delete(state.upstream(), &id).await?;
    Ok(Json(outcome))
}

/// PUT /api/clients/assignTrainer
async fn assign_trainer(
    State(state): State<AppState>,
    Json(req): Json<AssignTrainerRequest>,
) -> ApiResult<Json<ClientResponse>> {
    let client_id = require(req.client_id, "Client ID is required")?;
    let trainer_id = require(req.trainer_id, "Trainer ID is required")?;

    let client = ClientService::assign_trainer(state.upstream(), &client_id, &trainer_id).await?;
    Ok(Json(ClientResponse { client }))
}

/// PUT /api/clients/removeTrainer
async fn remove_trainer(
    State(state): State<AppState>,
    Json(req): Json<RemoveTrainerRequest>,
) -> ApiResult<Json<ClientResponse>> {
    let client_id = require(req.client_id, "Client ID is required")?;

    let client = ClientService::remove_trainer(state.upstream(), &client_id).await?;
    Ok(Json(ClientResponse { client }))
}
