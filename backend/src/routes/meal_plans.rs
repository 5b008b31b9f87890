//! Meal plan API routes

use super::require;
use crate::error::ApiResult;
use crate::services::meal_plans::{MealPlanChanges, MealPlanService, NewMealPlan};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use studio_admin_shared::types::{
    CreateMealPlanRequest, CreateMealPlanResponse, DeleteRequest, DeleteResponse,
    MealPlanResponse, MealPlansResponse, UpdateMealPlanRequest,
};

/// Create meal plan routes
pub fn meal_plan_routes() -> Router<AppState> {
    Router::new()
        .route("/getAll", get(get_all))
        .route("/getById", get(get_by_id))
        .route("/create", post(create))
        .route("/update", post(update).put(update))
        .route("/delete", post(delete_meal_plan).delete(delete_meal_plan))
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

/// GET /api/mealPlans/getAll[?clientId=]
async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<MealPlansResponse>> {
    let meal_plans = MealPlanService::list(state.upstream(), query.client_id.as_deref()).await?;
    Ok(Json(MealPlansResponse { meal_plans }))
}

/// GET /api/mealPlans/getById?id=
async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<MealPlanResponse>> {
    let id = require(query.id, "Meal plan ID is required")?;
    let meal_plan = MealPlanService::get(state.upstream(), &id).await?;
    Ok(Json(MealPlanResponse { meal_plan }))
}

/// POST /api/mealPlans/create
///
/// The per-meal mutations are awaited before responding; the counts in
/// the response reflect what the upstream actually persisted.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateMealPlanRequest>,
) -> ApiResult<(StatusCode, Json<CreateMealPlanResponse>)> {
    let input = NewMealPlan {
        name: require(req.name, "Meal plan name is required")?,
        description: req.description,
        client_id: require(req.client_id, "Client ID is required")?,
        trainer_id: req.trainer_id,
        meals: req.meals,
    };

    let creation = MealPlanService::create(state.upstream(), input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateMealPlanResponse {
            meal_plan: creation.meal_plan,
            meals_created: creation.meals_created,
            meals_failed: creation.meals_failed,
        }),
    ))
}

/// POST|PUT /api/mealPlans/update
async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateMealPlanRequest>,
) -> ApiResult<Json<MealPlanResponse>> {
    let changes = MealPlanChanges {
        id: require(req.id, "Meal plan ID is required")?,
        name: req.name,
        description: req.description,
    };

    let meal_plan = MealPlanService::update(state.upstream(), changes).await?;
    Ok(Json(MealPlanResponse { meal_plan }))
}

/// POST|DELETE /api/mealPlans/delete
async fn delete_meal_plan(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = require(req.id, "Meal plan ID is required")?;
    let outcome = MealPlanService::delete(state.upstream(), &id).await?;
    Ok(Json(outcome))
}
