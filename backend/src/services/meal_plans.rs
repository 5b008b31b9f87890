//! Meal plan management
//!
//! A meal plan is created first, then one mutation per submitted meal is
//! attached to it. The meal fan-out is gathered and awaited before the
//! response is produced, so the reported counts match what the upstream
//! actually persisted.

use crate::error::ApiError;
use crate::upstream::records::MealPlanRecord;
use crate::upstream::{queries, UpstreamClient};
use anyhow::anyhow;
use futures::future::join_all;
use serde_json::json;
use studio_admin_shared::types::{DeleteResponse, Meal, MealPlanView};
use tracing::warn;

/// Input for meal plan creation, already validated by the route layer.
pub struct NewMealPlan {
    pub name: String,
    pub description: Option<String>,
    pub client_id: String,
    pub trainer_id: Option<String>,
    pub meals: Vec<Meal>,
}

/// Input for meal plan updates; unset fields keep their current value.
pub struct MealPlanChanges {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Outcome of a creation, with the per-meal tally.
pub struct MealPlanCreation {
    pub meal_plan: MealPlanView,
    pub meals_created: usize,
    pub meals_failed: usize,
}

pub struct MealPlanService;

impl MealPlanService {
    pub async fn list(
        upstream: &UpstreamClient,
        client_id: Option<&str>,
    ) -> Result<Vec<MealPlanView>, ApiError> {
        let records = match client_id {
            Some(client_id) => {
                upstream
                    .query_nodes::<_, MealPlanRecord>(
                        queries::MEAL_PLANS_BY_CLIENT,
                        json!({ "clientId": client_id }),
                    )
                    .await?
            }
            None => {
                upstream
                    .query_nodes::<_, MealPlanRecord>(queries::MEAL_PLANS_ALL, json!({}))
                    .await?
            }
        };
        Ok(records.into_iter().map(MealPlanRecord::into_view).collect())
    }

    pub async fn get(upstream: &UpstreamClient, id: &str) -> Result<MealPlanView, ApiError> {
        let record = Self::fetch(upstream, id).await?;
        Ok(record.into_view())
    }

    /// Create the plan, then attach every submitted meal.
    ///
    /// Meal mutations run concurrently and are all awaited; individual
    /// failures are counted and logged, never silently dropped, and the
    /// returned view lists only the meals that persisted.
    pub async fn create(
        upstream: &UpstreamClient,
        input: NewMealPlan,
    ) -> Result<MealPlanCreation, ApiError> {
        let record: MealPlanRecord = upstream
            .mutate(
                queries::CREATE_MEAL_PLAN,
                json!({
                    "name": input.name,
                    "description": input.description,
                    "clientId": input.client_id,
                    "trainerId": input.trainer_id,
                }),
            )
            .await?
            .ok_or_else(|| ApiError::Internal(anyhow!("meal plan mutation returned no record")))?;

        let tasks = input.meals.iter().map(|meal| {
            upstream.mutate::<_, serde_json::Value>(
                queries::CREATE_MEAL,
                json!({
                    "mealPlanId": record.id,
                    "name": meal.name,
                    "calories": meal.calories,
                    "carbs": meal.carbs,
                    "fats": meal.fats,
                    "protein": meal.protein,
                }),
            )
        });

        let results = join_all(tasks).await;

        let mut persisted = Vec::new();
        let mut meals_failed = 0;
        for (meal, result) in input.meals.into_iter().zip(results) {
            match result {
                Ok(_) => persisted.push(meal),
                Err(err) => {
                    meals_failed += 1;
                    warn!(meal_plan_id = %record.id, meal = %meal.name, error = %err, "meal creation failed");
                }
            }
        }

        let meals_created = persisted.len();
        let mut meal_plan = record.into_view();
        meal_plan.meals = persisted;

        Ok(MealPlanCreation {
            meal_plan,
            meals_created,
            meals_failed,
        })
    }

    pub async fn update(
        upstream: &UpstreamClient,
        changes: MealPlanChanges,
    ) -> Result<MealPlanView, ApiError> {
        let current = Self::fetch(upstream, &changes.id).await?;

        let record: MealPlanRecord = upstream
            .mutate(
                queries::UPDATE_MEAL_PLAN,
                json!({
                    "id": changes.id,
                    "name": changes.name.unwrap_or(current.name),
                    "description": changes.description.or(current.description),
                }),
            )
            .await?
            .ok_or_else(|| ApiError::Internal(anyhow!("meal plan mutation returned no record")))?;

        Ok(record.into_view())
    }

    pub async fn delete(upstream: &UpstreamClient, id: &str) -> Result<DeleteResponse, ApiError> {
        upstream
            .mutate::<_, serde_json::Value>(queries::DELETE_MEAL_PLAN, json!({ "id": id }))
            .await?;
        Ok(DeleteResponse {
            success: true,
            warning: None,
        })
    }

    async fn fetch(upstream: &UpstreamClient, id: &str) -> Result<MealPlanRecord, ApiError> {
        upstream
            .query_first(queries::MEAL_PLAN_BY_ID, json!({ "id": id }))
            .await?
            .ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))
    }
}
