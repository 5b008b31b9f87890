//! Workout management
//!
//! A workout belongs to one client and one trainer. Creation accepts a
//! batch of target clients; one mutation is fired per client, all of them
//! awaited together, and the outcome reports how many persisted.

use crate::error::ApiError;
use crate::upstream::records::WorkoutRecord;
use crate::upstream::{queries, UpstreamClient};
use anyhow::anyhow;
use chrono::NaiveDate;
use futures::future::join_all;
use serde_json::json;
use studio_admin_shared::exercises::Exercises;
use studio_admin_shared::types::{DeleteResponse, WorkoutView};
use tracing::warn;

/// Input for workout creation, already validated by the route layer.
pub struct NewWorkout {
    pub name: String,
    pub exercises: Exercises,
    pub trainer_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
}

/// Input for workout updates; unset fields keep their current value.
pub struct WorkoutChanges {
    pub id: String,
    pub name: Option<String>,
    pub exercises: Option<Exercises>,
    pub completed: Option<bool>,
    pub due_date: Option<NaiveDate>,
}

/// Outcome of a (possibly multi-client) creation.
pub struct WorkoutBatch {
    pub workouts: Vec<WorkoutView>,
    pub created: usize,
    pub failed: usize,
}

pub struct WorkoutService;

impl WorkoutService {
    pub async fn list(
        upstream: &UpstreamClient,
        client_id: Option<&str>,
    ) -> Result<Vec<WorkoutView>, ApiError> {
        let records = match client_id {
            Some(client_id) => {
                upstream
                    .query_nodes::<_, WorkoutRecord>(
                        queries::WORKOUTS_BY_CLIENT,
                        json!({ "clientId": client_id }),
                    )
                    .await?
            }
            None => {
                upstream
                    .query_nodes::<_, WorkoutRecord>(queries::WORKOUTS_ALL, json!({}))
                    .await?
            }
        };
        Ok(records.into_iter().map(WorkoutRecord::into_view).collect())
    }

    pub async fn get(upstream: &UpstreamClient, id: &str) -> Result<WorkoutView, ApiError> {
        let record = Self::fetch(upstream, id).await?;
        Ok(record.into_view())
    }

    /// Create one workout per target client.
    ///
    /// All per-client mutations are awaited before the outcome is built, so
    /// the counts reflect what actually persisted. If nothing persisted the
    /// first failure propagates as the response.
    pub async fn create_for_clients(
        upstream: &UpstreamClient,
        input: NewWorkout,
        client_ids: &[String],
    ) -> Result<WorkoutBatch, ApiError> {
        let tasks = client_ids.iter().map(|client_id| {
            upstream.mutate::<_, WorkoutRecord>(
                queries::CREATE_WORKOUT,
                json!({
                    "name": input.name,
                    "exercises": input.exercises,
                    "completed": input.completed,
                    "clientId": client_id,
                    "trainerId": input.trainer_id,
                    "dueDate": input.due_date,
                }),
            )
        });

        let results = join_all(tasks).await;

        let mut workouts = Vec::new();
        let mut failed = 0;
        let mut first_error: Option<ApiError> = None;

        for (client_id, result) in client_ids.iter().zip(results) {
            match result {
                Ok(Some(record)) => workouts.push(record.into_view()),
                Ok(None) => {
                    failed += 1;
                    warn!(%client_id, "workout mutation returned no record");
                    if first_error.is_none() {
                        first_error =
                            Some(ApiError::Internal(anyhow!("workout mutation returned no record")));
                    }
                }
                Err(err) => {
                    failed += 1;
                    warn!(%client_id, error = %err, "workout creation failed");
                    if first_error.is_none() {
                        first_error = Some(err.into());
                    }
                }
            }
        }

        if workouts.is_empty() {
            if let Some(err) = first_error {
                return Err(err);
            }
        }

        let created = workouts.len();
        Ok(WorkoutBatch {
            workouts,
            created,
            failed,
        })
    }

    pub async fn update(
        upstream: &UpstreamClient,
        changes: WorkoutChanges,
    ) -> Result<WorkoutView, ApiError> {
        let current = Self::fetch(upstream, &changes.id).await?.into_view();

        let record: WorkoutRecord = upstream
            .mutate(
                queries::UPDATE_WORKOUT,
                json!({
                    "id": changes.id,
                    "name": changes.name.unwrap_or(current.name),
                    "exercises": changes.exercises.unwrap_or(current.exercises),
                    "completed": changes.completed.unwrap_or(current.completed),
                    "dueDate": changes.due_date.or(current.due_date),
                }),
            )
            .await?
            .ok_or_else(|| ApiError::Internal(anyhow!("workout mutation returned no record")))?;

        Ok(record.into_view())
    }

    pub async fn delete(upstream: &UpstreamClient, id: &str) -> Result<DeleteResponse, ApiError> {
        upstream
            .mutate::<_, serde_json::Value>(queries::DELETE_WORKOUT, json!({ "id": id }))
            .await?;
        Ok(DeleteResponse {
            success: true,
            warning: None,
        })
    }

    async fn fetch(upstream: &UpstreamClient, id: &str) -> Result<WorkoutRecord, ApiError> {
        upstream
            .query_first(queries::WORKOUT_BY_ID, json!({ "id": id }))
            .await?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))
    }
}
