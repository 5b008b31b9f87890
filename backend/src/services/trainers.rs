//! Trainer management
//!
//! Trainers are role records linking a user to the clients they coach.
//! Deletion cascades to the linked user account with the same best-effort
//! policy as client deletion.

use crate::error::ApiError;
use crate::upstream::records::{TrainerRecord, UserRecord};
use crate::upstream::{queries, UpstreamClient};
use anyhow::anyhow;
use serde_json::json;
use studio_admin_shared::types::{DeleteResponse, TrainerSummary};
use tracing::warn;

/// Input for trainer updates; unset fields keep their current value.
pub struct TrainerChanges {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

pub struct TrainerService;

impl TrainerService {
    pub async fn list(upstream: &UpstreamClient) -> Result<Vec<TrainerSummary>, ApiError> {
        let records = upstream
            .query_nodes::<_, TrainerRecord>(queries::TRAINERS_ALL, json!({}))
            .await?;
        Ok(records
            .into_iter()
            .map(TrainerRecord::into_summary)
            .collect())
    }

    pub async fn get(upstream: &UpstreamClient, id: &str) -> Result<TrainerSummary, ApiError> {
        let record = Self::fetch(upstream, id).await?;
        Ok(record.into_summary())
    }

    /// Update the linked user's identity fields.
    pub async fn update(
        upstream: &UpstreamClient,
        changes: TrainerChanges,
    ) -> Result<TrainerSummary, ApiError> {
        let record = Self::fetch(upstream, &changes.id).await?;
        let user = record
            .user
            .clone()
            .ok_or_else(|| ApiError::NotFound("Trainer has no linked user".to_string()))?;

        let updated: UserRecord = upstream
            .mutate(
                queries::UPDATE_USER,
                json!({
                    "id": user.id,
                    "firstName": changes.first_name.unwrap_or(user.first_name),
                    "lastName": changes.last_name.unwrap_or(user.last_name),
                    "email": changes.email.unwrap_or(user.email),
                }),
            )
            .await?
            .ok_or_else(|| ApiError::Internal(anyhow!("user mutation returned no record")))?;

        let mut summary = record.into_summary();
        summary.name = updated.full_name();
        summary.email = updated.email;
        Ok(summary)
    }

    /// Delete the trainer record, then best-effort delete the linked user.
    pub async fn delete(upstream: &UpstreamClient, id: &str) -> Result<DeleteResponse, ApiError> {
        let record = Self::fetch(upstream, id).await?;
        let user_id = record.user_id().to_string();

        upstream
            .mutate::<_, serde_json::Value>(queries::DELETE_TRAINER, json!({ "id": id }))
            .await?;

        if user_id.is_empty() {
            return Ok(DeleteResponse {
                success: true,
                warning: None,
            });
        }

        match upstream
            .mutate::<_, serde_json::Value>(queries::DELETE_USER, json!({ "id": user_id }))
            .await
        {
            Ok(_) => Ok(DeleteResponse {
                success: true,
                warning: None,
            }),
            Err(err) => {
                warn!(%user_id, error = %err, "trainer deleted but linked user removal failed");
                Ok(DeleteResponse {
                    success: true,
                    warning: Some(format!(
                        "Trainer deleted, but the linked user account {user_id} could not be removed"
                    )),
                })
            }
        }
    }

    async fn fetch(upstream: &UpstreamClient, id: &str) -> Result<TrainerRecord, ApiError> {
        upstream
            .query_first(queries::TRAINER_BY_ID, json!({ "id": id }))
            .await?
            .ok_or_else(|| ApiError::NotFound("Trainer not found".to_string()))
    }
}
