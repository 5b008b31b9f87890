//! Client management
//!
//! Clients are role records linking a user to an optional trainer. Creation
//! and deletion are composite operations: the linked user account is created
//! and removed alongside the client record.

use crate::error::ApiError;
use crate::upstream::records::{ClientRecord, UserRecord};
use crate::upstream::{queries, UpstreamClient};
use anyhow::anyhow;
use serde_json::json;
use studio_admin_shared::types::{ClientSummary, DeleteResponse};
use tracing::{info, warn};

/// Password applied when a trainer provisions a client without choosing one.
pub const DEFAULT_CLIENT_PASSWORD: &str = "defaultPassword123";

/// Input for client creation, already validated by the route layer.
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<String>,
    pub trainer_id: Option<String>,
}

/// Input for client updates; unset fields keep their current value.
pub struct ClientChanges {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

pub struct ClientService;

impl ClientService {
    pub async fn list(upstream: &UpstreamClient) -> Result<Vec<ClientSummary>, ApiError> {
        let records = upstream
            .query_nodes::<_, ClientRecord>(queries::CLIENTS_ALL, json!({}))
            .await?;
        Ok(records.into_iter().map(ClientRecord::into_summary).collect())
    }

    pub async fn get(upstream: &UpstreamClient, id: &str) -> Result<ClientSummary, ApiError> {
        let record = Self::fetch(upstream, id).await?;
        Ok(record.into_summary())
    }

    pub async fn list_by_trainer(
        upstream: &UpstreamClient,
        trainer_id: &str,
    ) -> Result<Vec<ClientSummary>, ApiError> {
        let records = upstream
            .query_nodes::<_, ClientRecord>(
                queries::CLIENTS_BY_TRAINER,
                json!({ "trainerId": trainer_id }),
            )
            .await?;
        Ok(records.into_iter().map(ClientRecord::into_summary).collect())
    }

    /// Create the user account, then the client record linking to it.
    ///
    /// If the client step fails, the just-created user is deleted again so
    /// no orphaned account remains; a failed compensation is logged and the
    /// original failure propagates.
    pub async fn create(
        upstream: &UpstreamClient,
        input: NewClient,
    ) -> Result<ClientSummary, ApiError> {
        let password = input
            .password
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_CLIENT_PASSWORD.to_string());

        let user: UserRecord = upstream
            .mutate(
                queries::CREATE_USER,
                json!({
                    "firstName": input.first_name,
                    "lastName": input.last_name,
                    "email": input.email,
                    "password": password,
                }),
            )
            .await?
            .ok_or_else(|| ApiError::Internal(anyhow!("user mutation returned no record")))?;

        let created = upstream
            .mutate::<_, ClientRecord>(
                queries::CREATE_CLIENT,
                json!({ "userId": user.id, "trainerId": input.trainer_id }),
            )
            .await;

        match created {
            Ok(Some(client)) => {
                info!(client_id = %client.id, user_id = %user.id, "client created");
                Ok(client.into_summary())
            }
            Ok(None) => {
                Self::compensate_user(upstream, &user.id).await;
                Err(ApiError::Internal(anyhow!(
                    "client mutation returned no record"
                )))
            }
            Err(err) => {
                Self::compensate_user(upstream, &user.id).await;
                Err(err.into())
            }
        }
    }

    /// Update the linked user's identity fields.
    pub async fn update(
        upstream: &UpstreamClient,
        changes: ClientChanges,
    ) -> Result<ClientSummary, ApiError> {
        let record = Self::fetch(upstream, &changes.id).await?;
        let user = record
            .user
            .clone()
            .ok_or_else(|| ApiError::NotFound("Client has no linked user".to_string()))?;

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

    /// Delete the client record, then best-effort delete the linked user.
    ///
    /// The client deletion is the primary operation; a failed user deletion
    /// is reported through `warning` on a successful response, never as a
    /// failure. A client with no linked user skips the user step entirely.
    pub async fn delete(upstream: &UpstreamClient, id: &str) -> Result<DeleteResponse, ApiError> {
        let record = Self::fetch(upstream, id).await?;
        let user_id = record.user_id().to_string();

        upstream
            .mutate::<_, serde_json::Value>(queries::DELETE_CLIENT, json!({ "id": id }))
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
                warn!(%user_id, error = %err, "client deleted but linked user removal failed");
                Ok(DeleteResponse {
                    success: true,
                    warning: Some(format!(
                        "Client deleted, but the linked user account {user_id} could not be removed"
                    )),
                })
            }
        }
    }

    pub async fn assign_trainer(
        upstream: &UpstreamClient,
        client_id: &str,
        trainer_id: &str,
    ) -> Result<ClientSummary, ApiError> {
        Self::set_trainer(upstream, client_id, Some(trainer_id)).await
    }

    pub async fn remove_trainer(
        upstream: &UpstreamClient,
        client_id: &str,
    ) -> Result<ClientSummary, ApiError> {
        Self::set_trainer(upstream, client_id, None).await
    }

    async fn set_trainer(
        upstream: &UpstreamClient,
        client_id: &str,
        trainer_id: Option<&str>,
    ) -> Result<ClientSummary, ApiError> {
        let record: ClientRecord = upstream
            .mutate(
                queries::SET_CLIENT_TRAINER,
                json!({ "id": client_id, "trainerId": trainer_id }),
            )
            .await?
            .ok_or_else(|| ApiError::Internal(anyhow!("client mutation returned no record")))?;
        Ok(record.into_summary())
    }

    async fn fetch(upstream: &UpstreamClient, id: &str) -> Result<ClientRecord, ApiError> {
        upstream
            .query_first(queries::CLIENT_BY_ID, json!({ "id": id }))
            .await?
            .ok_or_else(|| ApiError::NotFound("Client not found".to_string()))
    }

    async fn compensate_user(upstream: &UpstreamClient, user_id: &str) {
        if let Err(err) = upstream
            .mutate::<_, serde_json::Value>(queries::DELETE_USER, json!({ "id": user_id }))
            .await
        {
            warn!(%user_id, error = %err, "compensating user deletion failed; user account is orphaned");
        }
    }
}
