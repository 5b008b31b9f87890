//! Login and signup against the upstream user table
//!
//! Credentials live upstream; this layer issues no tokens and keeps no
//! sessions. Signup is self-service trainer registration: a user account
//! plus a linked trainer record, with the same compensating-delete policy
//! as client provisioning.

use crate::error::ApiError;
use crate::upstream::records::{TrainerRecord, UserRecord};
use crate::upstream::{queries, UpstreamClient};
use anyhow::anyhow;
use serde_json::json;
use studio_admin_shared::types::UserView;
use tracing::{info, warn};
use validator::ValidateEmail;

/// Input for signup, already presence-checked by the route layer.
pub struct NewSignup {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

pub struct AuthService;

impl AuthService {
    /// Verify an email/password pair against the upstream user record.
    ///
    /// Failure is a 404 in either case, so callers cannot distinguish an
    /// unknown email from a wrong password.
    pub async fn login(
        upstream: &UpstreamClient,
        email: &str,
        password: &str,
    ) -> Result<UserView, ApiError> {
        let user: Option<UserRecord> = upstream
            .query_first(queries::USER_FOR_LOGIN, json!({ "email": email }))
            .await?;

        let user = user
            .filter(|user| user.password.as_deref() == Some(password))
            .ok_or_else(|| ApiError::NotFound("Invalid email or password".to_string()))?;

        Ok(user.into_view())
    }

    /// Register a trainer: create the user account, then the trainer record.
    pub async fn signup(upstream: &UpstreamClient, input: NewSignup) -> Result<UserView, ApiError> {
        if !input.email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }
        if input.password.len() < 8 {
            return Err(ApiError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        let existing: Option<UserRecord> = upstream
            .query_first(queries::USER_BY_EMAIL, json!({ "email": input.email }))
            .await?;
        if existing.is_some() {
            return Err(ApiError::Validation("Email already registered".to_string()));
        }

        let user: UserRecord = upstream
            .mutate(
                queries::CREATE_USER,
                json!({
                    "firstName": input.first_name,
                    "lastName": input.last_name,
                    "email": input.email,
                    "password": input.password,
                }),
            )
            .await?
            .ok_or_else(|| ApiError::Internal(anyhow!("user mutation returned no record")))?;

        let created = upstream
            .mutate::<_, TrainerRecord>(queries::CREATE_TRAINER, json!({ "userId": user.id }))
            .await;

        match created {
            Ok(Some(_)) => {
                info!(user_id = %user.id, "trainer signed up");
                Ok(user.into_view())
            }
            Ok(None) => {
                Self::compensate_user(upstream, &user.id).await;
                Err(ApiError::Internal(anyhow!(
                    "trainer mutation returned no record"
                )))
            }
            Err(err) => {
                Self::compensate_user(upstream, &user.id).await;
                Err(err.into())
            }
        }
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
