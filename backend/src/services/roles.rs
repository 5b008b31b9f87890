//! Role resolution: who does a given email act as?
//!
//! Resolution is sequential: admin shortcut, then user-by-email, then
//! client-by-user, then trainer-by-user. Worst case is three upstream
//! round-trips; nothing is cached or parallelized.

use crate::config::AdminConfig;
use crate::error::ApiError;
use crate::upstream::records::{ClientRecord, TrainerRecord, UserRecord};
use crate::upstream::{queries, UpstreamClient};
use serde_json::json;
use studio_admin_shared::types::RoleProfile;
use tracing::debug;

pub struct RoleService;

impl RoleService {
    /// Resolve an email into an admin, client, or trainer profile.
    ///
    /// The client lookup runs before the trainer lookup and short-circuits,
    /// so a user linked to both a client and a trainer record always
    /// resolves as a client. That precedence is a contract; callers rely
    /// on it.
    pub async fn resolve(
        upstream: &UpstreamClient,
        admin: &AdminConfig,
        email: &str,
    ) -> Result<RoleProfile, ApiError> {
        // Admin never exists upstream; short-circuit before any network call.
        if !admin.email.is_empty() && email.eq_ignore_ascii_case(&admin.email) {
            return Ok(RoleProfile::Admin {
                name: admin.name.clone(),
                email: admin.email.clone(),
                clients: Vec::new(),
            });
        }

        let user: UserRecord = upstream
            .query_first(queries::USER_BY_EMAIL, json!({ "email": email }))
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        debug!(user_id = %user.id, "resolving role for user");

        if let Some(client) = upstream
            .query_first::<_, ClientRecord>(queries::CLIENT_BY_USER, json!({ "userId": user.id }))
            .await?
        {
            return Ok(RoleProfile::Client {
                profile: client.into_summary(),
                clients: Vec::new(),
            });
        }

        if let Some(trainer) = upstream
            .query_first::<_, TrainerRecord>(queries::TRAINER_BY_USER, json!({ "userId": user.id }))
            .await?
        {
            return Ok(RoleProfile::Trainer {
                profile: trainer.into_summary(),
            });
        }

        Err(ApiError::NotFound(
            "No client or trainer profile found for this user".to_string(),
        ))
    }
}
