//! Application error handling
//!
//! One error type for every route handler, converted to the wire contract
//! `{error, details?}`. The status taxonomy is fixed: 400 for bad input and
//! upstream-reported domain failures, 404 for missing entities, 405 for
//! wrong methods, 500 for configuration or unexpected failures.

use crate::upstream::{GraphQLError, UpstreamError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use studio_admin_shared::types::ErrorBody;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed request field; message names the field.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Upstream API key was never configured for this deployment.
    #[error("Missing API key")]
    MissingApiKey,

    /// Transport-level GraphQL errors; the raw array is echoed in `details`.
    #[error("GraphQL error")]
    Graphql(Vec<GraphQLError>),

    /// Mutation-level failure; carries the first upstream error message.
    #[error("{0}")]
    Mutation(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::MissingApiKey => ApiError::MissingApiKey,
            UpstreamError::Graphql(errors) => ApiError::Graphql(errors),
            UpstreamError::Mutation(message) => ApiError::Mutation(message),
            UpstreamError::Request(err) => ApiError::Internal(err.into()),
            UpstreamError::NoData => {
                ApiError::Internal(anyhow::anyhow!("upstream returned no data"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            ApiError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Missing API key".to_string(),
                None,
            ),
            ApiError::Graphql(errors) => {
                let details = serde_json::to_value(&errors).ok();
                (StatusCode::BAD_REQUEST, "GraphQL error".to_string(), details)
            }
            ApiError::Mutation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(serde_json::Value::String(err.to_string())),
                )
            }
        };

        let body = Json(ErrorBody {
            error: message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation("First name is required".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("User not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_method_not_allowed_status() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_missing_api_key_maps_to_500() {
        let error: ApiError = UpstreamError::MissingApiKey.into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_mutation_failure_maps_to_400() {
        let error: ApiError = UpstreamError::Mutation("Email already taken".to_string()).into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_graphql_errors_map_to_400() {
        let errors = vec![GraphQLError {
            message: "unknown field".to_string(),
            locations: None,
            path: None,
        }];
        let response = ApiError::Graphql(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
