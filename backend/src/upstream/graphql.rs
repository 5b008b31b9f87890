//! GraphQL wire types for the upstream platform
//!
//! Requests are `{query, variables}`; responses are `{data, errors}`.
//! Operation documents alias their roots (`items`, `payload`, `record`) so
//! one set of generic wrappers deserializes every operation.

use super::records::Connection;
use super::UpstreamError;
use serde::{Deserialize, Serialize};

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    pub variables: V,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

/// Transport-level GraphQL error. Echoed verbatim into the `details` field
/// of 400 responses, so it keeps every field the upstream sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<GraphQLErrorLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLErrorLocation {
    pub line: i32,
    pub column: i32,
}

/// `data` shape for query documents: the root connection is aliased `items`.
#[derive(Debug, Deserialize)]
pub struct QueryData<T> {
    pub items: Connection<T>,
}

/// `data` shape for mutation documents: the root field is aliased `payload`.
#[derive(Debug, Deserialize)]
pub struct MutationData<T> {
    pub payload: MutationPayload<T>,
}

/// Mutation result body: `{success, errors, record?}`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MutationPayload<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<MutationErrorDetail>,
    #[serde(default)]
    pub record: Option<T>,
}

/// One entry of a mutation's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationErrorDetail {
    #[serde(default)]
    pub message: String,
}

impl<T> MutationPayload<T> {
    /// Collapse into the record on success, or the first error message on
    /// failure. The remaining error entries are discarded.
    pub fn into_result(self) -> Result<Option<T>, UpstreamError> {
        if self.success {
            Ok(self.record)
        } else {
            Err(UpstreamError::Mutation(self.first_message()))
        }
    }

    fn first_message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.trim())
            .find(|m| !m.is_empty())
            .unwrap_or("Upstream mutation failed")
            .to_string()
    }
}
