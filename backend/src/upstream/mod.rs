//! Upstream GraphQL platform access
//!
//! The upstream backend-as-a-service is the system of record for every
//! entity; this service holds no state of its own. All data access goes
//! through one shared [`UpstreamClient`] built at startup: a reqwest client,
//! the configured endpoint, and the bearer API key. Handlers never issue
//! raw HTTP themselves.

mod graphql;
pub mod queries;
pub mod records;

pub use graphql::{GraphQLError, GraphQLRequest, GraphQLResponse, MutationErrorDetail, MutationPayload};

use graphql::{MutationData, QueryData};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failures surfaced by upstream calls, already classified the way the
/// HTTP layer needs them.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The API key was never configured; surfaced at request time.
    #[error("Missing API key")]
    MissingApiKey,

    /// Transport-level GraphQL errors (the raw `errors` array).
    #[error("GraphQL error")]
    Graphql(Vec<GraphQLError>),

    /// A mutation reported `success: false`; carries the first error message.
    #[error("{0}")]
    Mutation(String),

    /// Network failure or an unparseable response body.
    #[error("Upstream request failed")]
    Request(#[from] reqwest::Error),

    /// The response had neither `data` nor `errors`.
    #[error("Upstream returned no data")]
    NoData,
}

/// Shared client for the upstream GraphQL endpoint.
///
/// Cheap to clone: the inner reqwest client is reference-counted.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl UpstreamClient {
    /// Build the client once at startup.
    ///
    /// `api_key` is `None` when the deployment never configured one; calls
    /// will then fail with [`UpstreamError::MissingApiKey`] instead of
    /// reaching the network.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// Execute one GraphQL operation and deserialize its `data` payload.
    ///
    /// Classification follows the response shape: an `errors` array becomes
    /// [`UpstreamError::Graphql`]; mutation-level failures are handled by
    /// [`Self::mutate`] on top of this.
    pub async fn execute<V, T>(&self, document: &'static str, variables: V) -> Result<T, UpstreamError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let api_key = self.api_key.as_ref().ok_or(UpstreamError::MissingApiKey)?;

        debug!(endpoint = %self.endpoint, "executing upstream operation");

        let request = GraphQLRequest {
            query: document,
            variables,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", api_key.expose_secret()),
            )
            .json(&request)
            .send()
            .await?;

        let payload: GraphQLResponse<T> = response.json().await?;

        if let Some(errors) = payload.errors {
            if !errors.is_empty() {
                return Err(UpstreamError::Graphql(errors));
            }
        }

        payload.data.ok_or(UpstreamError::NoData)
    }

    /// Run a query whose document aliases its root connection as `items`,
    /// returning the flattened node list.
    pub async fn query_nodes<V, T>(
        &self,
        document: &'static str,
        variables: V,
    ) -> Result<Vec<T>, UpstreamError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let data: QueryData<T> = self.execute(document, variables).await?;
        Ok(data.items.into_nodes())
    }

    /// Like [`Self::query_nodes`] but keeps only the first match, the
    /// lookup-by-unique-field pattern.
    pub async fn query_first<V, T>(
        &self,
        document: &'static str,
        variables: V,
    ) -> Result<Option<T>, UpstreamError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut nodes = self.query_nodes(document, variables).await?;
        if nodes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(nodes.swap_remove(0)))
        }
    }

    /// Run a mutation whose document aliases its root field as `payload`
    /// and its entity as `record`. Returns the record (if the mutation
    /// yields one) or [`UpstreamError::Mutation`] with the first reported
    /// error message.
    pub async fn mutate<V, T>(
        &self,
        document: &'static str,
        variables: V,
    ) -> Result<Option<T>, UpstreamError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let data: MutationData<T> = self.execute(document, variables).await?;
        data.payload.into_result()
    }
}
