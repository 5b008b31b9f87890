//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state
//! extraction. The upstream client is built once at startup; handlers
//! never construct HTTP clients per request. All fields are cheap to
//! clone and immutable after creation.

use crate::config::AppConfig;
use crate::upstream::UpstreamClient;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Shared client for the upstream GraphQL platform
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Create the application state, building the upstream client from the
    /// configured endpoint, key, and timeout.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(
            config.upstream.endpoint.clone(),
            config.upstream.api_key_secret(),
            Duration::from_secs(config.upstream.timeout_secs),
        )?;

        Ok(Self {
            config: Arc::new(config),
            upstream,
        })
    }

    /// Get a reference to the upstream client
    #[inline]
    pub fn upstream(&self) -> &UpstreamClient {
        &self.upstream
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
