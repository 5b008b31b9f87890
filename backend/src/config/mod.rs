//! Configuration management for the Studio Admin backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: STUDIO__)
//!
//! The upstream endpoint and API key are injected here; switching
//! environments is a deployment concern, never a code change.

use anyhow::Result;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub admin: AdminConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream GraphQL platform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub endpoint: String,
    /// Bearer key for the upstream platform; empty means unconfigured, and
    /// requests will fail with 500 "Missing API key".
    pub api_key: String,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// The API key wrapped for the client, or `None` when unconfigured.
    pub fn api_key_secret(&self) -> Option<SecretString> {
        if self.api_key.is_empty() {
            None
        } else {
            Some(SecretString::new(self.api_key.clone()))
        }
    }
}

/// Admin account configuration
///
/// The admin never exists upstream; role resolution matches this email
/// case-insensitively and short-circuits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub email: String,
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            upstream: UpstreamConfig {
                endpoint: "http://localhost:4000/graphql".to_string(),
                api_key: String::new(),
                timeout_secs: 30,
            },
            admin: AdminConfig {
                email: "admin@studio.local".to_string(),
                name: "Studio Admin".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with STUDIO__ prefix
    ///    e.g., STUDIO__UPSTREAM__API_KEY=... sets upstream.api_key
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("STUDIO").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
