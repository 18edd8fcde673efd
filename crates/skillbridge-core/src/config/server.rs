//! `[server]` and `[server.cors]` sections.

use serde::{Deserialize, Serialize};

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// How long in-flight feed requests may run after a shutdown signal.
    pub shutdown_grace_seconds: u64,
    /// Cross-origin settings for the browser client.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// `host:port` string handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            shutdown_grace_seconds: 30,
            cors: CorsConfig::default(),
        }
    }
}

/// Browser origins allowed to call the feed API.
///
/// `["*"]` allows any origin and should only be used locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins sent back in `Access-Control-Allow-Origin`.
    pub allowed_origins: Vec<String>,
    /// HTTP methods allowed on preflight.
    pub allowed_methods: Vec<String>,
    /// How long a browser may cache a preflight response.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            // The feed only reads, patches and deletes.
            allowed_methods: ["GET", "PATCH", "DELETE", "OPTIONS"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_age_seconds: 600,
        }
    }
}
