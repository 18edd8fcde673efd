//! Activity feed query configuration.

use serde::{Deserialize, Serialize};

use crate::types::pagination::{DEFAULT_LIMIT, MAX_LIMIT};

/// Limits applied to feed queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Page size used when the client does not send `limit`.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// Largest page size a client may request.
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn default_max_limit() -> u64 {
    MAX_LIMIT
}
