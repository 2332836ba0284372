//! Object-storage provider configuration.

use serde::{Deserialize, Serialize};

/// Remote object-storage provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base URL of the provider's REST API.
    pub base_url: String,
    /// Provider API key.
    pub api_key: String,
    /// Provider API secret.
    pub api_secret: String,
    /// Logical folder that uploads land in and listings read from.
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Upload request timeout in seconds.
    #[serde(default = "default_upload_timeout")]
    pub upload_timeout_seconds: u64,
    /// Delete and list request timeout in seconds.
    #[serde(default = "default_delete_timeout")]
    pub delete_timeout_seconds: u64,
}

fn default_folder() -> String {
    "uploads".to_string()
}

fn default_upload_timeout() -> u64 {
    30
}

fn default_delete_timeout() -> u64 {
    10
}
