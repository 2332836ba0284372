//! Bearer-token verification configuration.

use serde::{Deserialize, Serialize};

/// Settings for verifying bearer tokens issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC shared secret the identity provider signs tokens with.
    pub jwt_secret: String,
    /// Allowed clock skew in seconds when checking expiry.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_leeway() -> u64 {
    5
}
