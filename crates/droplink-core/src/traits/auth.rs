//! Bearer-token verification trait.

use async_trait::async_trait;

use crate::model::AuthenticatedUser;
use crate::result::AppResult;

/// Verifies bearer tokens against the external identity provider.
#[async_trait]
pub trait TokenVerifier: Send + Sync + std::fmt::Debug + 'static {
    /// Verify an opaque bearer token and resolve the caller identity.
    ///
    /// Fails with an unauthorized error for invalid, expired, or otherwise
    /// unverifiable tokens.
    async fn verify(&self, token: &str) -> AppResult<AuthenticatedUser>;
}
